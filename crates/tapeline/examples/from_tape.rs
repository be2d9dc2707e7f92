//! Example: Rendering a tape snapshot and collecting it in a buffer
//!
//! This example builds two diagrams with the `DiagramBuilder` API and
//! appends both to an in-memory sink, the way the CLI appends to the
//! clipboard.

use tapeline::{
    DiagramBuilder,
    config::AppConfig,
    sink::{BufferSink, DiagramSink},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = DiagramBuilder::new(AppConfig::default().with_min_length(9));
    let mut collected = BufferSink::new();

    // A binary incrementer halfway through a carry
    let steps = [("carry", 2), ("done", 1)];
    for (state, head) in steps {
        let diagram = builder.build(state, ["1", "0", "1", "1"], head)?;
        println!(
            "{state}: {} cells, head at {}",
            diagram.tape().len(),
            diagram.tape().head()
        );
        collected.accept(&builder.render_latex(&diagram))?;
    }

    println!("\n{}", collected.contents());
    Ok(())
}
