//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the public API the way the command-line tool does.

use tapeline::{
    ContractViolation, DEFAULT_MIN_LENGTH, DiagramBuilder, TapelineError,
    config::{AppConfig, LayoutConfig, OutputConfig},
    generate_diagram,
    sink::{BufferSink, DiagramSink},
};

const SCENARIO_CELLS: [&str; 20] = [
    "*", "-", "4", "5", ",", "0b255", ",", "NULL", ",", "(", "2", ";", "3", ";", "[", "4", ";",
    "5", "]", ")",
];

fn marker_row(latex: &str) -> &str {
    latex
        .lines()
        .nth(9)
        .expect("diagram should have a pointer row")
}

#[test]
fn test_builder_api_exists() {
    let builder = DiagramBuilder::default();
    assert_eq!(builder.config().layout().min_length(), DEFAULT_MIN_LENGTH);
}

#[test]
fn test_default_min_length_scenario() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .build("X", SCENARIO_CELLS, 19)
        .expect("Failed to build diagram");

    assert_eq!(diagram.state_label(), "X");
    assert_eq!(diagram.tape().len(), 21);
    assert_eq!(diagram.tape().head(), 19);
    assert_eq!(diagram.tape().current(), Some(")"));
    assert_eq!(diagram.tape().cells()[20], "");

    let latex = builder.render_latex(&diagram);
    assert!(latex.contains(&format!(r"\begin{{tabular}}{{{}}}", "c".repeat(23))));
    assert!(latex.contains(r"\multicolumn{23}{l}{\statename{X}} \\"));
    assert!(latex.contains(r"\symb{0b255}"));

    let markers = marker_row(&latex);
    let expected = format!(r"{}$\uparrow${}", "& ".repeat(20), " &".repeat(2));
    assert_eq!(markers, expected);
}

#[test]
fn test_empty_tape_scenario() {
    let builder = DiagramBuilder::new(AppConfig::new(
        LayoutConfig::new(3),
        OutputConfig::default(),
    ));
    let diagram = builder
        .build("q", Vec::<String>::new(), 0)
        .expect("Failed to build diagram");

    assert_eq!(diagram.tape().cells(), ["", "", ""]);
    assert_eq!(diagram.tape().head(), 1);

    let latex = builder.render_latex(&diagram);
    assert_eq!(marker_row(&latex), r"& & $\uparrow$ & &");
}

#[test]
fn test_already_at_floor_scenario() {
    let builder = DiagramBuilder::new(AppConfig::default().with_min_length(2));
    let diagram = builder
        .build("q", ["A", "B"], 0)
        .expect("Failed to build diagram");

    assert_eq!(diagram.tape().cells(), ["A", "B"]);
    assert_eq!(diagram.tape().head(), 0);
}

#[test]
fn test_out_of_range_head_is_rejected() {
    let builder = DiagramBuilder::default();
    let result = builder.build("X", ["a", "b"], 2);

    match result {
        Err(TapelineError::Contract(ContractViolation::HeadOutOfRange { head, len })) => {
            assert_eq!(head, 2);
            assert_eq!(len, 2);
        }
        other => panic!("Expected contract violation, got {other:?}"),
    }
}

#[test]
fn test_generate_diagram_matches_builder() {
    let via_fn = generate_diagram("X", SCENARIO_CELLS, 19, DEFAULT_MIN_LENGTH).unwrap();

    let builder = DiagramBuilder::default();
    let diagram = builder.build("X", SCENARIO_CELLS, 19).unwrap();
    assert_eq!(via_fn, builder.render_latex(&diagram));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = generate_diagram("S", ["1", "1", "0"], 1, 7).unwrap();
    let second = generate_diagram("S", ["1", "1", "0"], 1, 7).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_buffer_sink_accumulates_diagrams() {
    let mut clipboard = BufferSink::new();

    let first = generate_diagram("A", ["0"], 0, 3).unwrap();
    let second = generate_diagram("B", ["1"], 0, 3).unwrap();
    clipboard.accept(&first).unwrap();
    clipboard.accept(&second).unwrap();

    assert_eq!(clipboard.contents(), format!("{first}{second}"));
}
