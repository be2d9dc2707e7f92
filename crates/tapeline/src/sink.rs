//! Output collaborators for rendered diagrams.
//!
//! A [`DiagramSink`] receives the finished diagram text. Sinks never see
//! partial output: they are only called after validation and rendering have
//! both succeeded. A [`ClearableSink`] additionally holds accumulated text
//! that can be discarded, like the system clipboard.

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

/// Errors raised while delivering a diagram to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write diagram: {0}")]
    Io(#[from] io::Error),

    #[error("{sink} is unavailable: {reason}")]
    Unavailable { sink: &'static str, reason: String },
}

/// A destination for rendered diagram text.
pub trait DiagramSink {
    /// Deliver `text` to this sink.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the destination cannot accept the text.
    fn accept(&mut self, text: &str) -> Result<(), SinkError>;
}

/// A sink that accumulates text and can be emptied.
///
/// `accept` appends to the existing contents; `clear` discards them.
pub trait ClearableSink: DiagramSink {
    /// Discard everything accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the contents cannot be discarded.
    fn clear(&mut self) -> Result<(), SinkError>;
}

/// Writes diagrams to an [`io::Write`] stream.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer` as a sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DiagramSink for WriterSink<W> {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        debug!(bytes = text.len(); "Diagram written");
        Ok(())
    }
}

/// An in-memory buffer that accumulates every diagram it receives.
///
/// Each call replaces the contents with `previous + text`, the same way the
/// clipboard is updated.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    contents: String,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer already holding `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Everything received so far.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl DiagramSink for BufferSink {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        self.contents.push_str(text);
        Ok(())
    }
}

impl ClearableSink for BufferSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.contents.clear();
        Ok(())
    }
}

impl<S: DiagramSink + ?Sized> DiagramSink for &mut S {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).accept(text)
    }
}

impl<S: ClearableSink + ?Sized> ClearableSink for &mut S {
    fn clear(&mut self) -> Result<(), SinkError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_writes_text() {
        let mut written = Vec::new();
        {
            let mut sink = WriterSink::new(&mut written);
            sink.accept("hello").unwrap();
            sink.accept(" world").unwrap();
        }
        assert_eq!(written, b"hello world");
    }

    #[test]
    fn test_buffer_sink_accumulates() {
        let mut sink = BufferSink::new();
        sink.accept("first\n").unwrap();
        sink.accept("second\n").unwrap();
        assert_eq!(sink.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_buffer_sink_clear() {
        let mut sink = BufferSink::with_contents("stale");
        sink.clear().unwrap();
        assert_eq!(sink.contents(), "");

        sink.accept("fresh").unwrap();
        assert_eq!(sink.contents(), "fresh");
    }

    #[test]
    fn test_mut_ref_sink() {
        let mut buffer = BufferSink::with_contents("a");
        {
            let mut sink: &mut BufferSink = &mut buffer;
            sink.accept("b").unwrap();
            ClearableSink::clear(&mut sink).unwrap();
            sink.accept("x").unwrap();
        }
        assert_eq!(buffer.contents(), "x");
    }

    #[test]
    fn test_unavailable_message() {
        let err = SinkError::Unavailable {
            sink: "clipboard",
            reason: "no display".to_string(),
        };
        assert_eq!(err.to_string(), "clipboard is unavailable: no display");
    }
}
