//! System clipboard sink backed by `arboard`.
//!
//! Each accepted diagram is appended to whatever text the clipboard already
//! holds, so several runs with `--append` accumulate into one paste.

use log::{debug, info};

use tapeline::sink::{ClearableSink, DiagramSink, SinkError};

const SINK_NAME: &str = "clipboard";

/// Appends diagrams to the system clipboard.
pub struct ClipboardSink {
    clipboard: arboard::Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    wait: bool,
}

impl ClipboardSink {
    /// Connect to the system clipboard.
    ///
    /// With `wait` set, writes on X11 and Wayland block until another program
    /// takes ownership of the selection. Otherwise they return immediately and
    /// the contents outlive the process only if a clipboard manager picks
    /// them up.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Unavailable`] if no clipboard service is reachable.
    pub fn open(wait: bool) -> Result<Self, SinkError> {
        let clipboard = arboard::Clipboard::new().map_err(unavailable)?;
        debug!(wait; "Clipboard opened");
        Ok(Self { clipboard, wait })
    }

    fn current_text(&mut self) -> Result<String, SinkError> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(text),
            // Empty or non-text clipboard
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(unavailable(err)),
        }
    }

    #[cfg(target_os = "linux")]
    fn store(&mut self, text: String) -> Result<(), SinkError> {
        use arboard::SetExtLinux;

        if self.wait {
            return self
                .clipboard
                .set()
                .wait()
                .text(text)
                .map_err(unavailable);
        }
        self.clipboard.set_text(text).map_err(unavailable)
    }

    #[cfg(not(target_os = "linux"))]
    fn store(&mut self, text: String) -> Result<(), SinkError> {
        self.clipboard.set_text(text).map_err(unavailable)
    }
}

impl DiagramSink for ClipboardSink {
    fn accept(&mut self, text: &str) -> Result<(), SinkError> {
        let mut contents = self.current_text()?;
        let previous_len = contents.len();
        contents.push_str(text);
        self.store(contents)?;

        info!(previous_len, appended_len = text.len(); "Diagram appended to clipboard");
        Ok(())
    }
}

impl ClearableSink for ClipboardSink {
    fn clear(&mut self) -> Result<(), SinkError> {
        self.clipboard.clear().map_err(unavailable)?;
        debug!("Clipboard cleared");
        Ok(())
    }
}

fn unavailable(err: arboard::Error) -> SinkError {
    SinkError::Unavailable {
        sink: SINK_NAME,
        reason: err.to_string(),
    }
}
