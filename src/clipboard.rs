use crate::errors::ClipboardError;
use crate::state::{ElementId, Surface};
use std::sync::Arc;
use tracing::{info, warn};

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard. A handle is opened per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard.set_text(text).map_err(ClipboardError::from)
    }
}

/// Bound to the `copy_time_left_data` button.
pub struct CopyHandler {
    surface: Arc<dyn Surface>,
    clipboard: Arc<dyn Clipboard>,
}

impl CopyHandler {
    pub fn new(surface: Arc<dyn Surface>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { surface, clipboard }
    }

    /// Copies whatever the countdown element shows right now.
    pub fn on_click(&self) -> Result<String, ClipboardError> {
        let content = self.surface.text(ElementId::TimeLeftUntilNewYearView);
        match self.clipboard.write_text(&content) {
            Ok(()) => {
                info!(copied = %content, "recorded to clipboard");
                Ok(content)
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                Err(err)
            }
        }
    }
}
