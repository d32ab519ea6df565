//! Sample modal dialog.

/// Static message shown while the modal is open.
const MODAL_MESSAGE: &str = "Woah!";

/// A modal dialog that shows a fixed message.
///
/// The dialog is either closed or open; it carries no data between
/// invocations. The host calls [`open`](Self::open) when the command
/// fires and [`close`](Self::close) when the user dismisses it.
#[derive(Debug, Clone)]
pub struct SampleModal {
    /// Whether the modal is visible.
    visible: bool,
    /// Rendered content; empty while closed.
    content: String,
}

impl SampleModal {
    /// Create a closed modal.
    pub fn new() -> Self {
        Self {
            visible: false,
            content: String::new(),
        }
    }

    /// Open the modal and render its message.
    pub fn open(&mut self) {
        self.visible = true;
        self.content = MODAL_MESSAGE.to_string();
    }

    /// Close the modal and clear its content.
    pub fn close(&mut self) {
        self.visible = false;
        self.content.clear();
    }

    /// Whether the modal is currently open.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// The content the host renders.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for SampleModal {
    fn default() -> Self {
        Self::new()
    }
}
