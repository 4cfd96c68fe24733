//! Clipboard adapter
//!
//! The system clipboard sits behind a trait so the engine can be driven with
//! a mock in tests and so write failures come back as a `Result` instead of
//! being fired and forgotten.

use passgen_core::prelude::*;

/// Somewhere a password can be copied to
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept alive afterwards: on X11 and
/// Wayland the copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::clipboard("clipboard handle missing"))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let handle = self.handle()?;
        handle
            .set_text(text.to_owned())
            .map_err(|e| Error::clipboard(e.to_string()))?;
        debug!("Copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}
