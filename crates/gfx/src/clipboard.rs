//! System clipboard behind the toolkit's best-effort contract.

use host::Clipboard;

/// arboard-backed clipboard.
///
/// The platform clipboard can genuinely fail (no display server, denied
/// access, transient owner changes); the toolkit's contract is best-effort,
/// so failures are logged and reads degrade to an empty string.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("system clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get(&mut self) -> String {
        let Some(cb) = self.inner.as_mut() else {
            return String::new();
        };
        match cb.get_text() {
            Ok(s) => s,
            Err(e) => {
                log::debug!("clipboard read failed: {e}");
                String::new()
            }
        }
    }

    fn set(&mut self, text: &str) {
        let Some(cb) = self.inner.as_mut() else {
            return;
        };
        if let Err(e) = cb.set_text(text.to_owned()) {
            log::warn!("clipboard write failed: {e}");
        }
    }
}
