use crate::page::Clipboard;

/// Desktop clipboard
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        use ::clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx: ClipboardContext =
            ClipboardProvider::new().map_err(|e| anyhow::anyhow!("{}", e))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Used when the binary is built without clipboard support; every write fails
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("clipboard support was not compiled in (enable the `system-clipboard` feature)")
    }
}

#[cfg(feature = "system-clipboard")]
pub fn default_clipboard() -> SystemClipboard {
    SystemClipboard
}

#[cfg(not(feature = "system-clipboard"))]
pub fn default_clipboard() -> UnavailableClipboard {
    UnavailableClipboard
}
