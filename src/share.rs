use anyhow::Result;
use rust_i18n::t;

use crate::engine::progress::Progress;

/// Where a shared progress summary goes. The state layer only ever talks
/// to this trait; the system clipboard is one implementation of it.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Fails on headless systems with no clipboard service; the caller
    /// treats that as "sharing unavailable", not as a fatal error.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_string())?;
        Ok(())
    }
}

/// The shareable progress blurb: streak and XP interpolated into the
/// localized template.
pub fn summary(progress: &Progress) -> String {
    t!(
        "share.message",
        streak = progress.streak_days,
        xp = progress.total_xp
    )
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_interpolates_streak_and_xp() {
        let progress = Progress {
            total_xp: 1250,
            streak_days: 12,
            daily_goal: 5,
            daily_progress: 3,
        };
        let text = summary(&progress);
        assert!(text.contains("12"), "missing streak in {text:?}");
        assert!(text.contains("1250"), "missing XP in {text:?}");
        assert!(!text.contains("%{"), "unresolved placeholder in {text:?}");
    }
}
