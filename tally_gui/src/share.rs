//! Share delivery channels.
//!
//! The share action walks an ordered capability-probe list: OS share sheet,
//! then clipboard, then a manual-copy dialog. The first available channel is
//! used; a channel that fails at delivery falls through to the next one.
//! The manual-copy dialog is always available, so sharing never dead-ends.

/// A way of getting the share text out of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    /// Hand the text to an OS-level share sheet
    SystemShare,
    /// Write the text to the system clipboard
    Clipboard,
    /// Show the text in a dialog for the user to copy by hand
    ManualCopy,
}

impl ShareChannel {
    /// Probe order, most capable channel first
    pub const PROBE_ORDER: &'static [ShareChannel] = &[
        ShareChannel::SystemShare,
        ShareChannel::Clipboard,
        ShareChannel::ManualCopy,
    ];

    /// Whether this channel exists on the current platform
    pub fn is_available(self) -> bool {
        match self {
            ShareChannel::SystemShare => system_share_supported(),
            ShareChannel::Clipboard => true,
            ShareChannel::ManualCopy => true,
        }
    }
}

/// First channel available on this platform. ManualCopy is always available,
/// so the probe never comes up empty.
pub fn first_available() -> ShareChannel {
    ShareChannel::PROBE_ORDER
        .iter()
        .copied()
        .find(|channel| channel.is_available())
        .unwrap_or(ShareChannel::ManualCopy)
}

/// Whether the OS exposes a share sheet we can hand text to.
fn system_share_supported() -> bool {
    // None of the desktop targets expose a text share sheet to external
    // processes; mobile targets would flip this on.
    false
}

/// Hand the share text to the OS share sheet.
///
/// Returns `false` when the sheet is unavailable or refuses the payload, so
/// the caller can fall through to the next channel.
pub fn system_share(_title: &str, _text: &str) -> bool {
    system_share_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_order_ends_with_manual_copy() {
        assert_eq!(
            ShareChannel::PROBE_ORDER.last(),
            Some(&ShareChannel::ManualCopy)
        );
    }

    #[test]
    fn test_first_available_on_desktop_is_clipboard() {
        assert_eq!(first_available(), ShareChannel::Clipboard);
    }
}
