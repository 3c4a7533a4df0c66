// Shared ANSI/VT100 control sequences used across the UI.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Bold green, used for confirmations.
pub const FG_BOLD_GREEN: &str = crate::csi2!("1m", "32m");
