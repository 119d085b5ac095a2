//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the admin shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ADMIN_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ADMIN_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Admin panel shortcut display
/// - macOS: "Cmd+A"
/// - Linux/Windows: "Ctrl+A"
#[cfg(target_os = "macos")]
pub const ADMIN_SHORTCUT: &str = "Cmd+A";

#[cfg(not(target_os = "macos"))]
pub const ADMIN_SHORTCUT: &str = "Ctrl+A";
