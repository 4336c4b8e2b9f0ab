//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut
/// - macOS: SUPER (Cmd key), with CONTROL also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const THEME_SHORTCUT: &str = "F2";
pub const LANGUAGE_SHORTCUT: &str = "F3";
