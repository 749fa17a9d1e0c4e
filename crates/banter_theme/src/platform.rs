//! System appearance detection
//!
//! Best-effort light/dark detection per host OS. Detection failures fall
//! back to light; `Auto` mode consumers get live updates through the watcher
//! or by the app forwarding its own platform events to
//! [`crate::ThemeHost::set_appearance`].

use crate::theme::ColorScheme;

/// Detect the host's current appearance setting.
pub fn detect_system_appearance() -> ColorScheme {
    detect_impl().unwrap_or(ColorScheme::Light)
}

#[cfg(target_os = "macos")]
fn detect_impl() -> Option<ColorScheme> {
    // AppleInterfaceStyle is only present when dark mode is on
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if output.status.success() && String::from_utf8_lossy(&output.stdout).contains("Dark") {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}

#[cfg(target_os = "linux")]
fn detect_impl() -> Option<ColorScheme> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout);
    if value.contains("dark") {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn detect_impl() -> Option<ColorScheme> {
    None
}
