//! Banter Theme System
//!
//! The theme resolution engine behind the Banter chat UI kit: a handful of
//! caller overrides (a primary color, a few spacing units, typography) expand
//! deterministically into two complete theme trees (light and dark) consumed
//! by every visual component.
//!
//! # Overview
//!
//! - **Palette derivation**: one primary color extends into a ten-step
//!   tint/shade ramp, and every semantic color slot back-fills from a fixed
//!   fallback table
//! - **Spacing derivation**: the base spacing scale aliases into padding,
//!   margin, and radius scales by index
//! - **Composition**: partial overrides merge onto an ancestor theme at
//!   three scopes (app, subtree, instance), with derivation running before
//!   each merge
//! - **Mode**: `light` / `dark` / `auto`, with `auto` tracking the host
//!   appearance
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use banter_core::Color;
//! use banter_theme::{ColorPartial, ThemeOverrides, ThemePartial, ThemeProvider};
//!
//! let provider = ThemeProvider::root(ThemeOverrides {
//!     light: Some(ThemePartial {
//!         color: ColorPartial {
//!             primary: Some(Color::from_hex(0x6852D6)),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! });
//!
//! let theme = provider.theme(banter_theme::ColorScheme::Light);
//! let bubble = theme.component_style("message_bubble");
//! ```
//!
//! # Architecture
//!
//! Derivation and composition are pure and synchronous: no I/O, no locks, no
//! failure paths. Resolved themes are immutable; every customization builds a
//! new theme through override layers. The only asynchronous element is the
//! optional appearance watcher feeding `auto` mode (feature `watcher`).

pub mod compose;
pub mod config;
pub mod palette;
pub mod platform;
pub mod presets;
pub mod provider;
pub mod state;
pub mod styles;
pub mod theme;
pub mod tokens;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use compose::compose;
pub use config::ThemeError;
pub use palette::derive_colors;
pub use platform::detect_system_appearance;
pub use presets::{preset_overrides, ThemePreset};
pub use provider::ThemeProvider;
pub use state::{set_redraw_callback, ThemeHost};
pub use styles::component_styles;
pub use theme::{ColorScheme, ComposedTheme, Theme, ThemeMode, ThemeOverrides, ThemePartial};
pub use tokens::*;

#[cfg(feature = "watcher")]
pub use watcher::{SystemAppearanceWatcher, WatcherConfig};
