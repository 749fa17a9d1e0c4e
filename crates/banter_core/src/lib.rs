//! Banter core value types
//!
//! The small set of primitives every other Banter crate builds on:
//!
//! - [`Color`]: 8-bit RGBA color with hex parsing/formatting and channel
//!   blending (the primitive behind palette extension)
//! - [`StyleValue`]: dynamic style tree used for per-component style
//!   subtrees and caller-supplied style overrides
//! - [`merge`] / [`merge_layers`]: the order-sensitive deep merge that
//!   composes override layers (root theme, component theme, instance style)
//! - [`deep_clone`]: structure-preserving clone that keeps shared subtrees
//!   shared and tolerates aliased references
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use banter_core::{merge, style, Color};
//!
//! let base = style! {
//!     "background_color": Color::from_hex(0x6852D6),
//!     "border_radius": 8.0,
//! };
//! let override_layer = style! { "border_radius": 16.0 };
//!
//! let resolved = merge(&base, &override_layer);
//! ```

mod color;
mod value;

pub use color::Color;
pub use value::{deep_clone, merge, merge_layers, OpaqueValue, StyleMap, StyleValue};
