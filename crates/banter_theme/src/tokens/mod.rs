//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (semantic slots, the extended primary ramp)
//! - Spacing (base scale plus padding/margin/radius families)
//! - Typography (fonts, sizes, weights)

mod color;
mod spacing;
mod typography;

pub use color::*;
pub use spacing::*;
pub use typography::*;
