//! Theme providers: explicit context passing for nested override scopes
//!
//! A provider wraps one resolved [`ComposedTheme`] plus the raw overrides it
//! was built from. Nesting is plain composition: a child provider resolves
//! its overrides against the parent's resolved theme, never against the
//! global defaults, so scoping nests correctly (instance over subtree over
//! app over built-in default).

use std::sync::Arc;

use crate::compose::compose;
use crate::theme::{ColorScheme, ComposedTheme, Theme, ThemeMode, ThemeOverrides};

/// An override scope. Cheap to clone; the resolved theme is shared.
#[derive(Clone, Debug)]
pub struct ThemeProvider {
    composed: Arc<ComposedTheme>,
    local: Arc<ThemeOverrides>,
}

impl ThemeProvider {
    /// Root scope: overrides composed onto the built-in defaults.
    pub fn root(overrides: ThemeOverrides) -> Self {
        let composed = compose(&ComposedTheme::defaults(), &overrides);
        Self {
            composed: Arc::new(composed),
            local: Arc::new(overrides),
        }
    }

    /// Child scope: overrides composed onto this provider's resolved theme.
    pub fn child(&self, overrides: ThemeOverrides) -> Self {
        let composed = compose(&self.composed, &overrides);
        Self {
            composed: Arc::new(composed),
            local: Arc::new(overrides),
        }
    }

    /// The fully-resolved light/dark pair.
    pub fn composed(&self) -> &ComposedTheme {
        &self.composed
    }

    /// The active resolved theme, given the host appearance. Explicit modes
    /// ignore `appearance`.
    pub fn theme(&self, appearance: ColorScheme) -> &Theme {
        self.composed.active(appearance)
    }

    /// The overrides supplied to this scope, unmerged. Lets a component
    /// distinguish "explicitly set for this subtree" from "inherited".
    pub fn local_overrides(&self) -> &ThemeOverrides {
        &self.local
    }

    pub fn mode(&self) -> ThemeMode {
        self.composed.mode
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::root(ThemeOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_core::Color;
    use crate::theme::ThemePartial;
    use crate::tokens::ColorPartial;

    fn primary_override(hex: u32) -> ThemeOverrides {
        ThemeOverrides {
            light: Some(ThemePartial {
                color: ColorPartial {
                    primary: Some(Color::from_hex(hex)),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn child_composes_onto_parent_not_defaults() {
        let root = ThemeProvider::root(ThemeOverrides {
            mode: Some(ThemeMode::Dark),
            ..Default::default()
        });
        let child = root.child(primary_override(0xFF0000));
        // mode set on the root survives into the child scope
        assert_eq!(child.mode(), ThemeMode::Dark);
        assert_eq!(
            child.theme(ColorScheme::Light).scheme,
            ColorScheme::Dark,
            "explicit dark mode must ignore the host appearance"
        );
    }

    #[test]
    fn local_overrides_stay_unmerged() {
        let root = ThemeProvider::root(primary_override(0xFF0000));
        let child = root.child(ThemeOverrides::default());
        assert!(child.local_overrides().light.is_none());
        assert!(root.local_overrides().light.is_some());
    }
}
