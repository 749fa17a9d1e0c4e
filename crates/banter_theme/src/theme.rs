//! Theme aggregates: resolved branches, partial overrides, and the
//! light/dark bundle

use banter_core::{merge, StyleValue};
use serde::Deserialize;

use crate::styles::component_styles;
use crate::tokens::{ColorPartial, ColorTokens, SpacingSet, SpacingSetPartial, TypographyPartial, TypographyTokens};

/// Brightness branch of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Active-branch selector. `Auto` follows the host appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// Resolve to a concrete scheme. Explicit modes ignore the host
    /// appearance entirely.
    pub fn resolve(self, appearance: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::Auto => appearance,
        }
    }
}

/// A fully-resolved theme branch. Immutable once produced: customization
/// happens through new override layers, never in-place mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub colors: ColorTokens,
    pub spacing: SpacingSet,
    pub typography: TypographyTokens,
    /// Per-component style subtrees, keyed by component name. Regenerated
    /// from the tokens above whenever they change.
    pub styles: StyleValue,
}

impl Theme {
    /// Built-in default branch for a scheme.
    pub fn default_for(scheme: ColorScheme) -> Self {
        let colors = match scheme {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        };
        let spacing = SpacingSet::default();
        let typography = TypographyTokens::default();
        let styles = component_styles(&colors, &spacing, &typography);
        Self {
            scheme,
            colors,
            spacing,
            typography,
            styles,
        }
    }

    /// The resolved style subtree for one component, or `Unset` for an
    /// unknown component name.
    pub fn component_style(&self, component: &str) -> StyleValue {
        self.styles
            .get(component)
            .cloned()
            .unwrap_or(StyleValue::Unset)
    }

    /// Final per-instance resolution: the component's themed style with a
    /// caller-supplied instance style merged on top. Instance styles never
    /// re-trigger palette or spacing derivation.
    pub fn styled(&self, component: &str, instance: &StyleValue) -> StyleValue {
        merge(&self.component_style(component), instance)
    }
}

/// Sparse override for one theme branch.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemePartial {
    pub color: ColorPartial,
    pub spacing: SpacingSetPartial,
    pub typography: TypographyPartial,
    /// Raw per-component style overrides, merged on top of the regenerated
    /// subtrees so literal overrides always win. Programmatic only — style
    /// trees can carry opaque renderables, which config files cannot.
    #[serde(skip)]
    pub styles: Option<StyleValue>,
}

/// Caller-facing override bundle: an optional mode plus an optional partial
/// per branch. Plain data owned by the caller; composition only reads it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub mode: Option<ThemeMode>,
    pub light: Option<ThemePartial>,
    pub dark: Option<ThemePartial>,
}

/// The composed light/dark pair plus the active-branch selector.
#[derive(Clone, Debug)]
pub struct ComposedTheme {
    pub light: Theme,
    pub dark: Theme,
    pub mode: ThemeMode,
}

impl ComposedTheme {
    /// Built-in defaults: stock palettes, 4px spacing grid, `Auto` mode.
    pub fn defaults() -> Self {
        Self {
            light: Theme::default_for(ColorScheme::Light),
            dark: Theme::default_for(ColorScheme::Dark),
            mode: ThemeMode::Auto,
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// The branch selected by the current mode, given the host appearance.
    pub fn active(&self, appearance: ColorScheme) -> &Theme {
        self.for_scheme(self.mode.resolve(appearance))
    }
}

impl Default for ComposedTheme {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_resolution() {
        assert_eq!(ThemeMode::Light.resolve(ColorScheme::Dark), ColorScheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(ColorScheme::Light), ColorScheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(ColorScheme::Dark), ColorScheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(ColorScheme::Light), ColorScheme::Light);
    }

    #[test]
    fn unknown_component_style_is_unset() {
        let theme = Theme::default_for(ColorScheme::Light);
        assert!(theme.component_style("does_not_exist").is_unset());
    }

    #[test]
    fn styled_merges_instance_layer_on_top() {
        use banter_core::style;

        let theme = Theme::default_for(ColorScheme::Light);
        let instance = style! { "background_color": banter_core::Color::from_hex(0x222222) };
        let resolved = theme.styled("message_bubble", &instance);
        assert_eq!(
            resolved.get("background_color").and_then(StyleValue::as_color),
            Some(banter_core::Color::from_hex(0x222222))
        );
        // themed keys not overridden by the instance survive
        assert!(resolved.get("send").is_some());
    }
}
