//! Theme composition: folding caller overrides onto an ancestor theme
//!
//! Composition is branch-independent: the light and dark branches each
//! resolve from their own partial, and a branch with no partial passes
//! through from the ancestor untouched. Derivation runs before any merging,
//! so derived fallbacks become part of what gets merged.

use banter_core::merge;

use crate::palette::derive_colors;
use crate::styles::component_styles;
use crate::theme::{ColorScheme, ComposedTheme, Theme, ThemeOverrides, ThemePartial};
use crate::tokens::derive_spacing;

/// Compose caller overrides onto an ancestor theme.
///
/// The ancestor is the nearest enclosing resolved theme (built-in defaults at
/// the root), which is what makes nested providers scope correctly: instance
/// over subtree over app over defaults.
pub fn compose(ancestor: &ComposedTheme, overrides: &ThemeOverrides) -> ComposedTheme {
    ComposedTheme {
        light: compose_branch(&ancestor.light, overrides.light.as_ref(), ColorScheme::Light),
        dark: compose_branch(&ancestor.dark, overrides.dark.as_ref(), ColorScheme::Dark),
        mode: overrides.mode.unwrap_or(ancestor.mode),
    }
}

fn compose_branch(ancestor: &Theme, partial: Option<&ThemePartial>, scheme: ColorScheme) -> Theme {
    let Some(partial) = partial else {
        return ancestor.clone();
    };

    // Derivation precedes merging: a color partial resolves against the
    // built-in scheme palette (not the ancestor), and the derived result
    // carries every slot, so it fully shadows the ancestor's colors.
    // An empty partial expresses no opinion and inherits the ancestor.
    let colors = if partial.color.is_empty() {
        ancestor.colors.clone()
    } else {
        derive_colors(&partial.color, scheme)
    };
    let spacing = if partial.spacing.is_empty() {
        ancestor.spacing.clone()
    } else {
        derive_spacing(&partial.spacing)
    };
    let typography = partial.typography.apply(&ancestor.typography);

    // Every component subtree is a pure function of the three token sets;
    // regenerate them all, then let the caller's literal style overrides win.
    let mut styles = component_styles(&colors, &spacing, &typography);
    if let Some(raw) = &partial.styles {
        styles = merge(&styles, raw);
    }

    Theme {
        scheme,
        colors,
        spacing,
        typography,
        styles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_core::{style, Color, StyleValue};
    use crate::tokens::ColorPartial;

    fn overrides_with_light_primary(hex: u32) -> ThemeOverrides {
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
    fn branch_without_partial_passes_through() {
        let defaults = ComposedTheme::defaults();
        let composed = compose(&defaults, &overrides_with_light_primary(0xFF0000));
        assert_eq!(composed.dark, defaults.dark);
        assert_ne!(composed.light.colors.primary, defaults.light.colors.primary);
    }

    #[test]
    fn overriding_primary_rederives_the_ramp() {
        let composed = compose(
            &ComposedTheme::defaults(),
            &overrides_with_light_primary(0xFF0000),
        );
        let red = Color::from_hex(0xFF0000);
        assert_eq!(
            composed.light.colors.extended_primary900,
            red.mix(Color::BLACK, 0.11)
        );
        // the regenerated bubble style picks up the new primary
        assert_eq!(
            composed
                .light
                .styles
                .get_path(&["message_bubble", "send", "background_color"])
                .and_then(StyleValue::as_color),
            Some(red)
        );
    }

    #[test]
    fn literal_style_override_beats_regeneration() {
        let pinned = Color::from_hex(0x00FF00);
        let overrides = ThemeOverrides {
            light: Some(ThemePartial {
                color: ColorPartial {
                    primary: Some(Color::from_hex(0xFF0000)),
                    ..Default::default()
                },
                styles: Some(style! {
                    "message_bubble": style! {
                        "send": style! { "background_color": pinned },
                    },
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let composed = compose(&ComposedTheme::defaults(), &overrides);
        assert_eq!(
            composed
                .light
                .styles
                .get_path(&["message_bubble", "send", "background_color"])
                .and_then(StyleValue::as_color),
            Some(pinned)
        );
        // sibling keys still come from the regenerated subtree
        assert!(composed
            .light
            .styles
            .get_path(&["message_bubble", "receive"])
            .is_some());
    }

    #[test]
    fn nesting_scopes_against_the_nearest_ancestor() {
        let outer = compose(
            &ComposedTheme::defaults(),
            &ThemeOverrides {
                light: Some(ThemePartial {
                    typography: crate::tokens::TypographyPartial {
                        line_height_factor: Some(1.8),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        // an inner override with no typography opinion inherits the outer value
        let inner = compose(&outer, &overrides_with_light_primary(0x0B7BEA));
        assert_eq!(inner.light.typography.line_height_factor, 1.8);
        assert_eq!(inner.light.colors.primary, Color::from_hex(0x0B7BEA));
    }

    #[test]
    fn mode_override_carries_and_inherits() {
        use crate::theme::ThemeMode;

        let with_mode = compose(
            &ComposedTheme::defaults(),
            &ThemeOverrides {
                mode: Some(ThemeMode::Dark),
                ..Default::default()
            },
        );
        assert_eq!(with_mode.mode, ThemeMode::Dark);

        let inherited = compose(&with_mode, &ThemeOverrides::default());
        assert_eq!(inherited.mode, ThemeMode::Dark);
    }
}
