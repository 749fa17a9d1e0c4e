use banter_core::{Color, StyleValue};
use banter_theme::{
    compose, ColorPartial, ColorScheme, ComposedTheme, ScalePartial, SpacingSetPartial,
    ThemeMode, ThemeOverrides, ThemePartial, ThemePreset, ThemeProvider,
};

fn branch_with_primary(hex: u32) -> ThemePartial {
    ThemePartial {
        color: ColorPartial {
            primary: Some(Color::from_hex(hex)),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["banter", "forest", "ocean"]);
}

#[test]
fn banter_preset_is_the_identity() {
    let defaults = ComposedTheme::defaults();
    let composed = compose(&defaults, &ThemePreset::Banter.overrides());
    assert_eq!(composed.light, defaults.light);
    assert_eq!(composed.dark, defaults.dark);
}

#[test]
fn colored_presets_rederive_both_branches() {
    for (preset, primary) in [
        (ThemePreset::Ocean, Color::from_hex(0x0B7BEA)),
        (ThemePreset::Forest, Color::from_hex(0x0FA36B)),
    ] {
        let composed = compose(&ComposedTheme::defaults(), &preset.overrides());
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = composed.for_scheme(scheme);
            assert_eq!(theme.colors.primary, primary, "preset={preset:?} scheme={scheme:?}");
            assert_eq!(
                theme.colors.primary_button_background, primary,
                "preset={preset:?} scheme={scheme:?}"
            );
        }
        // the two branches still diverge on the ramp poles
        assert_eq!(
            composed.light.colors.extended_primary900,
            primary.mix(Color::BLACK, 0.11)
        );
        assert_eq!(
            composed.dark.colors.extended_primary900,
            primary.mix(Color::WHITE, 0.08)
        );
    }
}

#[test]
fn overriding_one_branch_leaves_the_other_untouched() {
    let red = Color::from_hex(0xFF0000);
    let overrides = ThemeOverrides {
        light: Some(branch_with_primary(0xFF0000)),
        ..Default::default()
    };
    let composed = compose(&ComposedTheme::defaults(), &overrides);

    assert_eq!(composed.light.colors.primary, red);
    assert_eq!(
        composed.light.colors.extended_primary900,
        red.mix(Color::BLACK, 0.11)
    );
    // the dark branch keeps the stock palette end to end
    let stock_dark = ComposedTheme::defaults().dark;
    assert_eq!(composed.dark.colors.primary, stock_dark.colors.primary);
    assert_eq!(composed.dark.styles, stock_dark.styles);
}

#[test]
fn mode_switch_swaps_every_consumer_read() {
    let provider = ThemeProvider::root(ThemeOverrides::default());

    let light = provider.theme(ColorScheme::Light);
    let dark = provider.theme(ColorScheme::Dark);
    assert_eq!(light.scheme, ColorScheme::Light);
    assert_eq!(dark.scheme, ColorScheme::Dark);

    // tokens and the regenerated component styles both flip together
    assert_eq!(light.colors.neutral50, Color::from_hex(0xFFFFFF));
    assert_eq!(dark.colors.neutral50, Color::from_hex(0x141414));
    assert_ne!(
        light
            .component_style("message_bubble")
            .get_path(&["receive", "background_color"])
            .and_then(StyleValue::as_color),
        dark.component_style("message_bubble")
            .get_path(&["receive", "background_color"])
            .and_then(StyleValue::as_color),
    );
}

#[test]
fn explicit_mode_pins_the_active_branch() {
    let provider = ThemeProvider::root(ThemeOverrides {
        mode: Some(ThemeMode::Dark),
        ..Default::default()
    });
    for appearance in [ColorScheme::Light, ColorScheme::Dark] {
        assert_eq!(provider.theme(appearance).scheme, ColorScheme::Dark);
    }
}

#[test]
fn nested_provider_inherits_what_it_does_not_override() {
    let outer = ThemeProvider::root(ThemeOverrides {
        light: Some(branch_with_primary(0xFF0000)),
        ..Default::default()
    });
    // the inner scope only widens the spacing grid
    let inner = outer.child(ThemeOverrides {
        light: Some(ThemePartial {
            spacing: SpacingSetPartial {
                spacing: ScalePartial::default().with_unit(1, 8.0),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Default::default()
    });

    let theme = inner.theme(ColorScheme::Light);
    assert_eq!(theme.spacing.spacing.unit(1), 8.0);
    assert_eq!(theme.spacing.padding.p(1), 8.0);
    // the outer scope's palette survives into the inner scope
    assert_eq!(theme.colors.primary, Color::from_hex(0xFF0000));
    assert_eq!(
        theme
            .component_style("message_bubble")
            .get_path(&["send", "background_color"])
            .and_then(StyleValue::as_color),
        Some(Color::from_hex(0xFF0000))
    );
}
