//! Palette extension and semantic color back-fill
//!
//! A single primary color extends into a ten-step tint/shade ramp, and every
//! semantic slot back-fills from a fixed single-source fallback table. The
//! deriver only fills gaps: any slot the caller set is left untouched.

use banter_core::Color;

use crate::theme::ColorScheme;
use crate::tokens::{ColorPartial, ColorTokens};

/// Ramp steps for the extended primary palette.
const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Blend fraction per step, light scheme. Steps 50..800 blend toward white;
/// 900 blends toward black (strong accent, not a further tint).
const LIGHT_BLEND: [f32; 10] = [0.96, 0.88, 0.77, 0.66, 0.55, 0.44, 0.33, 0.22, 0.11, 0.11];

/// Blend fraction per step, dark scheme. Steps 50..800 blend toward black;
/// 900 blends toward white.
const DARK_BLEND: [f32; 10] = [0.80, 0.72, 0.64, 0.56, 0.48, 0.40, 0.32, 0.24, 0.16, 0.08];

/// Built-in base palette for one scheme: the slots that must exist before
/// any semantic back-fill can run.
struct BaseDefaults {
    primary: Color,
    neutral: [Color; 10],
    error: Color,
    warning: Color,
    success: Color,
    info: Color,
    static_black: Color,
    static_white: Color,
}

impl BaseDefaults {
    fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                primary: Color::from_hex(0x6852D6),
                neutral: [
                    Color::from_hex(0xFFFFFF),
                    Color::from_hex(0xFAFAFA),
                    Color::from_hex(0xF5F5F5),
                    Color::from_hex(0xE8E8E8),
                    Color::from_hex(0xDCDCDC),
                    Color::from_hex(0xA1A1A1),
                    Color::from_hex(0x727272),
                    Color::from_hex(0x5B5B5B),
                    Color::from_hex(0x434343),
                    Color::from_hex(0x141414),
                ],
                error: Color::from_hex(0xF44649),
                warning: Color::from_hex(0xFFAB00),
                success: Color::from_hex(0x09C26F),
                info: Color::from_hex(0x0B7BEA),
                static_black: Color::from_hex(0x141414),
                static_white: Color::from_hex(0xFFFFFF),
            },
            ColorScheme::Dark => Self {
                primary: Color::from_hex(0x6852D6),
                neutral: [
                    Color::from_hex(0x141414),
                    Color::from_hex(0x1A1A1A),
                    Color::from_hex(0x272727),
                    Color::from_hex(0x383838),
                    Color::from_hex(0x4C4C4C),
                    Color::from_hex(0x858585),
                    Color::from_hex(0x989898),
                    Color::from_hex(0xA1A1A1),
                    Color::from_hex(0xC8C8C8),
                    Color::from_hex(0xFFFFFF),
                ],
                error: Color::from_hex(0xF44649),
                warning: Color::from_hex(0xFFB800),
                success: Color::from_hex(0x0FBD82),
                info: Color::from_hex(0x438AFA),
                static_black: Color::from_hex(0x141414),
                static_white: Color::from_hex(0xFFFFFF),
            },
        }
    }
}

/// Resolve a sparse color override into a complete token set for `scheme`.
///
/// Resolution order: primary, the extended ramp, the remaining base palette,
/// then every semantic slot from its fallback source. Each slot resolves
/// exactly once and later slots read only already-resolved ones, so there are
/// no forward references. The function has no failure path.
pub fn derive_colors(partial: &ColorPartial, scheme: ColorScheme) -> ColorTokens {
    let base = BaseDefaults::for_scheme(scheme);
    let primary = partial.primary.unwrap_or(base.primary);

    let (ramp, pole, accent_pole) = match scheme {
        ColorScheme::Light => (LIGHT_BLEND, Color::WHITE, Color::BLACK),
        ColorScheme::Dark => (DARK_BLEND, Color::BLACK, Color::WHITE),
    };
    // step 900 blends toward the opposite pole: it reads as a
    // maximum-contrast accent, not a further tint in the ramp direction
    let extended = |index: usize, overridden: Option<Color>| -> Color {
        overridden.unwrap_or_else(|| {
            let target = if STEPS[index] == 900 { accent_pole } else { pole };
            primary.mix(target, ramp[index])
        })
    };

    // base palette back-fill
    let neutral50 = partial.neutral50.unwrap_or(base.neutral[0]);
    let neutral100 = partial.neutral100.unwrap_or(base.neutral[1]);
    let neutral200 = partial.neutral200.unwrap_or(base.neutral[2]);
    let neutral300 = partial.neutral300.unwrap_or(base.neutral[3]);
    let neutral400 = partial.neutral400.unwrap_or(base.neutral[4]);
    let neutral500 = partial.neutral500.unwrap_or(base.neutral[5]);
    let neutral600 = partial.neutral600.unwrap_or(base.neutral[6]);
    let neutral700 = partial.neutral700.unwrap_or(base.neutral[7]);
    let neutral800 = partial.neutral800.unwrap_or(base.neutral[8]);
    let neutral900 = partial.neutral900.unwrap_or(base.neutral[9]);
    let error = partial.error.unwrap_or(base.error);
    let warning = partial.warning.unwrap_or(base.warning);
    let success = partial.success.unwrap_or(base.success);
    let info = partial.info.unwrap_or(base.info);
    let static_black = partial.static_black.unwrap_or(base.static_black);
    let static_white = partial.static_white.unwrap_or(base.static_white);

    // semantic back-fill: one fallback source per slot, fixed order
    let background1 = partial.background1.unwrap_or(neutral50);
    let background2 = partial.background2.unwrap_or(neutral100);
    let background3 = partial.background3.unwrap_or(neutral200);
    let background4 = partial.background4.unwrap_or(neutral300);
    let border_light = partial.border_light.unwrap_or(neutral200);
    let border_default = partial.border_default.unwrap_or(neutral300);
    let border_dark = partial.border_dark.unwrap_or(neutral400);
    let border_highlight = partial.border_highlight.unwrap_or(primary);
    let text_primary = partial.text_primary.unwrap_or(neutral900);
    let text_secondary = partial.text_secondary.unwrap_or(neutral600);
    let text_tertiary = partial.text_tertiary.unwrap_or(neutral500);
    let text_disabled = partial.text_disabled.unwrap_or(neutral400);
    let text_white = partial.text_white.unwrap_or(static_white);
    let text_highlight = partial.text_highlight.unwrap_or(primary);
    let icon_primary = partial.icon_primary.unwrap_or(neutral900);
    let icon_secondary = partial.icon_secondary.unwrap_or(neutral500);
    let icon_tertiary = partial.icon_tertiary.unwrap_or(neutral400);
    let icon_white = partial.icon_white.unwrap_or(static_white);
    let icon_highlight = partial.icon_highlight.unwrap_or(primary);
    let primary_button_background = partial.primary_button_background.unwrap_or(primary);
    let primary_button_icon = partial.primary_button_icon.unwrap_or(static_white);
    let primary_button_text = partial.primary_button_text.unwrap_or(static_white);
    let secondary_button_background = partial.secondary_button_background.unwrap_or(neutral900);
    let secondary_button_icon = partial.secondary_button_icon.unwrap_or(neutral50);
    let secondary_button_text = partial.secondary_button_text.unwrap_or(neutral50);
    let send_bubble_background = partial.send_bubble_background.unwrap_or(primary);
    let receive_bubble_background = partial.receive_bubble_background.unwrap_or(neutral300);
    let badge_background = partial.badge_background.unwrap_or(primary);
    let badge_text = partial.badge_text.unwrap_or(static_white);
    let receipt_sent = partial.receipt_sent.unwrap_or(neutral500);
    let receipt_delivered = partial.receipt_delivered.unwrap_or(neutral500);
    let receipt_read = partial.receipt_read.unwrap_or(info);
    let receipt_error = partial.receipt_error.unwrap_or(error);
    let shimmer_background = partial.shimmer_background.unwrap_or(neutral200);
    let shimmer_gradient = partial.shimmer_gradient.unwrap_or(neutral100);
    let status_online = partial.status_online.unwrap_or(success);
    let status_offline = partial.status_offline.unwrap_or(neutral400);
    let date_separator_background = partial.date_separator_background.unwrap_or(neutral200);

    ColorTokens {
        primary,
        neutral50,
        neutral100,
        neutral200,
        neutral300,
        neutral400,
        neutral500,
        neutral600,
        neutral700,
        neutral800,
        neutral900,
        error,
        warning,
        success,
        info,
        static_black,
        static_white,
        extended_primary50: extended(0, partial.extended_primary50),
        extended_primary100: extended(1, partial.extended_primary100),
        extended_primary200: extended(2, partial.extended_primary200),
        extended_primary300: extended(3, partial.extended_primary300),
        extended_primary400: extended(4, partial.extended_primary400),
        extended_primary500: extended(5, partial.extended_primary500),
        extended_primary600: extended(6, partial.extended_primary600),
        extended_primary700: extended(7, partial.extended_primary700),
        extended_primary800: extended(8, partial.extended_primary800),
        extended_primary900: extended(9, partial.extended_primary900),
        background1,
        background2,
        background3,
        background4,
        border_light,
        border_default,
        border_dark,
        border_highlight,
        text_primary,
        text_secondary,
        text_tertiary,
        text_disabled,
        text_white,
        text_highlight,
        icon_primary,
        icon_secondary,
        icon_tertiary,
        icon_white,
        icon_highlight,
        primary_button_background,
        primary_button_icon,
        primary_button_text,
        secondary_button_background,
        secondary_button_icon,
        secondary_button_text,
        send_bubble_background,
        receive_bubble_background,
        badge_background,
        badge_text,
        receipt_sent,
        receipt_delivered,
        receipt_read,
        receipt_error,
        shimmer_background,
        shimmer_gradient,
        status_online,
        status_offline,
        date_separator_background,
    }
}

impl ColorTokens {
    /// Built-in light palette.
    pub fn light() -> Self {
        derive_colors(&ColorPartial::default(), ColorScheme::Light)
    }

    /// Built-in dark palette.
    pub fn dark() -> Self {
        derive_colors(&ColorPartial::default(), ColorScheme::Dark)
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorToken;

    #[test]
    fn extends_primary_through_the_ramp() {
        let partial = ColorPartial {
            primary: Some(Color::BLACK),
            ..Default::default()
        };
        let tokens = derive_colors(&partial, ColorScheme::Light);
        // black toward white at 0.96
        assert_eq!(tokens.extended_primary50.hex(), "#F5F5F5");
        // 900 blends toward black in light mode, so black stays black
        assert_eq!(tokens.extended_primary900, Color::BLACK);
    }

    #[test]
    fn step_900_blends_toward_the_opposite_pole() {
        let partial = ColorPartial {
            primary: Some(Color::from_hex(0xFF0000)),
            ..Default::default()
        };

        let light = derive_colors(&partial, ColorScheme::Light);
        let red = Color::from_hex(0xFF0000);
        assert_eq!(light.extended_primary900, red.mix(Color::BLACK, 0.11));
        assert_eq!(light.extended_primary800, red.mix(Color::WHITE, 0.11));

        let dark = derive_colors(&partial, ColorScheme::Dark);
        assert_eq!(dark.extended_primary900, red.mix(Color::WHITE, 0.08));
        assert_eq!(dark.extended_primary800, red.mix(Color::BLACK, 0.16));
    }

    #[test]
    fn explicit_extended_steps_are_left_untouched() {
        let pinned = Color::from_hex(0x123456);
        let partial = ColorPartial {
            extended_primary300: Some(pinned),
            ..Default::default()
        };
        let tokens = derive_colors(&partial, ColorScheme::Light);
        assert_eq!(tokens.extended_primary300, pinned);
    }

    #[test]
    fn every_slot_resolves_for_both_schemes() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let tokens = derive_colors(&ColorPartial::default(), scheme);
            for token in ColorToken::ALL {
                // a fully opaque color in every slot
                assert_eq!(tokens.get(token).a, 255, "{token:?} in {scheme:?}");
            }
        }
    }

    #[test]
    fn full_override_round_trips_unchanged() {
        let custom = derive_colors(
            &ColorPartial {
                primary: Some(Color::from_hex(0x0B7BEA)),
                ..Default::default()
            },
            ColorScheme::Dark,
        );
        let full = ColorPartial::from(&custom);
        let rederived = derive_colors(&full, ColorScheme::Light);
        assert_eq!(rederived, custom, "explicit values must win over derivation");
    }

    #[test]
    fn semantic_fallbacks_follow_the_table() {
        let tokens = derive_colors(&ColorPartial::default(), ColorScheme::Light);
        assert_eq!(tokens.background1, tokens.neutral50);
        assert_eq!(tokens.text_primary, tokens.neutral900);
        assert_eq!(tokens.border_highlight, tokens.primary);
        assert_eq!(tokens.send_bubble_background, tokens.primary);
        assert_eq!(tokens.receive_bubble_background, tokens.neutral300);
        assert_eq!(tokens.icon_highlight, tokens.primary);
    }

    #[test]
    fn semantic_override_beats_fallback() {
        let partial = ColorPartial {
            send_bubble_background: Some(Color::from_hex(0x222222)),
            ..Default::default()
        };
        let tokens = derive_colors(&partial, ColorScheme::Light);
        assert_eq!(tokens.send_bubble_background, Color::from_hex(0x222222));
        // the slot override does not leak into its fallback source
        assert_eq!(tokens.primary, Color::from_hex(0x6852D6));
    }
}
