//! Input surface styles: composer, recorder, dialogs

use banter_core::{style, StyleValue};

use crate::tokens::{ColorTokens, SpacingSet, TypographyTokens};

pub fn message_composer_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "input": style! {
            "background_color": colors.background3,
            "text_color": colors.text_primary,
            "placeholder_color": colors.text_tertiary,
            "font_size": typography.sizes.body,
            "border_radius": spacing.radius.r(2),
            "padding_horizontal": spacing.padding.p(3),
        },
        "send_button": style! {
            "background_color": colors.primary_button_background,
            "icon_color": colors.primary_button_icon,
            "disabled_background_color": colors.background4,
            "disabled_icon_color": colors.icon_tertiary,
            "border_radius": spacing.radius.max,
            "size": spacing.spacing.unit(9),
        },
        "attachment_icon_color": colors.icon_secondary,
        "divider_color": colors.border_light,
        "padding": spacing.padding.p(3),
    }
}

pub fn media_recorder_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background2,
        "record_icon_color": colors.error,
        "timer_color": colors.text_primary,
        "timer_font_size": typography.sizes.caption1,
        "waveform_color": colors.extended_primary500,
        "stop_button_color": colors.icon_primary,
        "delete_icon_color": colors.icon_secondary,
        "border_radius": spacing.radius.r(3),
        "padding": spacing.padding.p(2),
    }
}

pub fn confirm_dialog_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "title_color": colors.text_primary,
        "title_font_size": typography.sizes.heading4,
        "title_font_weight": f64::from(typography.weights.semibold),
        "message_color": colors.text_secondary,
        "message_font_size": typography.sizes.body,
        "confirm_button": style! {
            "background_color": colors.primary_button_background,
            "text_color": colors.primary_button_text,
            "border_radius": spacing.radius.r(2),
        },
        "cancel_button": style! {
            "background_color": colors.background3,
            "text_color": colors.text_primary,
            "border_radius": spacing.radius.r(2),
        },
        "destructive_color": colors.error,
        "border_radius": spacing.radius.r(4),
        "padding": spacing.padding.p(5),
    }
}
