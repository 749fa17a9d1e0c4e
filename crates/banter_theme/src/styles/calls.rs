//! Call screen styles

use banter_core::{style, StyleValue};

use crate::tokens::{ColorTokens, SpacingSet, TypographyTokens};

pub fn call_buttons_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    _typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "voice_call_icon_color": colors.icon_highlight,
        "video_call_icon_color": colors.icon_highlight,
        "background_color": colors.background2,
        "border_color": colors.border_light,
        "border_radius": spacing.radius.r(2),
        "size": spacing.spacing.unit(10),
        "gap": spacing.margin.m(2),
    }
}

pub fn incoming_call_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "title_color": colors.text_primary,
        "title_font_size": typography.sizes.heading4,
        "subtitle_color": colors.text_secondary,
        "subtitle_font_size": typography.sizes.caption1,
        "accept": style! {
            "background_color": colors.success,
            "icon_color": colors.static_white,
            "border_radius": spacing.radius.max,
        },
        "decline": style! {
            "background_color": colors.error,
            "icon_color": colors.static_white,
            "border_radius": spacing.radius.max,
        },
        "border_color": colors.border_default,
        "border_radius": spacing.radius.r(4),
        "padding": spacing.padding.p(4),
    }
}

pub fn outgoing_call_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "name_color": colors.text_primary,
        "name_font_size": typography.sizes.heading2,
        "status_color": colors.text_secondary,
        "status_font_size": typography.sizes.body,
        "avatar_size": spacing.spacing.unit(20),
        "cancel": style! {
            "background_color": colors.error,
            "icon_color": colors.static_white,
            "border_radius": spacing.radius.max,
            "size": spacing.spacing.unit(13),
        },
        "padding_vertical": spacing.padding.p(10),
    }
}
