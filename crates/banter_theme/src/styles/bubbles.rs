//! Message area styles: bubbles, list chrome, header, reactions

use banter_core::{style, StyleValue};

use crate::tokens::{ColorTokens, SpacingSet, TypographyTokens};

pub fn message_bubble_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "send": style! {
            "background_color": colors.send_bubble_background,
            "text_color": colors.static_white,
            "link_color": colors.extended_primary200,
            "timestamp_color": colors.extended_primary100,
        },
        "receive": style! {
            "background_color": colors.receive_bubble_background,
            "text_color": colors.text_primary,
            "link_color": colors.info,
            "timestamp_color": colors.text_tertiary,
        },
        "text_font_size": typography.sizes.body,
        "timestamp_font_size": typography.sizes.caption2,
        "border_radius": spacing.radius.r(3),
        "padding_horizontal": spacing.padding.p(3),
        "padding_vertical": spacing.padding.p(2),
        "max_width_ratio": 0.75,
    }
}

pub fn message_list_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "empty_text_color": colors.text_secondary,
        "empty_text_font_size": typography.sizes.body,
        "error_text_color": colors.error,
        "gap": spacing.margin.m(2),
        "padding_horizontal": spacing.padding.p(4),
        "scroll_to_bottom": style! {
            "background_color": colors.background2,
            "icon_color": colors.icon_primary,
            "border_color": colors.border_light,
            "border_radius": spacing.radius.max,
        },
    }
}

pub fn message_header_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "title_color": colors.text_primary,
        "title_font_size": typography.sizes.title,
        "title_font_weight": f64::from(typography.weights.semibold),
        "subtitle_color": colors.text_secondary,
        "subtitle_font_size": typography.sizes.caption1,
        "typing_indicator_color": colors.text_highlight,
        "back_icon_color": colors.icon_primary,
        "border_bottom_color": colors.border_light,
        "padding_horizontal": spacing.padding.p(4),
        "height": spacing.spacing.unit(16),
    }
}

pub fn date_separator_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.date_separator_background,
        "text_color": colors.text_secondary,
        "text_font_size": typography.sizes.caption1,
        "border_radius": spacing.radius.r(2),
        "padding_horizontal": spacing.padding.p(3),
        "padding_vertical": spacing.padding.p(1),
        "margin_vertical": spacing.margin.m(4),
    }
}

pub fn reaction_list_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.background2,
        "active_background_color": colors.extended_primary100,
        "border_color": colors.border_light,
        "active_border_color": colors.border_highlight,
        "count_color": colors.text_secondary,
        "count_font_size": typography.sizes.caption1,
        "border_radius": spacing.radius.max,
        "padding_horizontal": spacing.padding.p(2),
        "gap": spacing.margin.m(1),
    }
}
