//! Roster styles: conversations, users, groups

use banter_core::{style, StyleValue};

use crate::tokens::{ColorTokens, SpacingSet, TypographyTokens};

fn roster_list(colors: &ColorTokens, spacing: &SpacingSet, typography: &TypographyTokens) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "title_color": colors.text_primary,
        "title_font_size": typography.sizes.heading3,
        "title_font_weight": f64::from(typography.weights.bold),
        "search": style! {
            "background_color": colors.background3,
            "text_color": colors.text_primary,
            "placeholder_color": colors.text_tertiary,
            "icon_color": colors.icon_secondary,
            "border_radius": spacing.radius.max,
        },
        "section_header_color": colors.text_highlight,
        "section_header_font_size": typography.sizes.caption1,
        "empty_text_color": colors.text_secondary,
        "shimmer_color": colors.shimmer_background,
        "shimmer_gradient_color": colors.shimmer_gradient,
        "padding_horizontal": spacing.padding.p(4),
    }
}

fn roster_item(colors: &ColorTokens, spacing: &SpacingSet, typography: &TypographyTokens) -> StyleValue {
    style! {
        "background_color": colors.background1,
        "selected_background_color": colors.extended_primary50,
        "title_color": colors.text_primary,
        "title_font_size": typography.sizes.body,
        "title_font_weight": f64::from(typography.weights.medium),
        "subtitle_color": colors.text_secondary,
        "subtitle_font_size": typography.sizes.caption1,
        "separator_color": colors.border_light,
        "padding_vertical": spacing.padding.p(2),
        "gap": spacing.margin.m(3),
    }
}

pub fn conversation_list_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    roster_list(colors, spacing, typography)
}

pub fn conversation_item_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    let base = roster_item(colors, spacing, typography);
    let extra = style! {
        "timestamp_color": colors.text_tertiary,
        "timestamp_font_size": typography.sizes.caption2,
        "typing_color": colors.text_highlight,
        "muted_icon_color": colors.icon_tertiary,
    };
    banter_core::merge(&base, &extra)
}

pub fn user_list_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    roster_list(colors, spacing, typography)
}

pub fn user_item_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    let base = roster_item(colors, spacing, typography);
    let extra = style! {
        "presence_online_color": colors.status_online,
        "presence_offline_color": colors.status_offline,
    };
    banter_core::merge(&base, &extra)
}

pub fn group_list_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    let base = roster_list(colors, spacing, typography);
    let extra = style! {
        "password_icon_color": colors.icon_secondary,
        "private_icon_color": colors.warning,
        "member_count_color": colors.text_tertiary,
    };
    banter_core::merge(&base, &extra)
}
