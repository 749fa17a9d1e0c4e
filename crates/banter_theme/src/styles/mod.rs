//! Per-component style subtrees
//!
//! Every generator is a pure function of the resolved color, spacing, and
//! typography tokens. The composer regenerates the full set whenever any of
//! those change; callers then layer component-scope and instance-scope
//! overrides on top with the deep merge.

mod bubbles;
mod calls;
mod inputs;
mod lists;

use banter_core::{style, StyleMap, StyleValue};

use crate::tokens::{ColorTokens, SpacingSet, TypographyTokens};

pub use bubbles::*;
pub use calls::*;
pub use inputs::*;
pub use lists::*;

type StyleFn = fn(&ColorTokens, &SpacingSet, &TypographyTokens) -> StyleValue;

/// Registry of every themed component, in render-chrome order.
const COMPONENT_STYLES: [(&str, StyleFn); 21] = [
    ("avatar", avatar_style),
    ("badge", badge_style),
    ("status_indicator", status_indicator_style),
    ("receipt", receipt_style),
    ("message_bubble", message_bubble_style),
    ("message_list", message_list_style),
    ("message_header", message_header_style),
    ("date_separator", date_separator_style),
    ("reaction_list", reaction_list_style),
    ("conversation_list", conversation_list_style),
    ("conversation_item", conversation_item_style),
    ("user_list", user_list_style),
    ("user_item", user_item_style),
    ("group_list", group_list_style),
    ("call_buttons", call_buttons_style),
    ("incoming_call", incoming_call_style),
    ("outgoing_call", outgoing_call_style),
    ("message_composer", message_composer_style),
    ("media_recorder", media_recorder_style),
    ("mentions", mentions_style),
    ("confirm_dialog", confirm_dialog_style),
];

/// Generate the complete per-component style record for one theme branch.
pub fn component_styles(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    let mut map = StyleMap::with_capacity(COMPONENT_STYLES.len());
    for (name, build) in COMPONENT_STYLES {
        map.insert(name.to_string(), build(colors, spacing, typography));
    }
    StyleValue::record(map)
}

pub fn avatar_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.extended_primary500,
        "text_color": colors.static_white,
        "text_font_size": typography.sizes.body,
        "text_font_weight": f64::from(typography.weights.semibold),
        "border_radius": spacing.radius.max,
        "size": spacing.spacing.unit(12),
    }
}

pub fn badge_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "background_color": colors.badge_background,
        "text_color": colors.badge_text,
        "text_font_size": typography.sizes.caption2,
        "border_radius": spacing.radius.max,
        "padding_horizontal": spacing.padding.p(1),
        "min_size": spacing.spacing.unit(4),
    }
}

pub fn status_indicator_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    _typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "online_color": colors.status_online,
        "offline_color": colors.status_offline,
        "border_color": colors.background1,
        "border_width": 2.0,
        "size": spacing.spacing.unit(3),
        "border_radius": spacing.radius.max,
    }
}

pub fn receipt_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    _typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "sent_color": colors.receipt_sent,
        "delivered_color": colors.receipt_delivered,
        "read_color": colors.receipt_read,
        "error_color": colors.receipt_error,
        "size": spacing.spacing.unit(4),
    }
}

pub fn mentions_style(
    colors: &ColorTokens,
    spacing: &SpacingSet,
    typography: &TypographyTokens,
) -> StyleValue {
    style! {
        "text_color": colors.text_highlight,
        "self_text_color": colors.warning,
        "background_color": colors.extended_primary100,
        "font_weight": f64::from(typography.weights.medium),
        "border_radius": spacing.radius.r(1),
    }
}
