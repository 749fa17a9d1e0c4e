//! Color tokens for theming

use banter_core::Color;
use serde::Deserialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Base palette
    Primary,
    Neutral50,
    Neutral100,
    Neutral200,
    Neutral300,
    Neutral400,
    Neutral500,
    Neutral600,
    Neutral700,
    Neutral800,
    Neutral900,
    Error,
    Warning,
    Success,
    Info,
    StaticBlack,
    StaticWhite,

    // Extended primary ramp
    ExtendedPrimary50,
    ExtendedPrimary100,
    ExtendedPrimary200,
    ExtendedPrimary300,
    ExtendedPrimary400,
    ExtendedPrimary500,
    ExtendedPrimary600,
    ExtendedPrimary700,
    ExtendedPrimary800,
    ExtendedPrimary900,

    // Backgrounds
    Background1,
    Background2,
    Background3,
    Background4,

    // Borders
    BorderLight,
    BorderDefault,
    BorderDark,
    BorderHighlight,

    // Text
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    TextWhite,
    TextHighlight,

    // Icons
    IconPrimary,
    IconSecondary,
    IconTertiary,
    IconWhite,
    IconHighlight,

    // Buttons
    PrimaryButtonBackground,
    PrimaryButtonIcon,
    PrimaryButtonText,
    SecondaryButtonBackground,
    SecondaryButtonIcon,
    SecondaryButtonText,

    // Message bubbles
    SendBubbleBackground,
    ReceiveBubbleBackground,

    // Badges
    BadgeBackground,
    BadgeText,

    // Delivery receipts
    ReceiptSent,
    ReceiptDelivered,
    ReceiptRead,
    ReceiptError,

    // Loading shimmer
    ShimmerBackground,
    ShimmerGradient,

    // Presence
    StatusOnline,
    StatusOffline,

    // Message list chrome
    DateSeparatorBackground,
}

impl ColorToken {
    /// Every token, in derivation order.
    pub const ALL: [ColorToken; 65] = [
        ColorToken::Primary,
        ColorToken::Neutral50,
        ColorToken::Neutral100,
        ColorToken::Neutral200,
        ColorToken::Neutral300,
        ColorToken::Neutral400,
        ColorToken::Neutral500,
        ColorToken::Neutral600,
        ColorToken::Neutral700,
        ColorToken::Neutral800,
        ColorToken::Neutral900,
        ColorToken::Error,
        ColorToken::Warning,
        ColorToken::Success,
        ColorToken::Info,
        ColorToken::StaticBlack,
        ColorToken::StaticWhite,
        ColorToken::ExtendedPrimary50,
        ColorToken::ExtendedPrimary100,
        ColorToken::ExtendedPrimary200,
        ColorToken::ExtendedPrimary300,
        ColorToken::ExtendedPrimary400,
        ColorToken::ExtendedPrimary500,
        ColorToken::ExtendedPrimary600,
        ColorToken::ExtendedPrimary700,
        ColorToken::ExtendedPrimary800,
        ColorToken::ExtendedPrimary900,
        ColorToken::Background1,
        ColorToken::Background2,
        ColorToken::Background3,
        ColorToken::Background4,
        ColorToken::BorderLight,
        ColorToken::BorderDefault,
        ColorToken::BorderDark,
        ColorToken::BorderHighlight,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextTertiary,
        ColorToken::TextDisabled,
        ColorToken::TextWhite,
        ColorToken::TextHighlight,
        ColorToken::IconPrimary,
        ColorToken::IconSecondary,
        ColorToken::IconTertiary,
        ColorToken::IconWhite,
        ColorToken::IconHighlight,
        ColorToken::PrimaryButtonBackground,
        ColorToken::PrimaryButtonIcon,
        ColorToken::PrimaryButtonText,
        ColorToken::SecondaryButtonBackground,
        ColorToken::SecondaryButtonIcon,
        ColorToken::SecondaryButtonText,
        ColorToken::SendBubbleBackground,
        ColorToken::ReceiveBubbleBackground,
        ColorToken::BadgeBackground,
        ColorToken::BadgeText,
        ColorToken::ReceiptSent,
        ColorToken::ReceiptDelivered,
        ColorToken::ReceiptRead,
        ColorToken::ReceiptError,
        ColorToken::ShimmerBackground,
        ColorToken::ShimmerGradient,
        ColorToken::StatusOnline,
        ColorToken::StatusOffline,
        ColorToken::DateSeparatorBackground,
    ];
}

/// Complete set of semantic color tokens. Every slot is concrete after
/// derivation; nothing here is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Base palette
    pub primary: Color,
    pub neutral50: Color,
    pub neutral100: Color,
    pub neutral200: Color,
    pub neutral300: Color,
    pub neutral400: Color,
    pub neutral500: Color,
    pub neutral600: Color,
    pub neutral700: Color,
    pub neutral800: Color,
    pub neutral900: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
    pub static_black: Color,
    pub static_white: Color,

    // Extended primary ramp
    pub extended_primary50: Color,
    pub extended_primary100: Color,
    pub extended_primary200: Color,
    pub extended_primary300: Color,
    pub extended_primary400: Color,
    pub extended_primary500: Color,
    pub extended_primary600: Color,
    pub extended_primary700: Color,
    pub extended_primary800: Color,
    pub extended_primary900: Color,

    // Backgrounds
    pub background1: Color,
    pub background2: Color,
    pub background3: Color,
    pub background4: Color,

    // Borders
    pub border_light: Color,
    pub border_default: Color,
    pub border_dark: Color,
    pub border_highlight: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_disabled: Color,
    pub text_white: Color,
    pub text_highlight: Color,

    // Icons
    pub icon_primary: Color,
    pub icon_secondary: Color,
    pub icon_tertiary: Color,
    pub icon_white: Color,
    pub icon_highlight: Color,

    // Buttons
    pub primary_button_background: Color,
    pub primary_button_icon: Color,
    pub primary_button_text: Color,
    pub secondary_button_background: Color,
    pub secondary_button_icon: Color,
    pub secondary_button_text: Color,

    // Message bubbles
    pub send_bubble_background: Color,
    pub receive_bubble_background: Color,

    // Badges
    pub badge_background: Color,
    pub badge_text: Color,

    // Delivery receipts
    pub receipt_sent: Color,
    pub receipt_delivered: Color,
    pub receipt_read: Color,
    pub receipt_error: Color,

    // Loading shimmer
    pub shimmer_background: Color,
    pub shimmer_gradient: Color,

    // Presence
    pub status_online: Color,
    pub status_offline: Color,

    // Message list chrome
    pub date_separator_background: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Neutral50 => self.neutral50,
            ColorToken::Neutral100 => self.neutral100,
            ColorToken::Neutral200 => self.neutral200,
            ColorToken::Neutral300 => self.neutral300,
            ColorToken::Neutral400 => self.neutral400,
            ColorToken::Neutral500 => self.neutral500,
            ColorToken::Neutral600 => self.neutral600,
            ColorToken::Neutral700 => self.neutral700,
            ColorToken::Neutral800 => self.neutral800,
            ColorToken::Neutral900 => self.neutral900,
            ColorToken::Error => self.error,
            ColorToken::Warning => self.warning,
            ColorToken::Success => self.success,
            ColorToken::Info => self.info,
            ColorToken::StaticBlack => self.static_black,
            ColorToken::StaticWhite => self.static_white,
            ColorToken::ExtendedPrimary50 => self.extended_primary50,
            ColorToken::ExtendedPrimary100 => self.extended_primary100,
            ColorToken::ExtendedPrimary200 => self.extended_primary200,
            ColorToken::ExtendedPrimary300 => self.extended_primary300,
            ColorToken::ExtendedPrimary400 => self.extended_primary400,
            ColorToken::ExtendedPrimary500 => self.extended_primary500,
            ColorToken::ExtendedPrimary600 => self.extended_primary600,
            ColorToken::ExtendedPrimary700 => self.extended_primary700,
            ColorToken::ExtendedPrimary800 => self.extended_primary800,
            ColorToken::ExtendedPrimary900 => self.extended_primary900,
            ColorToken::Background1 => self.background1,
            ColorToken::Background2 => self.background2,
            ColorToken::Background3 => self.background3,
            ColorToken::Background4 => self.background4,
            ColorToken::BorderLight => self.border_light,
            ColorToken::BorderDefault => self.border_default,
            ColorToken::BorderDark => self.border_dark,
            ColorToken::BorderHighlight => self.border_highlight,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::TextDisabled => self.text_disabled,
            ColorToken::TextWhite => self.text_white,
            ColorToken::TextHighlight => self.text_highlight,
            ColorToken::IconPrimary => self.icon_primary,
            ColorToken::IconSecondary => self.icon_secondary,
            ColorToken::IconTertiary => self.icon_tertiary,
            ColorToken::IconWhite => self.icon_white,
            ColorToken::IconHighlight => self.icon_highlight,
            ColorToken::PrimaryButtonBackground => self.primary_button_background,
            ColorToken::PrimaryButtonIcon => self.primary_button_icon,
            ColorToken::PrimaryButtonText => self.primary_button_text,
            ColorToken::SecondaryButtonBackground => self.secondary_button_background,
            ColorToken::SecondaryButtonIcon => self.secondary_button_icon,
            ColorToken::SecondaryButtonText => self.secondary_button_text,
            ColorToken::SendBubbleBackground => self.send_bubble_background,
            ColorToken::ReceiveBubbleBackground => self.receive_bubble_background,
            ColorToken::BadgeBackground => self.badge_background,
            ColorToken::BadgeText => self.badge_text,
            ColorToken::ReceiptSent => self.receipt_sent,
            ColorToken::ReceiptDelivered => self.receipt_delivered,
            ColorToken::ReceiptRead => self.receipt_read,
            ColorToken::ReceiptError => self.receipt_error,
            ColorToken::ShimmerBackground => self.shimmer_background,
            ColorToken::ShimmerGradient => self.shimmer_gradient,
            ColorToken::StatusOnline => self.status_online,
            ColorToken::StatusOffline => self.status_offline,
            ColorToken::DateSeparatorBackground => self.date_separator_background,
        }
    }
}

/// Sparse color override: one optional slot per token.
///
/// `None` means "no opinion" — the deriver fills the slot from the ramp, the
/// scheme's default palette, or the semantic fallback table.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorPartial {
    pub primary: Option<Color>,
    pub neutral50: Option<Color>,
    pub neutral100: Option<Color>,
    pub neutral200: Option<Color>,
    pub neutral300: Option<Color>,
    pub neutral400: Option<Color>,
    pub neutral500: Option<Color>,
    pub neutral600: Option<Color>,
    pub neutral700: Option<Color>,
    pub neutral800: Option<Color>,
    pub neutral900: Option<Color>,
    pub error: Option<Color>,
    pub warning: Option<Color>,
    pub success: Option<Color>,
    pub info: Option<Color>,
    pub static_black: Option<Color>,
    pub static_white: Option<Color>,
    pub extended_primary50: Option<Color>,
    pub extended_primary100: Option<Color>,
    pub extended_primary200: Option<Color>,
    pub extended_primary300: Option<Color>,
    pub extended_primary400: Option<Color>,
    pub extended_primary500: Option<Color>,
    pub extended_primary600: Option<Color>,
    pub extended_primary700: Option<Color>,
    pub extended_primary800: Option<Color>,
    pub extended_primary900: Option<Color>,
    pub background1: Option<Color>,
    pub background2: Option<Color>,
    pub background3: Option<Color>,
    pub background4: Option<Color>,
    pub border_light: Option<Color>,
    pub border_default: Option<Color>,
    pub border_dark: Option<Color>,
    pub border_highlight: Option<Color>,
    pub text_primary: Option<Color>,
    pub text_secondary: Option<Color>,
    pub text_tertiary: Option<Color>,
    pub text_disabled: Option<Color>,
    pub text_white: Option<Color>,
    pub text_highlight: Option<Color>,
    pub icon_primary: Option<Color>,
    pub icon_secondary: Option<Color>,
    pub icon_tertiary: Option<Color>,
    pub icon_white: Option<Color>,
    pub icon_highlight: Option<Color>,
    pub primary_button_background: Option<Color>,
    pub primary_button_icon: Option<Color>,
    pub primary_button_text: Option<Color>,
    pub secondary_button_background: Option<Color>,
    pub secondary_button_icon: Option<Color>,
    pub secondary_button_text: Option<Color>,
    pub send_bubble_background: Option<Color>,
    pub receive_bubble_background: Option<Color>,
    pub badge_background: Option<Color>,
    pub badge_text: Option<Color>,
    pub receipt_sent: Option<Color>,
    pub receipt_delivered: Option<Color>,
    pub receipt_read: Option<Color>,
    pub receipt_error: Option<Color>,
    pub shimmer_background: Option<Color>,
    pub shimmer_gradient: Option<Color>,
    pub status_online: Option<Color>,
    pub status_offline: Option<Color>,
    pub date_separator_background: Option<Color>,
}

impl ColorPartial {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&ColorTokens> for ColorPartial {
    /// Snapshot a resolved token set as a full override. Deriving from the
    /// result reproduces the token set exactly.
    fn from(tokens: &ColorTokens) -> Self {
        Self {
            primary: Some(tokens.primary),
            neutral50: Some(tokens.neutral50),
            neutral100: Some(tokens.neutral100),
            neutral200: Some(tokens.neutral200),
            neutral300: Some(tokens.neutral300),
            neutral400: Some(tokens.neutral400),
            neutral500: Some(tokens.neutral500),
            neutral600: Some(tokens.neutral600),
            neutral700: Some(tokens.neutral700),
            neutral800: Some(tokens.neutral800),
            neutral900: Some(tokens.neutral900),
            error: Some(tokens.error),
            warning: Some(tokens.warning),
            success: Some(tokens.success),
            info: Some(tokens.info),
            static_black: Some(tokens.static_black),
            static_white: Some(tokens.static_white),
            extended_primary50: Some(tokens.extended_primary50),
            extended_primary100: Some(tokens.extended_primary100),
            extended_primary200: Some(tokens.extended_primary200),
            extended_primary300: Some(tokens.extended_primary300),
            extended_primary400: Some(tokens.extended_primary400),
            extended_primary500: Some(tokens.extended_primary500),
            extended_primary600: Some(tokens.extended_primary600),
            extended_primary700: Some(tokens.extended_primary700),
            extended_primary800: Some(tokens.extended_primary800),
            extended_primary900: Some(tokens.extended_primary900),
            background1: Some(tokens.background1),
            background2: Some(tokens.background2),
            background3: Some(tokens.background3),
            background4: Some(tokens.background4),
            border_light: Some(tokens.border_light),
            border_default: Some(tokens.border_default),
            border_dark: Some(tokens.border_dark),
            border_highlight: Some(tokens.border_highlight),
            text_primary: Some(tokens.text_primary),
            text_secondary: Some(tokens.text_secondary),
            text_tertiary: Some(tokens.text_tertiary),
            text_disabled: Some(tokens.text_disabled),
            text_white: Some(tokens.text_white),
            text_highlight: Some(tokens.text_highlight),
            icon_primary: Some(tokens.icon_primary),
            icon_secondary: Some(tokens.icon_secondary),
            icon_tertiary: Some(tokens.icon_tertiary),
            icon_white: Some(tokens.icon_white),
            icon_highlight: Some(tokens.icon_highlight),
            primary_button_background: Some(tokens.primary_button_background),
            primary_button_icon: Some(tokens.primary_button_icon),
            primary_button_text: Some(tokens.primary_button_text),
            secondary_button_background: Some(tokens.secondary_button_background),
            secondary_button_icon: Some(tokens.secondary_button_icon),
            secondary_button_text: Some(tokens.secondary_button_text),
            send_bubble_background: Some(tokens.send_bubble_background),
            receive_bubble_background: Some(tokens.receive_bubble_background),
            badge_background: Some(tokens.badge_background),
            badge_text: Some(tokens.badge_text),
            receipt_sent: Some(tokens.receipt_sent),
            receipt_delivered: Some(tokens.receipt_delivered),
            receipt_read: Some(tokens.receipt_read),
            receipt_error: Some(tokens.receipt_error),
            shimmer_background: Some(tokens.shimmer_background),
            shimmer_gradient: Some(tokens.shimmer_gradient),
            status_online: Some(tokens.status_online),
            status_offline: Some(tokens.status_offline),
            date_separator_background: Some(tokens.date_separator_background),
        }
    }
}
