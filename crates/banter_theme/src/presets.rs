//! Built-in theme presets

use std::fmt::{Display, Formatter};

use banter_core::Color;

use crate::theme::{ThemeOverrides, ThemePartial};
use crate::tokens::ColorPartial;

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Stock Banter purple.
    Banter,
    /// Blue-leaning preset.
    Ocean,
    /// Green-leaning preset.
    Forest,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Banter => "banter",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Banter => "Banter",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Banter, ThemePreset::Ocean, ThemePreset::Forest];
        &PRESETS
    }

    /// Ready-made overrides for this preset. `Banter` is the identity
    /// preset: empty overrides, stock palette.
    pub fn overrides(self) -> ThemeOverrides {
        let primary = match self {
            Self::Banter => return ThemeOverrides::default(),
            Self::Ocean => Color::from_hex(0x0B7BEA),
            Self::Forest => Color::from_hex(0x0FA36B),
        };
        let branch = || {
            Some(ThemePartial {
                color: ColorPartial {
                    primary: Some(primary),
                    ..Default::default()
                },
                ..Default::default()
            })
        };
        ThemeOverrides {
            mode: None,
            light: branch(),
            dark: branch(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_overrides(preset: ThemePreset) -> ThemeOverrides {
    preset.overrides()
}
