//! Typography tokens for theming

use serde::Deserialize;

/// A font family with ordered fallbacks.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FontFamily {
    pub primary: String,
    pub fallbacks: Vec<String>,
}

impl FontFamily {
    pub fn new(primary: impl Into<String>, fallbacks: Vec<&str>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: fallbacks.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Font size scale (logical pixels).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FontSizes {
    pub caption2: f32,
    pub caption1: f32,
    pub body: f32,
    pub title: f32,
    pub heading4: f32,
    pub heading3: f32,
    pub heading2: f32,
    pub heading1: f32,
}

/// Font weight scale (CSS-style numeric weights).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FontWeights {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_family: FontFamily,
    pub sizes: FontSizes,
    pub weights: FontWeights,
    /// Line height as a multiple of font size.
    pub line_height_factor: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamily::new("Inter", vec!["Roboto", "system-ui", "sans-serif"]),
            sizes: FontSizes {
                caption2: 10.0,
                caption1: 12.0,
                body: 14.0,
                title: 16.0,
                heading4: 18.0,
                heading3: 20.0,
                heading2: 24.0,
                heading1: 32.0,
            },
            weights: FontWeights {
                regular: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height_factor: 1.2,
        }
    }
}

/// Sparse typography override.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypographyPartial {
    pub font_family: Option<FontFamily>,
    pub sizes: Option<FontSizes>,
    pub weights: Option<FontWeights>,
    pub line_height_factor: Option<f32>,
}

impl TypographyPartial {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay this partial onto `base`, field by field.
    pub fn apply(&self, base: &TypographyTokens) -> TypographyTokens {
        TypographyTokens {
            font_family: self.font_family.clone().unwrap_or_else(|| base.font_family.clone()),
            sizes: self.sizes.unwrap_or(base.sizes),
            weights: self.weights.unwrap_or(base.weights),
            line_height_factor: self.line_height_factor.unwrap_or(base.line_height_factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overlays_only_set_fields() {
        let base = TypographyTokens::default();
        let partial = TypographyPartial {
            line_height_factor: Some(1.5),
            ..Default::default()
        };
        let out = partial.apply(&base);
        assert_eq!(out.line_height_factor, 1.5);
        assert_eq!(out.font_family, base.font_family);
        assert_eq!(out.sizes, base.sizes);
    }
}
