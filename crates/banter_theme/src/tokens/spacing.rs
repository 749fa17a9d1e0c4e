//! Spacing tokens: the base scale and its padding/margin/radius families
//!
//! The base scale carries 21 indexed units (`s0..s20`) plus `max`. Padding,
//! margin and radius alias the base scale by positional index unless a caller
//! override exists for that exact index — the aliasing is a static index
//! table, never string-key parsing.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Number of indexed units per scale (`s0..s20`).
pub const UNIT_COUNT: usize = 21;

/// The base spacing scale. Default is a 4px grid: `sN = 4 * N`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub units: [f32; UNIT_COUNT],
    pub max: f32,
}

impl SpacingTokens {
    /// Build a scale on a custom grid unit.
    pub fn with_base(base: f32) -> Self {
        let mut units = [0.0; UNIT_COUNT];
        for (index, unit) in units.iter_mut().enumerate() {
            *unit = base * index as f32;
        }
        Self { units, max: 1000.0 }
    }

    /// Value at index `sN`. Out-of-range indices clamp to the last unit.
    pub fn unit(&self, index: usize) -> f32 {
        self.units[index.min(UNIT_COUNT - 1)]
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::with_base(4.0)
    }
}

/// Padding scale; `pN` aliases `sN` unless overridden.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddingTokens {
    pub units: [f32; UNIT_COUNT],
}

impl PaddingTokens {
    pub fn p(&self, index: usize) -> f32 {
        self.units[index.min(UNIT_COUNT - 1)]
    }
}

/// Margin scale; `mN` aliases `sN` unless overridden.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginTokens {
    pub units: [f32; UNIT_COUNT],
}

impl MarginTokens {
    pub fn m(&self, index: usize) -> f32 {
        self.units[index.min(UNIT_COUNT - 1)]
    }
}

/// Border-radius scale; `rN` aliases `sN` and `max` aliases the base `max`
/// unless overridden. `max` is the "fully round" radius.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub units: [f32; UNIT_COUNT],
    pub max: f32,
}

impl RadiusTokens {
    pub fn r(&self, index: usize) -> f32 {
        self.units[index.min(UNIT_COUNT - 1)]
    }
}

/// The fully-resolved spacing aggregate a theme branch carries.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingSet {
    pub spacing: SpacingTokens,
    pub padding: PaddingTokens,
    pub margin: MarginTokens,
    pub radius: RadiusTokens,
}

impl Default for SpacingSet {
    fn default() -> Self {
        derive_spacing(&SpacingSetPartial::default())
    }
}

/// Sparse override for one scale: optional value per index plus `max`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalePartial {
    pub units: [Option<f32>; UNIT_COUNT],
    pub max: Option<f32>,
}

impl ScalePartial {
    /// Out-of-range indices are ignored, like unknown config keys.
    pub fn with_unit(mut self, index: usize, value: f32) -> Self {
        if let Some(slot) = self.units.get_mut(index) {
            *slot = Some(value);
        }
        self
    }

    pub fn with_max(mut self, value: f32) -> Self {
        self.max = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_none() && self.units.iter().all(Option::is_none)
    }

    /// Build from keyed config entries (`s3 = 12`). `keys` is the static
    /// name-to-index table for the scale's family; unknown keys are ignored.
    fn from_keyed(entries: &BTreeMap<String, f32>, keys: &[&str; UNIT_COUNT]) -> Self {
        let mut partial = Self::default();
        for (index, key) in keys.iter().enumerate() {
            if let Some(value) = entries.get(*key) {
                partial.units[index] = Some(*value);
            }
        }
        partial.max = entries.get("max").copied();
        partial
    }
}

const SPACING_KEYS: [&str; UNIT_COUNT] = [
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "s12", "s13",
    "s14", "s15", "s16", "s17", "s18", "s19", "s20",
];
const PADDING_KEYS: [&str; UNIT_COUNT] = [
    "p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11", "p12", "p13",
    "p14", "p15", "p16", "p17", "p18", "p19", "p20",
];
const MARGIN_KEYS: [&str; UNIT_COUNT] = [
    "m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9", "m10", "m11", "m12", "m13",
    "m14", "m15", "m16", "m17", "m18", "m19", "m20",
];
const RADIUS_KEYS: [&str; UNIT_COUNT] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13",
    "r14", "r15", "r16", "r17", "r18", "r19", "r20",
];

/// Sparse override for the whole spacing aggregate.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "SpacingSetPartialRepr")]
pub struct SpacingSetPartial {
    pub spacing: ScalePartial,
    pub padding: ScalePartial,
    pub margin: ScalePartial,
    pub radius: ScalePartial,
}

impl SpacingSetPartial {
    pub fn is_empty(&self) -> bool {
        self.spacing.is_empty()
            && self.padding.is_empty()
            && self.margin.is_empty()
            && self.radius.is_empty()
    }
}

/// Config-file shape: each family is a keyed table (`s3 = 12`, `p2 = 10`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpacingSetPartialRepr {
    spacing: BTreeMap<String, f32>,
    padding: BTreeMap<String, f32>,
    margin: BTreeMap<String, f32>,
    radius: BTreeMap<String, f32>,
}

impl From<SpacingSetPartialRepr> for SpacingSetPartial {
    fn from(repr: SpacingSetPartialRepr) -> Self {
        Self {
            spacing: ScalePartial::from_keyed(&repr.spacing, &SPACING_KEYS),
            padding: ScalePartial::from_keyed(&repr.padding, &PADDING_KEYS),
            margin: ScalePartial::from_keyed(&repr.margin, &MARGIN_KEYS),
            radius: ScalePartial::from_keyed(&repr.radius, &RADIUS_KEYS),
        }
    }
}

/// Resolve a spacing override into a complete [`SpacingSet`].
///
/// The base scale resolves first (override or built-in default per index).
/// Each derived family then aliases the resolved base at the same index
/// unless the caller set that exact index. Families never read each other.
/// Values are taken as-is; there is no range validation.
pub fn derive_spacing(partial: &SpacingSetPartial) -> SpacingSet {
    let defaults = SpacingTokens::default();

    let mut units = defaults.units;
    for (unit, over) in units.iter_mut().zip(partial.spacing.units.iter()) {
        if let Some(value) = over {
            *unit = *value;
        }
    }
    let spacing = SpacingTokens {
        units,
        max: partial.spacing.max.unwrap_or(defaults.max),
    };

    let family = |overrides: &ScalePartial| -> [f32; UNIT_COUNT] {
        let mut out = spacing.units;
        for (unit, over) in out.iter_mut().zip(overrides.units.iter()) {
            if let Some(value) = over {
                *unit = *value;
            }
        }
        out
    };

    SpacingSet {
        padding: PaddingTokens {
            units: family(&partial.padding),
        },
        margin: MarginTokens {
            units: family(&partial.margin),
        },
        radius: RadiusTokens {
            units: family(&partial.radius),
            max: partial.radius.max.unwrap_or(spacing.max),
        },
        spacing,
    }
}
