//! Dynamic style trees and the deep-merge combinator
//!
//! Style overrides stack in a fixed order: root theme, component theme,
//! instance style. Each layer is a sparse tree; [`merge`] folds a layer onto
//! an accumulated base without ever mutating caller data.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::Color;

/// Ordered map backing [`StyleValue::Record`]. Insertion order is preserved
/// so regenerated style trees serialize and compare deterministically.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Opaque renderable payload (icon element, platform view handle).
///
/// Structurally object-like but never merged field-by-field: merge replaces
/// it wholesale. Identity is the allocation, so two values compare equal only
/// when they share the same payload.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Any + Send + Sync>);

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self(Arc::new(payload))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpaqueValue(..)")
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A node in a style tree.
///
/// `Unset` is an explicit "no opinion": merging `Unset` over a value keeps
/// the value. Records merge key-by-key; lists, primitives and opaque values
/// replace wholesale.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum StyleValue {
    #[default]
    Unset,
    Bool(bool),
    Number(f64),
    Text(String),
    Color(Color),
    List(Vec<StyleValue>),
    Record(Arc<StyleMap>),
    Opaque(OpaqueValue),
}

impl StyleValue {
    pub fn record(map: StyleMap) -> Self {
        Self::Record(Arc::new(map))
    }

    pub fn empty_record() -> Self {
        Self::record(StyleMap::default())
    }

    pub fn opaque<T: Any + Send + Sync>(payload: T) -> Self {
        Self::Opaque(OpaqueValue::new(payload))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn as_record(&self) -> Option<&StyleMap> {
        match self {
            Self::Record(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a direct child of a record.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.as_record().and_then(|map| map.get(key))
    }

    /// Walk a path of record keys.
    pub fn get_path(&self, path: &[&str]) -> Option<&StyleValue> {
        path.iter()
            .try_fold(self, |node, key| node.get(*key))
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        Self::List(value)
    }
}

/// Build a [`StyleValue::Record`] from literal keys.
///
/// ```rust,ignore
/// let bubble = style! {
///     "background_color": colors.primary,
///     "border_radius": 12.0,
///     "content": style! { "font_size": 14.0 },
/// };
/// ```
#[macro_export]
macro_rules! style {
    { $($key:literal : $value:expr),* $(,)? } => {{
        #[allow(unused_mut)]
        let mut map = $crate::StyleMap::default();
        $( map.insert(($key).to_string(), $crate::StyleValue::from($value)); )*
        $crate::StyleValue::record(map)
    }};
}

/// Deep-merge `over` onto `base`, producing a new value. Later layers win on
/// key conflicts; records recurse, everything else replaces wholesale, and
/// `Unset` never erases an existing base value.
pub fn merge(base: &StyleValue, over: &StyleValue) -> StyleValue {
    match over {
        StyleValue::Unset => base.clone(),
        StyleValue::Record(over_map) => {
            let mut out: StyleMap = match base {
                StyleValue::Record(map) => (**map).clone(),
                _ => StyleMap::default(),
            };
            for (key, value) in over_map.iter() {
                match value {
                    // explicit "no opinion" keeps whatever the base holds
                    StyleValue::Unset => {}
                    StyleValue::Record(_) => {
                        let sub_base = out.get(key).cloned().unwrap_or(StyleValue::Unset);
                        out.insert(key.clone(), merge(&sub_base, value));
                    }
                    _ => {
                        out.insert(key.clone(), value.clone());
                    }
                }
            }
            StyleValue::record(out)
        }
        _ => over.clone(),
    }
}

/// Fold a stack of override layers onto `base`, in order. Layer order is the
/// contract: root theme, then component theme, then instance style, each
/// applied strictly onto the previous result.
pub fn merge_layers<'a, I>(base: &StyleValue, layers: I) -> StyleValue
where
    I: IntoIterator<Item = &'a StyleValue>,
{
    layers
        .into_iter()
        .fold(base.clone(), |acc, layer| merge(&acc, layer))
}

/// Structure-preserving clone.
///
/// Records are tracked by allocation: a record reached a second time maps to
/// the clone produced the first time, so aliased subtrees stay aliased and
/// the walk visits every allocation exactly once.
pub fn deep_clone(value: &StyleValue) -> StyleValue {
    fn walk(
        value: &StyleValue,
        seen: &mut FxHashMap<*const StyleMap, Arc<StyleMap>>,
    ) -> StyleValue {
        match value {
            StyleValue::Record(map) => {
                let ptr = Arc::as_ptr(map);
                if let Some(existing) = seen.get(&ptr) {
                    return StyleValue::Record(Arc::clone(existing));
                }
                let mut out = StyleMap::with_capacity(map.len());
                for (key, child) in map.iter() {
                    out.insert(key.clone(), walk(child, seen));
                }
                let out = Arc::new(out);
                seen.insert(ptr, Arc::clone(&out));
                StyleValue::Record(out)
            }
            StyleValue::List(items) => {
                StyleValue::List(items.iter().map(|item| walk(item, seen)).collect())
            }
            other => other.clone(),
        }
    }

    walk(value, &mut FxHashMap::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layer_wins_recursively() {
        let base = style! {
            "bubble": style! { "background": Color::from_hex(0x6852D6), "radius": 8.0 },
            "font": "Inter",
        };
        let over = style! {
            "bubble": style! { "radius": 16.0 },
        };

        let out = merge(&base, &over);
        assert_eq!(out.get_path(&["bubble", "radius"]), Some(&StyleValue::Number(16.0)));
        // untouched sibling keys survive the recursion
        assert_eq!(
            out.get_path(&["bubble", "background"]),
            Some(&StyleValue::Color(Color::from_hex(0x6852D6)))
        );
        assert_eq!(out.get("font"), Some(&StyleValue::Text("Inter".into())));
    }

    #[test]
    fn unset_never_erases() {
        let base = style! { "a": 1.0 };
        let over = style! { "a": StyleValue::Unset, "b": 2.0 };

        let out = merge(&base, &over);
        assert_eq!(out.get("a"), Some(&StyleValue::Number(1.0)));
        assert_eq!(out.get("b"), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn opaque_values_replace_wholesale() {
        let icon_a = StyleValue::opaque("icon-a");
        let icon_b = StyleValue::opaque("icon-b");
        let base = style! { "icon": icon_a };
        let over = style! { "icon": icon_b.clone() };

        let out = merge(&base, &over);
        assert_eq!(out.get("icon"), Some(&icon_b));
    }

    #[test]
    fn lists_replace_wholesale() {
        let base = style! { "stops": vec![StyleValue::Number(0.0), StyleValue::Number(1.0)] };
        let over = style! { "stops": vec![StyleValue::Number(0.5)] };

        let out = merge(&base, &over);
        assert_eq!(
            out.get("stops"),
            Some(&StyleValue::List(vec![StyleValue::Number(0.5)]))
        );
    }

    #[test]
    fn record_over_primitive_starts_from_empty() {
        let base = style! { "padding": 4.0 };
        let over = style! { "padding": style! { "top": 8.0 } };

        let out = merge(&base, &over);
        assert_eq!(out.get_path(&["padding", "top"]), Some(&StyleValue::Number(8.0)));
    }

    #[test]
    fn layering_matches_pairwise_merges() {
        let a = style! { "x": style! { "p": 1.0, "q": 2.0 }, "y": 1.0 };
        let b = style! { "x": style! { "q": 3.0, "r": 4.0 } };
        let c = style! { "x": style! { "q": 5.0 } };

        let pairwise = merge(&merge(&a, &b), &c);
        let layered = merge_layers(&a, [&b, &c]);
        assert_eq!(pairwise, layered);
        assert_eq!(layered.get_path(&["x", "q"]), Some(&StyleValue::Number(5.0)));
        assert_eq!(layered.get_path(&["x", "p"]), Some(&StyleValue::Number(1.0)));
        assert_eq!(layered.get("y"), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn merge_never_mutates_inputs() {
        let base = style! { "a": style! { "b": 1.0 } };
        let over = style! { "a": style! { "b": 2.0 } };
        let snapshot = base.clone();

        let _ = merge(&base, &over);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn deep_clone_keeps_shared_subtrees_shared() {
        let shared = style! { "size": 24.0 };
        let tree = style! { "left": shared.clone(), "right": shared };

        let cloned = deep_clone(&tree);
        let left = cloned.get("left").and_then(StyleValue::as_record).unwrap();
        let right = cloned.get("right").and_then(StyleValue::as_record).unwrap();
        assert!(std::ptr::eq(left, right), "aliased records must stay aliased");
        assert_eq!(cloned, tree);

        // fresh allocations, not the originals
        let original_left = tree.get("left").and_then(StyleValue::as_record).unwrap();
        assert!(!std::ptr::eq(left, original_left));
    }
}
