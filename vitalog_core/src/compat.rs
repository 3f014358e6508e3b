//! Backward-compatible enum parsing.
//!
//! Data written by older app versions encodes enum values with their type
//! name as a prefix (`"GoalStatus.active"`). Current versions write the bare
//! variant (`"active"`). Every enum decoder in this crate accepts both.

/// Strip a `TypeName.` prefix from a serialized enum variant, if present.
///
/// `"GoalStatus.active"` becomes `"active"`; `"active"` is returned as-is.
/// Only the first dot is significant, so variant names containing dots are
/// not supported (none exist in this data model).
pub fn legacy_variant(raw: &str) -> &str {
    match raw.split_once('.') {
        Some((prefix, rest)) if is_type_name(prefix) => rest,
        _ => raw,
    }
}

/// A legacy prefix is a non-empty identifier starting with an uppercase letter.
fn is_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Implements `Deserialize` for a unit enum that already derives
/// `Serialize` with `rename_all = "snake_case"`, accepting both the bare
/// snake_case variant and the legacy `TypeName.variant` form.
macro_rules! legacy_enum_deserialize {
    ($ty:ident, $($variant:ident => $text:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                match crate::compat::legacy_variant(&raw) {
                    $($text => Ok($ty::$variant),)+
                    other => Err(serde::de::Error::unknown_variant(
                        other,
                        &[$($text),+],
                    )),
                }
            }
        }
    };
}

pub(crate) use legacy_enum_deserialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_legacy_prefix() {
        assert_eq!(legacy_variant("GoalStatus.active"), "active");
        assert_eq!(legacy_variant("MealType.breakfast"), "breakfast");
        assert_eq!(legacy_variant("MedicationStatus.taken"), "taken");
    }

    #[test]
    fn test_bare_variant_unchanged() {
        assert_eq!(legacy_variant("active"), "active");
        assert_eq!(legacy_variant("very_low"), "very_low");
    }

    #[test]
    fn test_lowercase_prefix_not_stripped() {
        // A dot after a lowercase word is not a legacy type prefix
        assert_eq!(legacy_variant("some.value"), "some.value");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(legacy_variant(""), "");
    }
}
