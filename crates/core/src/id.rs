//! Strongly-typed string identifiers.
//!
//! Business keys in this workspace are human-readable strings (`"P-001"`,
//! `"F-0001"`), so identifiers wrap a `String` rather than a UUID. Modules
//! declare their own key types with [`string_id!`].

use uuid::Uuid;

/// Generate a fresh, time-ordered identifier string (UUIDv7).
///
/// Prefer passing ids explicitly in tests for determinism.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Declare a `String`-backed identifier newtype.
///
/// The generated type is `Serialize`/`Deserialize` (transparent), hashable,
/// displayable, and convertible from `&str`/`String`.
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Create a new identifier backed by a UUIDv7.
            pub fn generate() -> Self {
                Self($crate::id::generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    string_id!(
        /// Identifier used only by these tests.
        WidgetId
    );

    #[test]
    fn generated_ids_are_unique() {
        let a = WidgetId::generate();
        let b = WidgetId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn display_and_conversions_preserve_value() {
        let id = WidgetId::from("W-1");
        assert_eq!(id.to_string(), "W-1");
        assert_eq!(id, WidgetId::new(String::from("W-1")));
        assert_eq!(id.as_ref(), "W-1");
    }
}
