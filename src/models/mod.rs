//! Domain records stored per user, and their enum vocabularies.

/// Declares a fieldless enum persisted as lowercase text.
///
/// Generates `ALL`, `to_db_str`, `from_db_str`, a case-insensitive
/// `from_code` for CLI input and a `Display` impl.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $entity:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Convert enum → DB string
            pub fn to_db_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Convert DB string → enum
            pub fn from_db_str(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Parse user input: case-insensitive, `-` accepted in place of `_`.
            pub fn from_code(code: &str) -> crate::errors::AppResult<Self> {
                let normalized = code.trim().to_lowercase().replace('-', "_");
                Self::from_db_str(&normalized).ok_or_else(|| crate::errors::AppError::InvalidStatus {
                    entity: $entity,
                    value: code.to_string(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.to_db_str())
            }
        }
    };
}

pub mod budget;
pub mod card;
pub mod client;
pub mod installment;
pub mod investment;
pub mod project;
pub mod reservation;
pub mod transaction;
pub mod user;

/// Turn a blank optional text field into `None`, trimming the rest.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
