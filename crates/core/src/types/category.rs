//! Product category enum.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown [`Category`].
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid category: {0}")]
pub struct CategoryError(String);

/// The fixed set of product categories.
///
/// Categories are stored as plain text in the database and serialized with
/// their exact variant names (`"Immunity"`, `"Digestion"`, ...), so adding a
/// variant here is all that is needed to introduce a new category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Immunity,
    Digestion,
    Detox,
    Balance,
    Other,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Immunity,
        Self::Digestion,
        Self::Detox,
        Self::Balance,
        Self::Other,
    ];

    /// Returns the canonical name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Immunity => "Immunity",
            Self::Digestion => "Digestion",
            Self::Detox => "Detox",
            Self::Balance => "Balance",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Immunity" => Ok(Self::Immunity),
            "Digestion" => Ok(Self::Digestion),
            "Detox" => Ok(Self::Detox),
            "Balance" => Ok(Self::Balance),
            "Other" => Ok(Self::Other),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Category {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Category {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Category {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "Unknown".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("invalid category"));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("immunity".parse::<Category>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Detox.to_string(), "Detox");
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Category::Immunity).unwrap();
        assert_eq!(json, "\"Immunity\"");

        let parsed: Category = serde_json::from_str("\"Balance\"").unwrap();
        assert_eq!(parsed, Category::Balance);
    }
}
