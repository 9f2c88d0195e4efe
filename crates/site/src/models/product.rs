//! Product domain types.
//!
//! These types represent validated domain objects separate from database row types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tulsi_core::{Category, Price, ProductId};

use super::ValidationError;

/// Image used when a product is created without one.
pub const DEFAULT_IMAGE: &str = "/static/images/placeholder-product.svg";

/// Dosage used when a product is created without one.
pub const DEFAULT_DOSAGE: &str = "1-2 tablets daily";

const MAX_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// A product as stored (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Price in the store currency.
    pub price: Price,
    /// Image URL (site-relative or absolute).
    pub image: String,
    /// Category from the fixed set.
    pub category: Category,
    /// Claimed benefits, in display order.
    pub benefits: Vec<String>,
    /// Ingredient list, in display order.
    pub ingredients: Vec<String>,
    /// Recommended dosage.
    pub dosage: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied product fields, before validation.
///
/// Used as the body of both create and update requests. For updates, call
/// [`ProductInput::merge`] first so absent fields fall back to the stored
/// product instead of the create-time defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub dosage: Option<String>,
}

/// A validated product, ready for insertion.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    pub benefits: Vec<String>,
    pub ingredients: Vec<String>,
    pub dosage: String,
}

impl ProductInput {
    /// Validate all fields, collecting every failure.
    ///
    /// Optional fields (`image`, `benefits`, `ingredients`, `dosage`) fall
    /// back to their defaults when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failing field.
    pub fn validate(self) -> Result<ProductDraft, ValidationError> {
        let mut errors = ValidationError::new();

        let name = match self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            None => {
                errors.add("name", "Please provide a product name");
                None
            }
            Some(s) if s.len() > MAX_NAME_LENGTH => {
                errors.add(
                    "name",
                    format!("Product name cannot exceed {MAX_NAME_LENGTH} characters"),
                );
                None
            }
            Some(s) => Some(s.to_owned()),
        };

        let description = match self.description.filter(|s| !s.is_empty()) {
            None => {
                errors.add("description", "Please provide a product description");
                None
            }
            Some(s) if s.len() > MAX_DESCRIPTION_LENGTH => {
                errors.add(
                    "description",
                    format!("Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"),
                );
                None
            }
            Some(s) => Some(s),
        };

        let price = match self.price {
            None => {
                errors.add("price", "Please provide a price");
                None
            }
            Some(amount) => match Price::new(amount) {
                Ok(price) => Some(price),
                Err(_) => {
                    errors.add("price", "Price cannot be negative");
                    None
                }
            },
        };

        let category = match self.category.as_deref() {
            None | Some("") => {
                errors.add("category", "Please provide a category");
                None
            }
            Some(s) => match s.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.add("category", allowed_categories_message());
                    None
                }
            },
        };

        let image = self
            .image
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE.to_owned());
        let dosage = self
            .dosage
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DOSAGE.to_owned());
        let benefits = self.benefits.unwrap_or_default();
        let ingredients = self.ingredients.unwrap_or_default();

        let (Some(name), Some(description), Some(price), Some(category)) =
            (name, description, price, category)
        else {
            return Err(errors);
        };

        Ok(ProductDraft {
            name,
            description,
            price,
            image,
            category,
            benefits,
            ingredients,
            dosage,
        })
    }

    /// Fill absent fields from an existing product.
    ///
    /// The result still goes through [`ProductInput::validate`], so a partial
    /// update is revalidated as a whole document.
    #[must_use]
    pub fn merge(self, existing: &Product) -> Self {
        Self {
            name: self.name.or_else(|| Some(existing.name.clone())),
            description: self
                .description
                .or_else(|| Some(existing.description.clone())),
            price: self.price.or(Some(existing.price.amount())),
            image: self.image.or_else(|| Some(existing.image.clone())),
            category: self
                .category
                .or_else(|| Some(existing.category.as_str().to_owned())),
            benefits: self.benefits.or_else(|| Some(existing.benefits.clone())),
            ingredients: self
                .ingredients
                .or_else(|| Some(existing.ingredients.clone())),
            dosage: self.dosage.or_else(|| Some(existing.dosage.clone())),
        }
    }
}

fn allowed_categories_message() -> String {
    let names = Category::ALL
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("category must be one of {names}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: Some("Tulsi Immunity Blend".to_owned()),
            description: Some("Holy basil capsules for daily immune support.".to_owned()),
            price: Some(Decimal::new(49_900, 2)),
            image: None,
            category: Some("Immunity".to_owned()),
            benefits: Some(vec!["Supports immunity".to_owned()]),
            ingredients: Some(vec!["Tulsi extract".to_owned()]),
            dosage: None,
        }
    }

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Tulsi Immunity Blend".to_owned(),
            description: "Holy basil capsules for daily immune support.".to_owned(),
            price: Price::new(Decimal::new(49_900, 2)).unwrap(),
            image: DEFAULT_IMAGE.to_owned(),
            category: Category::Immunity,
            benefits: vec!["Supports immunity".to_owned()],
            ingredients: vec!["Tulsi extract".to_owned()],
            dosage: DEFAULT_DOSAGE.to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_applies_defaults() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.image, DEFAULT_IMAGE);
        assert_eq!(draft.dosage, DEFAULT_DOSAGE);
        assert_eq!(draft.category, Category::Immunity);
    }

    #[test]
    fn test_validate_trims_name() {
        let mut input = valid_input();
        input.name = Some("  Tulsi Drops  ".to_owned());
        let draft = input.validate().unwrap();
        assert_eq!(draft.name, "Tulsi Drops");
    }

    #[test]
    fn test_validate_collects_all_missing_fields() {
        let err = ProductInput::default().validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "description", "price", "category"]);
    }

    #[test]
    fn test_validate_rejects_long_name() {
        let mut input = valid_input();
        input.name = Some("x".repeat(101));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed 100 characters"));
    }

    #[test]
    fn test_validate_rejects_long_description() {
        let mut input = valid_input();
        input.description = Some("x".repeat(1001));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed 1000 characters"));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut input = valid_input();
        input.price = Some(Decimal::new(-100, 2));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("Price cannot be negative"));
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let mut input = valid_input();
        input.category = Some("Unknown".to_owned());
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("category"));
        assert!(err.to_string().contains("Immunity"));
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let existing = sample_product();
        let patch = ProductInput {
            price: Some(Decimal::new(59_900, 2)),
            ..ProductInput::default()
        };

        let draft = patch.merge(&existing).validate().unwrap();
        assert_eq!(draft.name, existing.name);
        assert_eq!(draft.price.amount(), Decimal::new(59_900, 2));
        assert_eq!(draft.benefits, existing.benefits);
    }

    #[test]
    fn test_merge_then_validate_rejects_bad_patch() {
        let existing = sample_product();
        let patch = ProductInput {
            category: Some("Unknown".to_owned()),
            ..ProductInput::default()
        };

        let err = patch.merge(&existing).validate().unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["category"], "Immunity");
    }
}
