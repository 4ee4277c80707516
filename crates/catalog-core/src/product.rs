//! Product records and the validation gate for candidates

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A stored product. Field order here is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub stock: f64,
}

impl Product {
    /// Attach an identity to a draft.
    #[must_use]
    pub fn from_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            thumbnail: draft.thumbnail,
            code: draft.code,
            stock: draft.stock,
        }
    }
}

/// A candidate product, submitted for add or update.
///
/// Omitted JSON keys become empty or zero so that [`ProductDraft::check`]
/// reports them instead of the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[garde(context(()))]
#[serde(default)]
pub struct ProductDraft {
    #[garde(custom(validate_required_text))]
    pub title: String,
    #[garde(custom(validate_required_text))]
    pub description: String,
    #[garde(custom(validate_nonzero_number))]
    pub price: f64,
    #[garde(custom(validate_required_text))]
    pub thumbnail: String,
    #[garde(custom(validate_required_text))]
    pub code: String,
    #[garde(custom(validate_nonzero_number))]
    pub stock: f64,
}

impl ProductDraft {
    /// Run the required-field rules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` naming every field that failed.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|report| CatalogError::Validation(report.to_string().trim().to_string()))
    }
}

// ============================================================================
// Custom Validators
// Note: garde requires `&T` and `&()` signatures - clippy lints suppressed
// ============================================================================

#[allow(clippy::ptr_arg, clippy::trivially_copy_pass_by_ref)]
fn validate_required_text(value: &String, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        Err(garde::Error::new("is required"))
    } else {
        Ok(())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn validate_nonzero_number(value: &f64, _ctx: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!("{value} is not a finite number")));
    }
    if *value == 0.0 {
        return Err(garde::Error::new("is required and must be non-zero"));
    }
    Ok(())
}
