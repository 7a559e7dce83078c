//! Category pricing rules.
//!
//! Both lookups take the raw backend string: a category outside
//! [`Category`] is not an error, it falls back to no discount and to the
//! unchanged name.

use crate::enums::Category;

/// Discount percentage for a category; unknown values get `0`
pub fn discount_for(category: &str) -> u32 {
    Category::from_code(category)
        .map(|c| c.discount_percent())
        .unwrap_or(0)
}

/// Table label for a category; unknown values are returned as is
pub fn abbreviation_for(category: &str) -> &str {
    match Category::from_code(category) {
        Some(c) => c.abbreviation(),
        None => category,
    }
}
