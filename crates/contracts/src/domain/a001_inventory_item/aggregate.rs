use crate::domain::common::AggregateId;
use crate::enums::{Category, Location};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Id of a stock record, issued by the backend as an opaque string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(pub String);

impl InventoryItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for InventoryItemId {}

impl std::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Stock record as the backend stores it.
///
/// `category` stays a string: older records may carry categories outside
/// [`Category`] and the table still has to show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: InventoryItemId,

    #[serde(rename = "itemCode")]
    pub item_code: String,

    #[serde(rename = "itemName")]
    pub item_name: String,

    pub category: String,

    #[serde(deserialize_with = "de_number")]
    pub quantity: f64,

    #[serde(
        default,
        deserialize_with = "de_opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl InventoryItem {
    /// Location with blank values treated as absent
    pub fn location_value(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Wire helpers
// ============================================================================

// Older records were posted straight from form inputs: numbers may arrive
// as JSON strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Unreadable quantities become `0.0` so one bad record cannot hide the list
fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => Ok(s.trim().parse::<f64>().unwrap_or_else(|_| {
            log::warn!("non-numeric quantity {:?}, shown as 0", s);
            0.0
        })),
        None => {
            log::warn!("null quantity, shown as 0");
            Ok(0.0)
        }
    }
}

fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Envelope of `GET /api/v1/invoices/getall`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<InventoryItem>,
}

/// Body of write responses; the backend may attach a human readable message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update request body (no id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemDto {
    #[serde(rename = "itemCode")]
    pub item_code: String,

    #[serde(rename = "itemName")]
    pub item_name: String,

    pub category: Category,
    pub quantity: f64,
    pub rate: f64,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("Unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

/// Raw text state of the create and edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItemForm {
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub quantity: String,
    pub rate: String,
    pub location: String,
}

impl InventoryItemForm {
    /// Prefill for the edit dialog
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            item_code: item.item_code.clone(),
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            rate: item.rate.map(|r| r.to_string()).unwrap_or_default(),
            location: item.location.clone().unwrap_or_default(),
        }
    }

    /// Required-field checks; returns the request body on success
    pub fn validate(&self) -> Result<InventoryItemDto, ValidationError> {
        let item_code = required("Item Code", &self.item_code)?;
        let item_name = required("Item Name", &self.item_name)?;

        let category_raw = required("Category", &self.category)?;
        let category =
            Category::from_code(&category_raw).ok_or(ValidationError::UnknownOption {
                field: "Category",
                value: category_raw,
            })?;

        let quantity = non_negative("Quantity", &self.quantity)?;
        let rate = non_negative("Rate", &self.rate)?;

        let location_raw = required("Location", &self.location)?;
        let location =
            Location::from_code(&location_raw).ok_or(ValidationError::UnknownOption {
                field: "Location",
                value: location_raw,
            })?;

        Ok(InventoryItemDto {
            item_code,
            item_name,
            category,
            quantity,
            rate,
            location,
        })
    }

}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

fn non_negative(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let raw = required(field, value)?;
    let number = raw
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber(field))?;
    if number < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(number)
}
