use super::aggregate::{InventoryItem, InventoryItemId};
use super::pricing::{abbreviation_for, discount_for};

/// Placeholder for absent optional fields
pub const PLACEHOLDER: &str = "-";

/// Derived, read-only table row for one [`InventoryItem`]
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: InventoryItemId,
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub category_abbrev: String,
    pub quantity: f64,
    pub rate: Option<f64>,
    pub price: f64,
    pub discount_percent: u32,
    pub amount: f64,
    pub location: Option<String>,
}

impl DisplayRow {
    pub fn quantity_display(&self) -> String {
        self.quantity.to_string()
    }

    pub fn rate_display(&self) -> String {
        self.rate
            .map(format_amount)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn price_display(&self) -> String {
        format_amount(self.price)
    }

    pub fn discount_display(&self) -> String {
        format!("{}%", self.discount_percent)
    }

    pub fn amount_display(&self) -> String {
        format_amount(self.amount)
    }

    pub fn location_display(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Projects a record into its display row. Pure: same input, same row.
pub fn project(item: &InventoryItem) -> DisplayRow {
    let price = item.quantity * item.rate.unwrap_or(0.0);
    let discount_percent = discount_for(&item.category);
    let amount = round_half_away(price - price * f64::from(discount_percent) / 100.0, 2);

    DisplayRow {
        id: item.id.clone(),
        item_code: item.item_code.clone(),
        item_name: item.item_name.clone(),
        category: item.category.clone(),
        category_abbrev: abbreviation_for(&item.category).to_string(),
        quantity: item.quantity,
        rate: item.rate,
        price,
        discount_percent,
        amount,
        location: item.location_value().map(str::to_string),
    }
}

/// Rounds to `decimals` places, ties away from zero
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Two decimal places, ties away from zero
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_half_away(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, quantity: f64, rate: Option<f64>) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new("id-1"),
            item_code: "C1".into(),
            item_name: "Name".into(),
            category: category.into(),
            quantity,
            rate,
            location: None,
        }
    }

    #[test]
    fn test_project_vegetables() {
        let row = project(&item("Vegetables", 2.0, Some(50.0)));
        assert_eq!(row.price, 100.0);
        assert_eq!(row.price_display(), "100.00");
        assert_eq!(row.discount_percent, 10);
        assert_eq!(row.amount, 90.0);
        assert_eq!(row.amount_display(), "90.00");
        assert_eq!(row.category_abbrev, "VEG");
        assert_eq!(row.discount_display(), "10%");
    }

    #[test]
    fn test_project_missing_rate() {
        let row = project(&item("Fruits", 3.0, None));
        assert_eq!(row.price_display(), "0.00");
        assert_eq!(row.discount_percent, 5);
        assert_eq!(row.amount_display(), "0.00");
        assert_eq!(row.rate_display(), PLACEHOLDER);
        assert_eq!(row.location_display(), PLACEHOLDER);
    }

    #[test]
    fn test_project_unknown_category() {
        let row = project(&item("Grocery", 4.0, Some(2.5)));
        assert_eq!(row.discount_percent, 0);
        assert_eq!(row.category_abbrev, "Grocery");
        assert_eq!(row.amount_display(), "10.00");
        assert_eq!(row.rate_display(), "2.50");
    }

    #[test]
    fn test_amount_rounds_half_away_from_zero() {
        // 0.25 * 50 = 12.5 -> 12.5 - 0.375 = 12.125
        let row = project(&item("Stationaries", 0.25, Some(50.0)));
        assert_eq!(row.amount_display(), "12.13");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(-0.125), "-0.13");
    }

    #[test]
    fn test_location_passthrough() {
        let mut record = item("Fruits", 1.0, Some(1.0));
        record.location = Some("Thrissur".into());
        assert_eq!(project(&record).location_display(), "Thrissur");
    }

    #[test]
    fn test_project_is_idempotent() {
        let record = item("Vegetables", 7.0, Some(13.37));
        assert_eq!(project(&record), project(&record));
    }
}
