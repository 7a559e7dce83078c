use serde::{Deserialize, Serialize};

/// Stock categories offered by the item forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fruits,
    Vegetables,
    Stationaries,
}

impl Category {
    /// Wire value stored by the backend
    pub fn code(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Stationaries => "Stationaries",
        }
    }

    /// Short label shown in the stock table
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Category::Fruits => "FRT",
            Category::Vegetables => "VEG",
            Category::Stationaries => "STR",
        }
    }

    /// Category discount in percent
    pub fn discount_percent(&self) -> u32 {
        match self {
            Category::Fruits => 5,
            Category::Vegetables => 10,
            Category::Stationaries => 3,
        }
    }

    pub fn all() -> Vec<Category> {
        vec![Category::Fruits, Category::Vegetables, Category::Stationaries]
    }

    /// Exact, case-sensitive match against the wire value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Fruits" => Some(Category::Fruits),
            "Vegetables" => Some(Category::Vegetables),
            "Stationaries" => Some(Category::Stationaries),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
