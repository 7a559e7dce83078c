pub mod category;
pub mod location;

pub use category::Category;
pub use location::Location;
