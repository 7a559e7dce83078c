pub mod details;
pub mod form;
pub mod list;
pub mod page;
pub mod state;

pub use page::InventoryPage;
