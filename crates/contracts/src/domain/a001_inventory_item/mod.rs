pub mod aggregate;
pub mod controller;
pub mod create_form;
pub mod gateway;
pub mod pricing;
pub mod projection;
pub mod table;

pub use aggregate::{
    InventoryItem, InventoryItemDto, InventoryItemForm, InventoryItemId, ListResponse,
    MessageResponse, ValidationError,
};
pub use controller::{InventoryTableController, OperationReport};
pub use create_form::CreateFormState;
pub use gateway::{ApiError, InventoryGateway};
pub use projection::{project, DisplayRow};
pub use table::{InventoryTable, TableError, PAGE_SIZE};
