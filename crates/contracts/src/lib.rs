//! Stock inventory model shared by the web front end: records and their
//! wire format, pricing rules, the table state machine and the gateway
//! seam to the REST backend.

pub mod domain;
pub mod enums;
pub mod shared;
