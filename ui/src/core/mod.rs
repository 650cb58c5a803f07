//! Framework-independent logic for the results table: data model, status
//! classification, column descriptors and the table engine.

pub mod clipboard;
pub mod columns;
pub mod detail;
pub mod error;
pub mod expand;
pub mod format;
pub mod model;
pub mod platform;
pub mod status;
pub mod table;

pub use error::ViewerError;
