// Public library interface for sales-treemap
// The binaries drive these modules; tests exercise them directly.

pub mod config;
pub mod layout;
pub mod render;
pub mod tree;
pub mod ui;
