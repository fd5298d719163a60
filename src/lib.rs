//! Hostfolio Revenue Aggregation Library
//!
//! Host revenue/ranking aggregation core for the tourism platform management
//! console: payment synthesis, time-bucketed revenue series and top-combo
//! ranking over a point-in-time snapshot of backend data.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
