pub mod alert;
pub mod config;
pub mod logging;
pub mod report;
pub mod stat;
pub mod tui;
