pub mod app;
pub mod ui;

pub use app::{App, Screen};
pub use ui::{run_tui, TuiError};
