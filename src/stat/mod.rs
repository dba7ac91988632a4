pub mod dashboard;
pub mod datatype;
pub mod format;
pub mod sample_data;

pub use dashboard::*;
pub use datatype::*;
pub use format::*;
pub use sample_data::{recent_activity, STAT_CARDS};
