pub mod branch;
pub mod config;
pub mod error;
pub mod git_ops;
pub mod ui;
pub mod version;

pub use error::{GflError, Result};
