//! Command implementations.

pub mod config;
pub mod export;
pub mod extract;
pub mod import;

pub use self::config::execute_config;
pub use self::export::execute_export;
pub use self::extract::execute_extract;
pub use self::import::execute_import;
