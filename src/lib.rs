pub mod config;
pub mod logger;
pub mod resources;
pub mod severity;
pub mod utils;

pub use logger::ProcessLogger;
pub use severity::Severity;
