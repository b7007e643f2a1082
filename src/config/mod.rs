//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BakeSalePaths;
pub use settings::Settings;
