pub mod config;
pub use config::Config;

pub mod logging;

pub mod secrets;
pub use secrets::Secrets;
