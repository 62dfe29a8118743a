pub mod config_service;
pub mod logging;
pub mod paths;

pub use config_service::ConfigService;
pub use logging::{LoggingGuard, init_logging};
pub use paths::BaseeraPaths;
