mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, ForwarderConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
};
