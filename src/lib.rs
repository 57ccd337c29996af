pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{Proxy, ProxyKind, ProxyType};

// Re-export the conversion entry points
pub use interfaces::subconverter::{
    subconverter, ConvertError, ConvertReport, SourceText, SubconverterConfig,
    SubconverterConfigBuilder, SubconverterResult,
};
pub use settings::{Settings, SettingsError};
