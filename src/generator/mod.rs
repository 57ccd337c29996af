pub mod config;
pub mod exports;
pub mod yaml;

pub use config::remark::{resolve_names, NameResolver};
pub use exports::clash::{proxy_to_clash, GenerateError};
