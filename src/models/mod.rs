//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the
//! application, separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use subclash::models::{Proxy, ProxyKind, ProxyType};
//!
//! let proxy = Proxy::new(
//!     "hk-01".to_string(),
//!     "example.com".to_string(),
//!     443,
//!     ProxyKind::Hysteria2 {
//!         password: "secret".to_string(),
//!         sni: None,
//!         skip_cert_verify: false,
//!     },
//! );
//! assert_eq!(proxy.proxy_type(), ProxyType::Hysteria2);
//! assert!(proxy.udp);
//! ```

mod proxy;
pub mod proxy_group_config;

pub use proxy::*;
pub use proxy_group_config::{ProxyGroupConfig, ProxyGroupType, ROUTING_GROUPS};
