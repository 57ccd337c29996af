//! Share-link parsers, one per scheme.

pub mod common;
pub mod hysteria2;
pub mod tuic;
pub mod vless;
pub mod vmess;

pub use common::explode;
pub use hysteria2::explode_hysteria2;
pub use tuic::explode_tuic;
pub use vless::explode_vless;
pub use vmess::explode_vmess;
