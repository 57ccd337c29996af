//! Proxy model definitions
//!
//! Contains the normalized node record every scheme parser produces.

use serde::Serialize;

/// Represents the type of a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    VMess,
    Vless,
    Hysteria2,
    Tuic,
}

/// Stream options for the `ws` network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsOptions {
    pub path: String,
    /// Value of the `Host` request header.
    pub host: String,
}

/// Reality TLS camouflage options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealityOptions {
    pub public_key: String,
    pub short_id: Option<String>,
}

/// Protocol specific part of a [`Proxy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyKind {
    VMess {
        uuid: String,
        alter_id: u32,
        cipher: String,
        network: String,
        tls: bool,
        skip_cert_verify: bool,
        ws_opts: Option<WsOptions>,
    },
    Vless {
        uuid: String,
        network: String,
        tls: bool,
        servername: Option<String>,
        skip_cert_verify: bool,
        flow: Option<String>,
        client_fingerprint: String,
        ws_opts: Option<WsOptions>,
        reality_opts: Option<RealityOptions>,
    },
    Hysteria2 {
        password: String,
        sni: Option<String>,
        skip_cert_verify: bool,
    },
    Tuic {
        uuid: String,
        password: String,
        sni: Option<String>,
        congestion_controller: String,
        skip_cert_verify: bool,
        alpn: Vec<String>,
        udp_relay_mode: String,
        disable_sni: bool,
    },
}

/// A normalized proxy node.
///
/// Built once from a single share link. Only `name` changes afterwards, when
/// the name resolver makes it unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub name: String,
    pub server: String,
    pub port: u16,
    pub udp: bool,
    pub kind: ProxyKind,
}

impl Proxy {
    pub fn new(name: String, server: String, port: u16, kind: ProxyKind) -> Self {
        Proxy {
            name,
            server,
            port,
            udp: true,
            kind,
        }
    }

    pub fn proxy_type(&self) -> ProxyType {
        match self.kind {
            ProxyKind::VMess { .. } => ProxyType::VMess,
            ProxyKind::Vless { .. } => ProxyType::Vless,
            ProxyKind::Hysteria2 { .. } => ProxyType::Hysteria2,
            ProxyKind::Tuic { .. } => ProxyType::Tuic,
        }
    }
}

/// Fallback display names used when a link carries none.
pub const VMESS_DEFAULT_NAME: &str = "vmess";
pub const VLESS_DEFAULT_NAME: &str = "vless_node";
pub const HYSTERIA2_DEFAULT_NAME: &str = "hysteria2_node";
pub const TUIC_DEFAULT_NAME: &str = "tuic_node";
