//! Serde model of the generated Clash Meta document.
//!
//! Field declaration order is the key order of the output, and every
//! optional key is skipped when absent, so two nodes of the same type always
//! list their keys in the same order.

use serde::Serialize;

use crate::models::{Proxy, ProxyKind, ProxyType, RealityOptions, WsOptions};

/// Represents the structured part of the Clash output (everything but the
/// provenance comment and the rules block)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    pub mixed_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,
    pub proxies: Vec<ClashProxy>,
    pub proxy_groups: Vec<ClashProxyGroup>,
}

impl Default for ClashYamlOutput {
    fn default() -> Self {
        Self {
            mixed_port: 7890,
            allow_lan: true,
            mode: "Rule".to_string(),
            log_level: "info".to_string(),
            external_controller: ":9090".to_string(),
            proxies: Vec::new(),
            proxy_groups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsHeaders {
    #[serde(rename = "Host")]
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashWsOpts {
    pub path: String,
    pub headers: WsHeaders,
}

impl From<&WsOptions> for ClashWsOpts {
    fn from(ws: &WsOptions) -> Self {
        Self {
            path: ws.path.clone(),
            headers: WsHeaders {
                host: ws.host.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashRealityOpts {
    pub public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
}

impl From<&RealityOptions> for ClashRealityOpts {
    fn from(reality: &RealityOptions) -> Self {
        Self {
            public_key: reality.public_key.clone(),
            short_id: reality.short_id.clone(),
        }
    }
}

/// Represents a single proxy in Clash configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashProxy {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: ProxyType,
    pub server: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(rename = "alterId", skip_serializing_if = "Option::is_none")]
    pub alter_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp_relay_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congestion_controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_sni: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<ClashWsOpts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reality_opts: Option<ClashRealityOpts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
}

impl ClashProxy {
    /// Create a proxy entry carrying only the always-present keys
    pub fn new(name: String, proxy_type: ProxyType, server: String, port: u16) -> Self {
        Self {
            name,
            proxy_type,
            server,
            port,
            uuid: None,
            password: None,
            udp: None,
            tls: None,
            flow: None,
            servername: None,
            sni: None,
            client_fingerprint: None,
            network: None,
            alter_id: None,
            cipher: None,
            skip_cert_verify: None,
            udp_relay_mode: None,
            congestion_controller: None,
            disable_sni: None,
            ws_opts: None,
            reality_opts: None,
            alpn: None,
        }
    }
}

impl From<&Proxy> for ClashProxy {
    fn from(proxy: &Proxy) -> Self {
        let mut clash = ClashProxy::new(
            proxy.name.clone(),
            proxy.proxy_type(),
            proxy.server.clone(),
            proxy.port,
        );
        clash.udp = Some(proxy.udp);

        match &proxy.kind {
            ProxyKind::VMess {
                uuid,
                alter_id,
                cipher,
                network,
                tls,
                skip_cert_verify,
                ws_opts,
            } => {
                clash.uuid = Some(uuid.clone());
                clash.tls = Some(*tls);
                clash.network = Some(network.clone());
                clash.alter_id = Some(*alter_id);
                clash.cipher = Some(cipher.clone());
                clash.skip_cert_verify = Some(*skip_cert_verify);
                clash.ws_opts = ws_opts.as_ref().map(ClashWsOpts::from);
            }
            ProxyKind::Vless {
                uuid,
                network,
                tls,
                servername,
                skip_cert_verify,
                flow,
                client_fingerprint,
                ws_opts,
                reality_opts,
            } => {
                clash.uuid = Some(uuid.clone());
                clash.tls = Some(*tls);
                clash.flow = flow.clone();
                clash.servername = servername.clone();
                clash.client_fingerprint = Some(client_fingerprint.clone());
                clash.network = Some(network.clone());
                clash.skip_cert_verify = Some(*skip_cert_verify);
                clash.ws_opts = ws_opts.as_ref().map(ClashWsOpts::from);
                clash.reality_opts = reality_opts.as_ref().map(ClashRealityOpts::from);
            }
            ProxyKind::Hysteria2 {
                password,
                sni,
                skip_cert_verify,
            } => {
                clash.password = Some(password.clone());
                clash.sni = sni.clone();
                clash.skip_cert_verify = Some(*skip_cert_verify);
            }
            ProxyKind::Tuic {
                uuid,
                password,
                sni,
                congestion_controller,
                skip_cert_verify,
                alpn,
                udp_relay_mode,
                disable_sni,
            } => {
                clash.uuid = Some(uuid.clone());
                clash.password = Some(password.clone());
                clash.sni = sni.clone();
                clash.skip_cert_verify = Some(*skip_cert_verify);
                clash.udp_relay_mode = Some(udp_relay_mode.clone());
                clash.congestion_controller = Some(congestion_controller.clone());
                clash.disable_sni = Some(*disable_sni);
                if !alpn.is_empty() {
                    clash.alpn = Some(alpn.clone());
                }
            }
        }

        clash
    }
}

/// Represents a proxy group in Clash configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<u32>,
    pub proxies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::yaml::emitter::to_yaml_string;

    #[test]
    fn test_hysteria2_entry_omits_foreign_keys() {
        let proxy = Proxy::new(
            "hy".to_string(),
            "h".to_string(),
            443,
            ProxyKind::Hysteria2 {
                password: "pw".to_string(),
                sni: None,
                skip_cert_verify: false,
            },
        );
        let yaml = to_yaml_string(&ClashProxy::from(&proxy)).unwrap();
        assert_eq!(
            yaml,
            "name: \"hy\"\ntype: hysteria2\nserver: h\nport: 443\npassword: pw\nudp: true\nskip-cert-verify: false\n"
        );
    }

    #[test]
    fn test_tuic_entry_key_order() {
        let proxy = Proxy::new(
            "t".to_string(),
            "h".to_string(),
            1,
            ProxyKind::Tuic {
                uuid: "u".to_string(),
                password: "p".to_string(),
                sni: Some("s".to_string()),
                congestion_controller: "bbr".to_string(),
                skip_cert_verify: true,
                alpn: vec!["h3".to_string()],
                udp_relay_mode: "native".to_string(),
                disable_sni: true,
            },
        );
        let yaml = to_yaml_string(&ClashProxy::from(&proxy)).unwrap();
        assert_eq!(
            yaml,
            "name: \"t\"\ntype: tuic\nserver: h\nport: 1\nuuid: u\npassword: p\nudp: true\nsni: s\n\
             skip-cert-verify: true\nudp-relay-mode: native\ncongestion-controller: bbr\n\
             disable-sni: true\nalpn:\n- h3\n"
        );
    }
}
