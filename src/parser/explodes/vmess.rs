use serde_json::{Map, Value};

use crate::models::{Proxy, ProxyKind, WsOptions, VMESS_DEFAULT_NAME};
use crate::parser::types::{ParseError, ParseResult, Scheme};
use crate::utils::base64;

/// Reads a string field, treating an empty string as absent.
fn str_field<'a>(json: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    json.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Some generators write ports as `443.0`.
fn whole_number(value: f64) -> Option<u64> {
    (value.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&value)).then_some(value as u64)
}

/// Reads a field that links carry either as a JSON number or as a string.
fn int_field(json: &Map<String, Value>, key: &str) -> Option<Result<u64, String>> {
    match json.get(key)? {
        Value::Number(n) => Some(
            n.as_u64()
                .or_else(|| n.as_f64().and_then(whole_number))
                .ok_or_else(|| n.to_string()),
        ),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().parse::<u64>().map_err(|_| s.clone())),
        Value::Null => None,
        other => Some(Err(other.to_string())),
    }
}

/// Parse a VMess link into a Proxy object
///
/// The body after `vmess://` is Base64 of a flat JSON object (the v2rayN
/// share format). `add`, `port` and `id` are required.
pub fn explode_vmess(vmess: &str) -> ParseResult<Proxy> {
    let encoded = vmess
        .strip_prefix(Scheme::VMess.prefix())
        .ok_or_else(|| ParseError::UnknownScheme(vmess.to_string()))?;

    let decoded = base64::decode(encoded);
    let json: Value = serde_json::from_str(&decoded)?;
    let json = json.as_object().ok_or(ParseError::NotAnObject)?;

    let add = str_field(json, "add").ok_or(ParseError::MissingField("add"))?;
    let port = match int_field(json, "port") {
        Some(Ok(port)) => u16::try_from(port)
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ParseError::InvalidPort(port.to_string()))?,
        Some(Err(raw)) => return Err(ParseError::InvalidPort(raw)),
        None => return Err(ParseError::MissingField("port")),
    };
    let id = str_field(json, "id").ok_or(ParseError::MissingField("id"))?;

    let alter_id = match int_field(json, "aid") {
        Some(Ok(aid)) => {
            u32::try_from(aid).map_err(|_| ParseError::InvalidField("aid", aid.to_string()))?
        }
        Some(Err(raw)) => return Err(ParseError::InvalidField("aid", raw)),
        None => 0,
    };

    let name = str_field(json, "ps").unwrap_or(VMESS_DEFAULT_NAME);
    let cipher = str_field(json, "scy").unwrap_or("auto");
    let network = str_field(json, "net").unwrap_or("ws");

    let tls = match json.get("tls") {
        Some(Value::String(s)) => s == "tls",
        Some(Value::Bool(b)) => *b,
        _ => false,
    };
    let skip_cert_verify = matches!(json.get("verify_cert"), Some(Value::Bool(false)));

    let ws_opts = (network == "ws").then(|| WsOptions {
        path: str_field(json, "path").unwrap_or("/").to_string(),
        host: str_field(json, "host").unwrap_or(add).to_string(),
    });

    Ok(Proxy::new(
        name.to_string(),
        add.to_string(),
        port,
        ProxyKind::VMess {
            uuid: id.to_string(),
            alter_id,
            cipher: cipher.to_string(),
            network: network.to_string(),
            tls,
            skip_cert_verify,
            ws_opts,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::{base64_encode, url_safe_base64_encode};

    fn link(json: &str) -> String {
        format!("vmess://{}", base64_encode(json))
    }

    #[test]
    fn test_explode_vmess_defaults() {
        let proxy = explode_vmess(&link(
            r#"{"add":"h","port":"443","id":"u","net":"ws","tls":"tls"}"#,
        ))
        .unwrap();

        assert_eq!(proxy.name, "vmess");
        assert_eq!(proxy.server, "h");
        assert_eq!(proxy.port, 443);
        assert!(proxy.udp);
        assert_eq!(
            proxy.kind,
            ProxyKind::VMess {
                uuid: "u".to_string(),
                alter_id: 0,
                cipher: "auto".to_string(),
                network: "ws".to_string(),
                tls: true,
                skip_cert_verify: false,
                ws_opts: Some(WsOptions {
                    path: "/".to_string(),
                    host: "h".to_string(),
                }),
            }
        );
    }

    #[test]
    fn test_explode_vmess_numeric_fields_and_explicit_values() {
        let proxy = explode_vmess(&link(
            r#"{"v":"2","ps":"JP 01","add":"1.2.3.4","port":8443,"id":"u","aid":"64","scy":"none","net":"tcp","tls":"","verify_cert":false}"#,
        ))
        .unwrap();

        assert_eq!(proxy.name, "JP 01");
        assert_eq!(proxy.port, 8443);
        match proxy.kind {
            ProxyKind::VMess {
                alter_id,
                cipher,
                network,
                tls,
                skip_cert_verify,
                ws_opts,
                ..
            } => {
                assert_eq!(alter_id, 64);
                assert_eq!(cipher, "none");
                assert_eq!(network, "tcp");
                assert!(!tls);
                assert!(skip_cert_verify);
                assert!(ws_opts.is_none());
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_explode_vmess_tls_marker_is_strict() {
        let proxy = explode_vmess(&link(
            r#"{"add":"h","port":1,"id":"u","tls":"1","host":"cdn.example","path":"/ws"}"#,
        ))
        .unwrap();
        match proxy.kind {
            ProxyKind::VMess { tls, ws_opts, .. } => {
                assert!(!tls);
                let ws = ws_opts.unwrap();
                assert_eq!(ws.host, "cdn.example");
                assert_eq!(ws.path, "/ws");
            }
            other => panic!("unexpected kind {:?}", other),
        }

        let proxy = explode_vmess(&link(r#"{"add":"h","port":1,"id":"u","tls":true}"#)).unwrap();
        assert!(matches!(proxy.kind, ProxyKind::VMess { tls: true, .. }));
    }

    #[test]
    fn test_explode_vmess_whole_float_numbers() {
        let proxy =
            explode_vmess(&link(r#"{"add":"h","port":443.0,"id":"u","aid":2.0}"#)).unwrap();
        assert_eq!(proxy.port, 443);
        assert!(matches!(proxy.kind, ProxyKind::VMess { alter_id: 2, .. }));

        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","port":443.5,"id":"u"}"#)),
            Err(ParseError::InvalidPort(_))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","port":-1,"id":"u"}"#)),
            Err(ParseError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_explode_vmess_url_safe_unpadded_body() {
        let body = url_safe_base64_encode(r#"{"add":"h","port":"80","id":"u","ps":"??>"}"#);
        let proxy = explode_vmess(&format!("vmess://{}", body)).unwrap();
        assert_eq!(proxy.name, "??>");
    }

    #[test]
    fn test_explode_vmess_failures() {
        assert!(matches!(
            explode_vmess(&link(r#"{"port":"443","id":"u"}"#)),
            Err(ParseError::MissingField("add"))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","id":"u"}"#)),
            Err(ParseError::MissingField("port"))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","port":"abc","id":"u"}"#)),
            Err(ParseError::InvalidPort(_))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","port":"70000","id":"u"}"#)),
            Err(ParseError::InvalidPort(_))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"{"add":"h","port":"443"}"#)),
            Err(ParseError::MissingField("id"))
        ));
        assert!(matches!(
            explode_vmess(&link(r#"["not","an","object"]"#)),
            Err(ParseError::NotAnObject)
        ));
        assert!(matches!(explode_vmess("vmess://%%%"), Err(ParseError::Json(_))));
    }
}
