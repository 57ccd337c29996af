use crate::models::{Proxy, ProxyKind, RealityOptions, WsOptions, VLESS_DEFAULT_NAME};
use crate::parser::types::{ParseError, ParseResult, Scheme};
use crate::utils::url::{decode_display_name, query_params, url_decode};

use super::common::{is_insecure, parse_link};

/// Accepted spellings of the reality short id, in lookup order.
const SHORT_ID_KEYS: [&str; 3] = ["sid", "shortId", "short-id"];

/// Parse a VLESS link into a Proxy object
/// Format: vless://uuid@host:port?type=ws&security=reality&sni=...#remark
pub fn explode_vless(vless: &str) -> ParseResult<Proxy> {
    let link = parse_link(vless, Scheme::Vless)?;
    let params = query_params(&link.url);

    let uuid = url_decode(link.url.username());
    if uuid.is_empty() {
        return Err(ParseError::MissingField("uuid"));
    }

    let network = params.get("type").map_or("tcp", String::as_str).to_string();
    let servername = params.get("sni").cloned();
    let skip_cert_verify = is_insecure(&params, "allowInsecure");

    let ws_opts = (network == "ws").then(|| {
        let host = params
            .get("host")
            .or(servername.as_ref())
            .unwrap_or(&link.host)
            .clone();
        WsOptions {
            path: params.get("path").map_or("/", String::as_str).to_string(),
            host,
        }
    });

    let flow = if network == "tcp" {
        params.get("flow").cloned()
    } else {
        None
    };

    let client_fingerprint = params
        .get("fp")
        .map_or("chrome", String::as_str)
        .to_string();

    let reality_opts = (params.get("security").map(String::as_str) == Some("reality")).then(|| {
        RealityOptions {
            public_key: params.get("pbk").cloned().unwrap_or_default(),
            short_id: SHORT_ID_KEYS
                .iter()
                .find_map(|key| params.get(*key))
                .cloned(),
        }
    });

    let name = decode_display_name(link.url.fragment().unwrap_or(""), VLESS_DEFAULT_NAME);

    Ok(Proxy::new(
        name,
        link.host,
        link.port,
        ProxyKind::Vless {
            uuid,
            network,
            tls: true,
            servername,
            skip_cert_verify,
            flow,
            client_fingerprint,
            ws_opts,
            reality_opts,
        },
    ))
}
