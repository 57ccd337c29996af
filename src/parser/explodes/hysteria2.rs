use crate::models::{Proxy, ProxyKind, HYSTERIA2_DEFAULT_NAME};
use crate::parser::types::{ParseResult, Scheme};
use crate::utils::url::{decode_display_name, query_params, url_decode};

use super::common::{is_insecure, parse_link};

/// Parse a Hysteria2 link into a Proxy object
/// Format: hysteria2://password@host:port?sni=...&insecure=1#remark
pub fn explode_hysteria2(hysteria2: &str) -> ParseResult<Proxy> {
    let link = parse_link(hysteria2, Scheme::Hysteria2)?;
    let params = query_params(&link.url);

    // The password is the whole userinfo; hysteria2 has no separate user id
    let password = url_decode(link.url.username());
    let name = decode_display_name(link.url.fragment().unwrap_or(""), HYSTERIA2_DEFAULT_NAME);

    Ok(Proxy::new(
        name,
        link.host,
        link.port,
        ProxyKind::Hysteria2 {
            password,
            sni: params.get("sni").cloned(),
            skip_cert_verify: is_insecure(&params, "insecure"),
        },
    ))
}
