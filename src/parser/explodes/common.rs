use std::collections::HashMap;

use url::Url;

use crate::models::Proxy;
use crate::parser::types::{ParseError, ParseResult, Scheme};
use crate::utils::url::host_of;

/// A share link parsed as a URI, with its address already validated.
pub struct ParsedLink {
    pub url: Url,
    pub host: String,
    pub port: u16,
}

/// Parses `link` as a URI of `scheme` and extracts a non-empty host and a
/// non-zero port.
pub fn parse_link(link: &str, scheme: Scheme) -> ParseResult<ParsedLink> {
    if !link.starts_with(scheme.prefix()) {
        return Err(ParseError::UnknownScheme(link.to_string()));
    }

    let url = Url::parse(link)?;
    let host = host_of(&url).ok_or(ParseError::MissingField("server"))?;
    let port = url.port().ok_or(ParseError::MissingField("port"))?;
    if port == 0 {
        return Err(ParseError::InvalidPort(port.to_string()));
    }

    Ok(ParsedLink { url, host, port })
}

/// Certificate checks are skipped only for the exact value `"1"`.
pub fn is_insecure(params: &HashMap<String, String>, key: &str) -> bool {
    params.get(key).map(String::as_str) == Some("1")
}

/// Explode a proxy link into a Proxy object
///
/// This function detects the type of proxy link and calls the appropriate parser
pub fn explode(link: &str) -> ParseResult<Proxy> {
    let link = link.trim();

    match Scheme::detect(link) {
        Some(Scheme::VMess) => super::vmess::explode_vmess(link),
        Some(Scheme::Vless) => super::vless::explode_vless(link),
        Some(Scheme::Hysteria2) => super::hysteria2::explode_hysteria2(link),
        Some(Scheme::Tuic) => super::tuic::explode_tuic(link),
        None => Err(ParseError::UnknownScheme(link.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProxyType;

    #[test]
    fn test_explode_dispatches_by_prefix() {
        let cases = [
            ("vless://u@h:1", ProxyType::Vless),
            ("hysteria2://p@h:1", ProxyType::Hysteria2),
            ("  tuic://u:p@h:1  ", ProxyType::Tuic),
        ];
        for (link, expected) in cases {
            assert_eq!(explode(link).unwrap().proxy_type(), expected);
        }
    }

    #[test]
    fn test_explode_unknown_scheme() {
        assert!(matches!(
            explode("trojan://p@h:1"),
            Err(ParseError::UnknownScheme(_))
        ));
    }

    #[test]
    fn test_parse_link_rejects_zero_port() {
        assert!(matches!(
            parse_link("tuic://u:p@h:0", Scheme::Tuic),
            Err(ParseError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_explode_unicode_and_mixed_case_hosts() {
        let proxy = explode("vless://u@香港.example:443#b").unwrap();
        assert_eq!(proxy.server, "香港.example");
        let proxy = explode("hysteria2://p@Example.COM:443").unwrap();
        assert_eq!(proxy.server, "example.com");
    }
}
