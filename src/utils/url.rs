//! URL decoding utilities

use std::collections::HashMap;

use url::{Host, Url};

/// Decodes a URL-encoded string
///
/// Returns the original string if decoding fails.
///
/// # Examples
/// ```
/// use subclash::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

fn has_percent_escape(input: &str) -> bool {
    input
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

/// Turns a link fragment into a display name.
///
/// Percent-decoding is applied once, and a second time when the result still
/// carries an escape (double-encoded fragments). Empty input, or input that
/// decodes to nothing, yields `placeholder`.
///
/// # Examples
/// ```
/// use subclash::utils::url::decode_display_name;
///
/// assert_eq!(decode_display_name("My%2520Node", "x"), "My Node");
/// assert_eq!(decode_display_name("", "vless_node"), "vless_node");
/// ```
pub fn decode_display_name(raw: &str, placeholder: &str) -> String {
    if raw.is_empty() {
        return placeholder.to_string();
    }

    let mut name = url_decode(raw);
    if has_percent_escape(&name) {
        name = url_decode(&name);
    }

    if name.is_empty() {
        placeholder.to_string()
    } else {
        name
    }
}

/// Collects the form-decoded query pairs of `url`.
///
/// The first occurrence of a key wins and empty values are dropped, so an
/// absent key and `key=` read the same.
pub fn query_params(url: &Url) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

/// Returns the lowercased host of `url` without IPv6 brackets.
///
/// Share-link schemes are not special to the URL parser, so a domain comes
/// back percent-encoded as an opaque host and is decoded here.
pub fn host_of(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) if !domain.is_empty() => Some(url_decode(domain).to_lowercase()),
        Host::Domain(_) => None,
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}
