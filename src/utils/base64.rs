use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, tolerant of missing padding and dirty trailing bits.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URL-safe alphabet (`-` and `_`), same tolerance as [`STANDARD_LENIENT`].
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Encodes a string to URL-safe Base64 without padding.
pub fn url_safe_base64_encode(input: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(input)
}

/// Right-pads `input` with `=` to a multiple of four characters.
fn pad_to_quad(input: &str) -> String {
    let mut padded = input.to_string();
    let missing = padded.len() % 4;
    if missing != 0 {
        padded.push_str(&"=".repeat(4 - missing));
    }
    padded
}

fn try_engine(engine: &GeneralPurpose, input: &str) -> Option<String> {
    let bytes = engine.decode(input).ok()?;
    String::from_utf8(bytes).ok()
}

/// Decodes text that may be Base64 (standard or URL-safe, padded or not)
/// or may already be plain text.
///
/// Whitespace inside the body is ignored so line-wrapped subscriptions decode
/// too. The standard alphabet is tried first, then the URL-safe one; a
/// candidate only counts when it decodes to valid UTF-8. When neither works
/// the input is returned unchanged, so this never fails.
///
/// # Examples
/// ```
/// use subclash::utils::base64::decode;
///
/// assert_eq!(decode("aGVsbG8"), "hello");
/// assert_eq!(decode("vless://plain"), "vless://plain");
/// ```
pub fn decode(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let padded = pad_to_quad(&compact);

    try_engine(&STANDARD_LENIENT, &padded)
        .or_else(|| try_engine(&URL_SAFE_LENIENT, &padded))
        .unwrap_or_else(|| raw.to_string())
}
