use thiserror::Error;

/// The share-link schemes this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    VMess,
    Vless,
    Hysteria2,
    Tuic,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [Scheme::VMess, Scheme::Vless, Scheme::Hysteria2, Scheme::Tuic];

    /// Literal prefix a line must start with.
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::VMess => "vmess://",
            Scheme::Vless => "vless://",
            Scheme::Hysteria2 => "hysteria2://",
            Scheme::Tuic => "tuic://",
        }
    }

    /// Detects the scheme of an already trimmed line.
    pub fn detect(line: &str) -> Option<Scheme> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| line.starts_with(scheme.prefix()))
    }
}

/// One candidate input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position after `|` has been expanded into line breaks
    pub line_no: usize,
    /// Trimmed text
    pub text: String,
}

impl RawLine {
    pub fn new(line_no: usize, text: impl Into<String>) -> Self {
        RawLine {
            line_no,
            text: text.into(),
        }
    }
}

/// Why a recognized line could not be turned into a proxy.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("Body is not a JSON object")]
    NotAnObject,

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URI: {0}")]
    Url(#[from] url::ParseError),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidField(&'static str, String),
}

pub type ParseResult<T> = Result<T, ParseError>;
