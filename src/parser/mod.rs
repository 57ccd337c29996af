pub mod explodes;
pub mod filter;
pub mod types;

pub use explodes::explode;
pub use filter::{classify, dedupe, Classified, LineStats};
pub use types::{ParseError, RawLine, Scheme};
