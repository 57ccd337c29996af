//! Block-style YAML writer for the generated document
//!
//! serde_yaml renders YAML 1.1 words such as `on`, `yes` or `NO` as plain
//! scalars, and Clash cores still read those as booleans. Every `name` value
//! and every member of a `proxies` list is therefore written double-quoted.
//! All other scalars keep serde_yaml's own rendering.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Key whose string value is always double-quoted
const NAME_KEY: &str = "name";
/// Key whose string list items are always double-quoted
const MEMBER_LIST_KEY: &str = "proxies";

const INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringStyle {
    Quoted,
    Plain,
}

/// Serializes `value` as block-style YAML with names double-quoted.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, serde_yaml::Error> {
    let tree = serde_yaml::to_value(value)?;
    let mut out = String::new();
    match &tree {
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0)?,
        Value::Sequence(seq) if !seq.is_empty() => {
            write_sequence(&mut out, seq, 0, StringStyle::Plain)?
        }
        scalar => {
            out.push_str(&plain_scalar(scalar)?);
            out.push('\n');
        }
    }
    Ok(out)
}

/// JSON string syntax is valid YAML double-quoted syntax.
fn double_quoted(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn plain_scalar(value: &Value) -> Result<String, serde_yaml::Error> {
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    match value {
        // block scalars cannot share a line with their key
        Value::String(s) if rendered.contains('\n') => Ok(double_quoted(s)),
        _ => Ok(rendered.to_string()),
    }
}

fn render_scalar(value: &Value, style: StringStyle) -> Result<String, serde_yaml::Error> {
    match (value, style) {
        (Value::String(s), StringStyle::Quoted) => Ok(double_quoted(s)),
        _ => plain_scalar(value),
    }
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) -> Result<(), serde_yaml::Error> {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        let key_text = plain_scalar(key)?;
        match value {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str(&format!("{}{}:\n", pad, key_text));
                write_mapping(out, nested, indent + INDENT)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                let style = if key.as_str() == Some(MEMBER_LIST_KEY) {
                    StringStyle::Quoted
                } else {
                    StringStyle::Plain
                };
                out.push_str(&format!("{}{}:\n", pad, key_text));
                write_sequence(out, items, indent, style)?;
            }
            scalar => {
                let style = if key.as_str() == Some(NAME_KEY) {
                    StringStyle::Quoted
                } else {
                    StringStyle::Plain
                };
                out.push_str(&format!(
                    "{}{}: {}\n",
                    pad,
                    key_text,
                    render_scalar(scalar, style)?
                ));
            }
        }
    }
    Ok(())
}

fn write_sequence(
    out: &mut String,
    items: &[Value],
    indent: usize,
    style: StringStyle,
) -> Result<(), serde_yaml::Error> {
    let pad = " ".repeat(indent);
    let inner_pad = " ".repeat(indent + INDENT);
    for item in items {
        let mut nested = String::new();
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                write_mapping(&mut nested, map, indent + INDENT)?
            }
            Value::Sequence(seq) if !seq.is_empty() => {
                write_sequence(&mut nested, seq, indent + INDENT, style)?
            }
            scalar => {
                out.push_str(&format!("{}- {}\n", pad, render_scalar(scalar, style)?));
                continue;
            }
        }
        // the first line of a nested block shares its line with the dash
        out.push_str(&pad);
        out.push_str("- ");
        out.push_str(nested.strip_prefix(inner_pad.as_str()).unwrap_or(&nested));
    }
    Ok(())
}
