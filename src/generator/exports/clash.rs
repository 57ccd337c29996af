use thiserror::Error;

use crate::generator::config::group::generate_groups;
use crate::generator::yaml::clash_output::{ClashProxy, ClashYamlOutput};
use crate::generator::yaml::emitter::to_yaml_string;
use crate::models::Proxy;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Comment line naming where the nodes came from.
fn provenance_comment(source_label: &str) -> Option<String> {
    let label = source_label.trim();
    if label.is_empty() {
        return None;
    }
    let single_line: String = label
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();
    Some(format!("# Source Subscription: {}\n", single_line))
}

/// Convert proxies to a Clash Meta configuration
///
/// Output order is fixed: provenance comment (when `source_label` is not
/// empty), global settings, `proxies`, `proxy-groups`, then `rules:` with
/// `rules_text` appended verbatim. The same inputs always produce the same
/// bytes.
///
/// # Arguments
/// * `proxies` - Nodes with already unique names, in output order
/// * `rules_text` - Body of the `rules:` block, passed through unchanged
/// * `source_label` - Provenance echoed in the leading comment
pub fn proxy_to_clash(
    proxies: &[Proxy],
    rules_text: &str,
    source_label: &str,
) -> Result<String, GenerateError> {
    let proxy_names: Vec<String> = proxies.iter().map(|p| p.name.clone()).collect();

    let output = ClashYamlOutput {
        proxies: proxies.iter().map(ClashProxy::from).collect(),
        proxy_groups: generate_groups(&proxy_names),
        ..Default::default()
    };

    let mut document = provenance_comment(source_label).unwrap_or_default();
    document.push_str(&to_yaml_string(&output)?);
    document.push_str("rules:\n");
    document.push_str(rules_text);
    Ok(document)
}
