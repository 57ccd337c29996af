use log::{debug, info, warn};
use thiserror::Error;

use crate::generator::{proxy_to_clash, resolve_names, GenerateError};
use crate::models::Proxy;
use crate::parser::{classify, dedupe, explode, LineStats};
use crate::utils::base64;

/// How many rejected lines a report keeps by default
pub const REJECTED_SAMPLE_LIMIT: usize = 10;

/// One block of input text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// File name, URL or similar; echoed in the provenance comment
    pub label: String,
    /// Raw text, possibly Base64 encoded
    pub content: String,
}

impl SourceText {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Configuration for subconverter
#[derive(Debug, Clone)]
pub struct SubconverterConfig {
    /// Sources in priority order: manual text, uploaded files, then
    /// subscription URLs. When two sources carry the same line, the earlier
    /// source wins.
    pub sources: Vec<SourceText>,
    /// Text appended verbatim after `rules:`
    pub rules: String,
    /// Overrides the provenance comment; defaults to the source labels
    pub source_label: Option<String>,
    /// Maximum number of rejected lines kept in the report
    pub rejected_sample_limit: usize,
}

/// Builder for SubconverterConfig
#[derive(Debug, Clone)]
pub struct SubconverterConfigBuilder {
    config: SubconverterConfig,
}

impl Default for SubconverterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubconverterConfigBuilder {
    /// Create a new default builder
    pub fn new() -> Self {
        SubconverterConfigBuilder {
            config: SubconverterConfig {
                sources: Vec::new(),
                rules: String::new(),
                source_label: None,
                rejected_sample_limit: REJECTED_SAMPLE_LIMIT,
            },
        }
    }

    /// Append a source after the ones already added
    pub fn add_source(mut self, source: SourceText) -> Self {
        self.config.sources.push(source);
        self
    }

    /// Set all sources at once, in priority order
    pub fn sources(mut self, sources: Vec<SourceText>) -> Self {
        self.config.sources = sources;
        self
    }

    /// Set the rules text
    pub fn rules(mut self, rules: impl Into<String>) -> Self {
        self.config.rules = rules.into();
        self
    }

    /// Set the provenance label
    pub fn source_label(mut self, label: Option<String>) -> Self {
        self.config.source_label = label;
        self
    }

    /// Set how many rejected lines the report keeps
    pub fn rejected_sample_limit(mut self, limit: usize) -> Self {
        self.config.rejected_sample_limit = limit;
        self
    }

    pub fn build(self) -> SubconverterConfig {
        self.config
    }
}

/// Diagnostics gathered alongside the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub lines: LineStats,
    pub duplicates_removed: usize,
    pub parsed: usize,
    pub parse_failures: usize,
    /// First rejected lines with their line numbers
    pub rejected_sample: Vec<(usize, String)>,
}

/// Result of subscription conversion
#[derive(Debug, Clone)]
pub struct SubconverterResult {
    /// The generated configuration document
    pub content: String,
    /// Nodes as written, with their final names
    pub nodes: Vec<Proxy>,
    pub report: ConvertReport,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Nothing usable survived the pipeline; no document is produced
    #[error("No valid nodes found")]
    EmptyResult { report: ConvertReport },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Decodes every source and joins them in priority order.
fn merge_sources(sources: &[SourceText]) -> String {
    sources
        .iter()
        .map(|source| base64::decode(&source.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn default_label(sources: &[SourceText]) -> String {
    sources
        .iter()
        .map(|s| s.label.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses the node lines contained in `text`, skipping every line that fails.
///
/// Returns the nodes in line order, names not yet deduplicated, together with
/// the report so far.
pub fn parse_nodes(text: &str, rejected_sample_limit: usize) -> (Vec<Proxy>, ConvertReport) {
    let classified = classify(text);
    let (lines, duplicates_removed) = dedupe(classified.valid);

    let mut nodes = Vec::with_capacity(lines.len());
    let mut parse_failures = 0;
    for line in &lines {
        match explode(&line.text) {
            Ok(node) => nodes.push(node),
            Err(e) => {
                warn!("Line {} skipped: {}", line.line_no, e);
                parse_failures += 1;
            }
        }
    }

    let report = ConvertReport {
        lines: classified.stats,
        duplicates_removed,
        parsed: nodes.len(),
        parse_failures,
        rejected_sample: classified
            .invalid
            .into_iter()
            .take(rejected_sample_limit)
            .collect(),
    };
    (nodes, report)
}

/// Runs the whole conversion: decode, classify, dedupe, parse, rename and
/// generate.
pub fn subconverter(config: &SubconverterConfig) -> Result<SubconverterResult, ConvertError> {
    info!(
        "Processing conversion request with {} source(s)",
        config.sources.len()
    );

    let text = merge_sources(&config.sources);
    let (mut nodes, report) = parse_nodes(&text, config.rejected_sample_limit);
    info!(
        "{} line(s): {} recognized, {} rejected, {} duplicate(s), {} parsed, {} failed",
        report.lines.total,
        report.lines.valid,
        report.lines.invalid,
        report.duplicates_removed,
        report.parsed,
        report.parse_failures
    );

    if nodes.is_empty() {
        return Err(ConvertError::EmptyResult { report });
    }

    resolve_names(&mut nodes);

    let label = config
        .source_label
        .clone()
        .unwrap_or_else(|| default_label(&config.sources));
    debug!("Generating document for '{}'", label);
    let content = proxy_to_clash(&nodes, &config.rules, &label)?;

    Ok(SubconverterResult {
        content,
        nodes,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Scheme;
    use crate::utils::base64::base64_encode;

    #[test]
    fn test_empty_input_is_empty_result() {
        let config = SubconverterConfigBuilder::new()
            .add_source(SourceText::new("manual", "ss://abc\nnot a link\n"))
            .build();
        match subconverter(&config) {
            Err(ConvertError::EmptyResult { report }) => {
                assert_eq!(report.lines.total, 2);
                assert_eq!(report.lines.valid, 0);
                assert_eq!(report.rejected_sample.len(), 2);
            }
            other => panic!("expected EmptyResult, got {:?}", other.map(|r| r.content)),
        }
    }

    #[test]
    fn test_only_failing_lines_is_empty_result() {
        let config = SubconverterConfigBuilder::new()
            .add_source(SourceText::new("manual", "vless://no-port@h\nvmess://garbage"))
            .build();
        match subconverter(&config) {
            Err(ConvertError::EmptyResult { report }) => {
                assert_eq!(report.lines.valid, 2);
                assert_eq!(report.parse_failures, 2);
            }
            other => panic!("expected EmptyResult, got {:?}", other.map(|r| r.content)),
        }
    }

    #[test]
    fn test_sources_keep_priority_on_duplicates() {
        let manual = "vless://u@h:1#first\nhysteria2://p@h:2#hy";
        let subscription = base64_encode("hysteria2://p@h:2#hy\nvless://u@h:1#first\ntuic://u:p@h:3");
        let config = SubconverterConfigBuilder::new()
            .add_source(SourceText::new("", manual))
            .add_source(SourceText::new("https://sub.example", subscription))
            .build();

        let result = subconverter(&config).unwrap();
        let names: Vec<_> = result.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["first", "hy", "tuic_node"]);
        assert_eq!(result.report.duplicates_removed, 2);
        assert_eq!(result.report.lines.per_scheme.get(&Scheme::Tuic), Some(&1));
        assert!(result
            .content
            .starts_with("# Source Subscription: https://sub.example\n"));
    }

    #[test]
    fn test_failures_do_not_stop_later_lines() {
        let text = "vless://u@h:1#a|vless://broken|vmess://???|tuic://u:p@h:2#a|junk";
        let config = SubconverterConfigBuilder::new()
            .add_source(SourceText::new("pasted", text))
            .source_label(Some("custom".to_string()))
            .rules("  - MATCH,DIRECT\n")
            .build();

        let result = subconverter(&config).unwrap();
        let names: Vec<_> = result.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "a_1"]);
        assert_eq!(result.report.parse_failures, 2);
        assert_eq!(result.report.rejected_sample, vec![(5, "junk".to_string())]);
        assert!(result.content.starts_with("# Source Subscription: custom\n"));
        assert!(result.content.ends_with("rules:\n  - MATCH,DIRECT\n"));
    }

    #[test]
    fn test_rejected_sample_is_capped() {
        let junk: Vec<String> = (0..25).map(|i| format!("junk{}", i)).collect();
        let text = format!("{}\nvless://u@h:1", junk.join("\n"));
        let config = SubconverterConfigBuilder::new()
            .add_source(SourceText::new("", text))
            .rejected_sample_limit(3)
            .build();
        let result = subconverter(&config).unwrap();
        assert_eq!(result.report.lines.invalid, 25);
        assert_eq!(result.report.rejected_sample.len(), 3);
        assert_eq!(result.report.rejected_sample[2], (3, "junk2".to_string()));
    }
}
