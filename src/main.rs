use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use subclash::interfaces::subconverter::{
    subconverter, ConvertError, ConvertReport, SourceText, SubconverterConfigBuilder,
};
use subclash::utils::file::{file_get, file_get_optional};
use subclash::utils::http::{web_get, HttpConfig};
use subclash::Settings;

/// Convert vmess/vless/hysteria2/tuic share links into a Clash Meta configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Share links pasted directly, separated by newlines or '|'
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Subscription file to read, may be repeated
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Subscription URL to fetch, may be repeated
    #[arg(short, long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// Rules file; defaults to the rules_path setting
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Provenance label written in the leading comment
    #[arg(short, long, value_name = "LABEL")]
    label: Option<String>,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

fn collect_sources(args: &Args, settings: &Settings) -> Result<Vec<SourceText>> {
    let mut sources = Vec::new();

    if let Some(text) = &args.text {
        sources.push(SourceText::new("", text.as_str()));
    }

    for path in &args.files {
        let content =
            file_get(path).with_context(|| format!("failed to read {}", path.display()))?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        sources.push(SourceText::new(label, content));
    }

    let http = HttpConfig {
        user_agent: settings.advanced.user_agent.clone(),
        timeout: settings.advanced.fetch_timeout,
        proxy: settings.advanced.proxy.clone(),
    };
    for url in &args.urls {
        info!("Fetching subscription from {}", url);
        let content = web_get(url, &http).with_context(|| format!("failed to fetch {}", url))?;
        sources.push(SourceText::new(url.as_str(), content));
    }

    Ok(sources)
}

fn load_rules(args: &Args, settings: &Settings) -> Result<String> {
    match &args.rules {
        Some(path) => {
            file_get(path).with_context(|| format!("failed to read rules {}", path.display()))
        }
        None => {
            let path = &settings.common.rules_path;
            let rules = file_get_optional(path)
                .with_context(|| format!("failed to read rules {}", path))?;
            if rules.is_none() {
                warn!("Rules file {} not found, writing an empty rules block", path);
            }
            Ok(rules.unwrap_or_default())
        }
    }
}

fn log_rejected(report: &ConvertReport) {
    for (line_no, text) in &report.rejected_sample {
        warn!("Rejected line {}: {}", line_no, text);
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let settings = Settings::load(args.config.as_deref())?;

    let sources = collect_sources(&args, &settings)?;
    if sources.is_empty() {
        error!("No input given; use --text, --file or --url");
        return Ok(ExitCode::FAILURE);
    }

    let config = SubconverterConfigBuilder::new()
        .sources(sources)
        .rules(load_rules(&args, &settings)?)
        .source_label(args.label.clone().or(settings.common.source_label.clone()))
        .rejected_sample_limit(settings.advanced.rejected_sample_size)
        .build();

    let result = match subconverter(&config) {
        Ok(result) => result,
        Err(ConvertError::EmptyResult { report }) => {
            log_rejected(&report);
            error!("No valid nodes found");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    log_rejected(&result.report);

    match &args.output {
        Some(path) => {
            fs::write(path, &result.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                "Wrote {} node(s) to {}",
                result.nodes.len(),
                path.display()
            );
        }
        None => print!("{}", result.content),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
