//! Command-line interface for `editdist`.
//!
//! Compares a single pair of strings given as arguments, or a batch of
//! tab-separated pairs read from a file or STDIN, and prints the requested
//! edit distances as plain text, JSON, or YAML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use editdist_core::{CompareOptions, Measurement, Metric};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const VERSION_BANNER: &str = concat!("editdist version ", env!("CARGO_PKG_VERSION"));
const LOG_ENV: &str = "EDITDIST_LOG";

const AFTER_HELP: &str = r#"Metrics:
  levenshtein          insertions, deletions, substitutions (aliases: lev)
  damerau-levenshtein  adds adjacent transpositions (aliases: damerau, dl)
  hamming              positional mismatches, equal lengths only (aliases: ham)
  all                  every metric above

Examples:
  editdist kitten sitting
  editdist -m dl -m hamming teh the
  editdist -i --format json ABC abc
  printf 'ca\tabc\n' | editdist --pairs - -m all

Text rows escape tabs, newlines and backslashes in the inputs; use --format json
for the exact strings.

Logging goes to STDERR; set EDITDIST_LOG (e.g. EDITDIST_LOG=debug) or pass -v."#;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MetricSelection {
    One(Metric),
    All,
}

#[derive(Debug, Parser)]
#[command(
    name = "editdist",
    about = "Compute edit distances between strings.",
    disable_version_flag = true,
    override_usage = "editdist [OPTIONS] LEFT RIGHT\n       editdist [OPTIONS] --pairs FILE",
    after_help = AFTER_HELP
)]
struct Cli {
    #[arg(long = "version", action = ArgAction::SetTrue, hide = true)]
    version: bool,

    /// Metric to compute; may be repeated. Defaults to levenshtein.
    #[arg(
        short = 'm',
        long = "metric",
        value_parser = parse_metric_selection,
        action = ArgAction::Append
    )]
    metrics: Vec<MetricSelection>,

    /// Fold case before comparing.
    #[arg(
        short = 'i',
        long = "ignore-case",
        action = ArgAction::SetTrue,
        conflicts_with = "case_sensitive"
    )]
    ignore_case: bool,

    /// Compare without case folding (the default; overrides --opts).
    #[arg(long = "case-sensitive", action = ArgAction::SetTrue)]
    case_sensitive: bool,

    /// JSON object of comparison options, e.g. '{"case_sensitive":false}'.
    #[arg(long = "opts")]
    opts: Option<String>,

    /// Read tab-separated pairs, one per line, from FILE ("-" for STDIN).
    #[arg(long = "pairs", conflicts_with = "inputs")]
    pairs: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write output to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// The two strings to compare (LEFT RIGHT).
    #[arg()]
    inputs: Vec<String>,
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err:#}");
            std::process::exit(1);
        }
    }
}

fn try_main() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.version {
        println!("{VERSION_BANNER}");
        return Ok(0);
    }

    let options = build_options(&cli)?;
    let metrics = expand_metrics(&cli.metrics);
    let pairs = match &cli.pairs {
        Some(path) => parse_pairs(&read_pairs_source(path)?)?,
        None => match cli.inputs.as_slice() {
            [left, right] => vec![Pair { left: left.clone(), right: right.clone() }],
            _ => bail!("expected exactly two strings to compare (or --pairs FILE); see --help"),
        },
    };
    debug!(pairs = pairs.len(), ?metrics, case_sensitive = options.case_sensitive(), "comparing");

    let records = measure_all(&pairs, &metrics, &options)?;
    let rendered = render(&records, cli.format)?;

    if let Some(path) = &cli.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output to {}", path.display()))?;
    } else {
        print!("{rendered}");
        io::stdout().flush().ok();
    }

    Ok(0)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_metric_selection(raw: &str) -> Result<MetricSelection, String> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(MetricSelection::All);
    }
    raw.parse::<Metric>().map(MetricSelection::One).map_err(|err| err.to_string())
}

fn expand_metrics(selections: &[MetricSelection]) -> Vec<Metric> {
    if selections.is_empty() {
        return vec![Metric::default()];
    }
    let mut metrics = Vec::new();
    for selection in selections {
        let chosen: &[Metric] = match selection {
            MetricSelection::One(metric) => std::slice::from_ref(metric),
            MetricSelection::All => &Metric::ALL,
        };
        for metric in chosen {
            if !metrics.contains(metric) {
                metrics.push(*metric);
            }
        }
    }
    metrics
}

fn build_options(cli: &Cli) -> Result<CompareOptions> {
    let mut options = match &cli.opts {
        Some(raw) => parse_opts_json(raw)?,
        None => CompareOptions::default(),
    };
    if cli.ignore_case {
        options = options.with_case_sensitive(false);
    }
    if cli.case_sensitive {
        options = options.with_case_sensitive(true);
    }
    Ok(options)
}

fn parse_opts_json(raw: &str) -> Result<CompareOptions> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("--opts requires a JSON object"));
    }
    let value: Value = serde_json::from_str(trimmed)
        .with_context(|| format!("failed to parse --opts JSON: {trimmed}"))?;
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .with_context(|| format!("invalid --opts JSON: {trimmed}")),
        other => Err(anyhow!("--opts expects a JSON object, but received {other}")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair {
    left: String,
    right: String,
}

fn read_pairs_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("failed to read pairs from STDIN")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn parse_pairs(text: &str) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((left, right)) = line.split_once('\t') else {
            bail!("line {}: expected two tab-separated strings", index + 1);
        };
        if right.contains('\t') {
            bail!("line {}: expected exactly one tab separator", index + 1);
        }
        pairs.push(Pair { left: left.to_string(), right: right.to_string() });
    }
    if pairs.is_empty() {
        bail!("no pairs to compare");
    }
    Ok(pairs)
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    left: &'a str,
    right: &'a str,
    #[serde(flatten)]
    measurement: Measurement,
}

fn measure_all<'a>(
    pairs: &'a [Pair],
    metrics: &[Metric],
    options: &CompareOptions,
) -> Result<Vec<Record<'a>>> {
    let mut records = Vec::with_capacity(pairs.len() * metrics.len());
    for (index, pair) in pairs.iter().enumerate() {
        for metric in metrics {
            let measurement = metric
                .measure(&pair.left, &pair.right, options)
                .with_context(|| format!("pair {}: {metric} failed", index + 1))?;
            records.push(Record { left: &pair.left, right: &pair.right, measurement });
        }
    }
    Ok(records)
}

fn render(records: &[Record<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => {
            let mut rendered =
                serde_json::to_string_pretty(records).context("failed to serialize JSON")?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Yaml => serde_yaml::to_string(records).context("failed to serialize YAML"),
    }
}

fn render_text(records: &[Record<'_>]) -> String {
    if let [only] = records {
        return format!("{}\n", only.measurement.distance);
    }
    let mut rendered = String::new();
    for record in records {
        rendered.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            record.measurement.metric,
            escape_field(record.left),
            escape_field(record.right),
            record.measurement.distance
        ));
    }
    rendered
}

/// Escapes the characters that would break a tab-separated row.
fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
