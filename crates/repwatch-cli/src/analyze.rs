//! Command handlers for offline batch analysis.

use std::path::Path;

use clap::ValueEnum;
use repwatch_analysis::{BatchProcessor, BatchRequest, ProcessOutcome, SentimentAnalyzer};
use repwatch_core::{AppConfig, Mention};
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputFormat {
    Auto,
    Json,
    Csv,
}

impl InputFormat {
    /// Resolve `Auto` from the file extension.
    #[must_use]
    pub(crate) fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_csv = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    Self::Csv
                } else {
                    Self::Json
                }
            }
            other => other,
        }
    }
}

/// One row of the scraper's monitoring export. Cells are kept as text; `url` and
/// `engagement` travel on as mention metadata.
#[derive(Debug, Deserialize)]
struct ScraperRow {
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    engagement: Option<String>,
    #[serde(default)]
    brand: Option<String>,
}

impl ScraperRow {
    fn into_mention(self, index: usize) -> Mention {
        let mut metadata = Map::new();
        if let Some(url) = self.url {
            metadata.insert("url".to_string(), Value::String(url));
        }
        if let Some(engagement) = self.engagement {
            let value = match engagement.trim().parse::<i64>() {
                Ok(count) => Value::from(count),
                Err(_) => Value::String(engagement),
            };
            metadata.insert("engagement".to_string(), value);
        }
        Mention {
            id: Some(format!("row-{}", index + 1)),
            platform: self.platform,
            author: self.author,
            text: self.text.unwrap_or_default(),
            created_at: self.date,
            metadata: (!metadata.is_empty()).then_some(metadata),
        }
    }
}

/// Command-line values that take precedence over the input file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub brand: Option<String>,
    pub historical_ratio: Option<f64>,
    pub historical_window: Option<i64>,
}

/// Parse a batch request object or a bare array of mention records, then apply
/// the command-line overrides.
///
/// # Errors
///
/// Returns an error if `raw` is not valid JSON of either shape.
pub(crate) fn parse_request(raw: &str, overrides: Overrides) -> anyhow::Result<BatchRequest> {
    let value: Value = serde_json::from_str(raw)?;
    let request = if value.is_array() {
        let mentions: Vec<Mention> = serde_json::from_value(value)?;
        BatchRequest {
            mentions,
            ..BatchRequest::default()
        }
    } else {
        serde_json::from_value::<BatchRequest>(value)?
    };
    Ok(apply_overrides(request, overrides))
}

fn apply_overrides(mut request: BatchRequest, overrides: Overrides) -> BatchRequest {
    if overrides.brand.is_some() {
        request.brand = overrides.brand;
    }
    if overrides.historical_ratio.is_some() {
        request.historical_negative_ratio = overrides.historical_ratio;
        request.historical_window_size = overrides.historical_window;
    }
    request
}

/// Parse scraper CSV rows (`platform, author, text, date, url, engagement, brand`) into a
/// batch, then apply the command-line overrides. Missing columns are allowed; a row
/// without text is dropped by the pipeline like any other empty mention. The first
/// non-empty `brand` cell names the brand unless `--brand` is given.
///
/// # Errors
///
/// Returns an error if a row cannot be read as CSV.
pub(crate) fn parse_csv_request(raw: &str, overrides: Overrides) -> anyhow::Result<BatchRequest> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(raw.as_bytes());

    let mut brand = None;
    let mut mentions = Vec::new();
    for (index, row) in reader.deserialize::<ScraperRow>().enumerate() {
        let mut row =
            row.map_err(|e| anyhow::anyhow!("failed to parse CSV row {}: {e}", index + 1))?;
        if brand.is_none() {
            brand = row.brand.take().filter(|b| !b.trim().is_empty());
        }
        mentions.push(row.into_mention(index));
    }

    let request = BatchRequest {
        brand,
        mentions,
        ..BatchRequest::default()
    };
    Ok(apply_overrides(request, overrides))
}

/// Same envelope the HTTP service returns, minus request metadata.
pub(crate) fn envelope(outcome: &ProcessOutcome) -> anyhow::Result<Value> {
    Ok(match outcome {
        ProcessOutcome::Processed(result) => json!({
            "status": "ok",
            "data": serde_json::to_value(result)?,
        }),
        ProcessOutcome::NoMentions => json!({
            "status": "ok",
            "message": "no mentions provided",
            "data": {},
        }),
    })
}

/// Analyze the batch in `input` and print the response envelope to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the batch fails validation.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    input: &Path,
    format: InputFormat,
    overrides: Overrides,
    pretty: bool,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))?;
    let format = format.resolve(input);
    let request = match format {
        InputFormat::Csv => parse_csv_request(&raw, overrides)?,
        InputFormat::Json | InputFormat::Auto => parse_request(&raw, overrides)?,
    };
    tracing::info!(
        input = %input.display(),
        format = ?format,
        mentions = request.mentions.len(),
        "analyzing batch"
    );

    let processor = BatchProcessor::from_app_config(config)?;
    let outcome = processor.process(request).await?;
    print_json(&envelope(&outcome)?, pretty)
}

/// Print the scorer output for one text.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized.
pub(crate) fn run_score(text: &str) -> anyhow::Result<()> {
    let sentiment = SentimentAnalyzer::new().analyze(text);
    print_json(&serde_json::to_value(sentiment)?, true)
}

fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
