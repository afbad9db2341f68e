use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, AsArray, Float32Array, Float64Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::DataLoadError;
use super::model::{Sentiment, TweetDataset, TweetRecord};

/// Columns every source must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["airline", "airline_sentiment", "vader_score", "text"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the tweet dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row containing at least the required columns
/// * `.json`    – `[{ "airline": ..., "airline_sentiment": ..., ... }, ...]`
/// * `.parquet` – flat table with the required columns
pub fn load_file(path: &Path) -> Result<TweetDataset, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} tweets for {} airlines from {}",
        dataset.len(),
        dataset.airlines.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Session cache
// ---------------------------------------------------------------------------

/// Keeps every dataset loaded during the session, keyed by canonical path.
///
/// A second `load` of the same source hands back the same `Arc` and never
/// touches storage again.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<TweetDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<Arc<TweetDataset>, DataLoadError> {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if let Some(dataset) = self.entries.get(&key) {
            log::debug!("Dataset cache hit for {}", key.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_file(path)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of distinct sources loaded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Row validation shared by all formats
// ---------------------------------------------------------------------------

fn build_record(
    row: usize,
    airline: String,
    sentiment: &str,
    score: Option<f64>,
    text: Option<String>,
) -> Result<TweetRecord, DataLoadError> {
    let airline_sentiment = sentiment
        .parse::<Sentiment>()
        .map_err(|e| DataLoadError::invalid_row(row, e.to_string()))?;

    let vader_score = score.ok_or_else(|| DataLoadError::invalid_row(row, "missing vader_score"))?;
    if !vader_score.is_finite() {
        return Err(DataLoadError::invalid_row(
            row,
            format!("vader_score {vader_score} is not finite"),
        ));
    }

    Ok(TweetRecord {
        airline,
        airline_sentiment,
        vader_score,
        text: text.unwrap_or_default(),
    })
}

fn finish(tweets: Vec<TweetRecord>) -> TweetDataset {
    let out_of_range = tweets
        .iter()
        .filter(|t| !(-1.0..=1.0).contains(&t.vader_score))
        .count();
    if out_of_range > 0 {
        log::warn!("{out_of_range} rows have a vader_score outside [-1, 1]");
    }
    TweetDataset::from_tweets(tweets)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvTweet {
    airline: String,
    airline_sentiment: String,
    vader_score: Option<f64>,
    text: Option<String>,
}

/// CSV layout: header row with column names, one tweet per record.
fn load_csv(path: &Path) -> Result<TweetDataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut tweets = Vec::new();
    for (row, result) in reader.deserialize::<CsvTweet>().enumerate() {
        let raw = result.map_err(|e| DataLoadError::invalid_row(row, e.to_string()))?;
        tweets.push(build_record(
            row,
            raw.airline,
            &raw.airline_sentiment,
            raw.vader_score,
            raw.text,
        )?);
    }

    Ok(finish(tweets))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "airline": "Delta", "airline_sentiment": "positive",
///     "vader_score": 0.8, "text": "great flight" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<TweetDataset, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root
        .as_array()
        .ok_or_else(|| DataLoadError::invalid_row(0, "expected a top-level JSON array"))?;

    if let Some(first) = records.first().and_then(JsonValue::as_object) {
        for column in REQUIRED_COLUMNS {
            if !first.contains_key(column) {
                return Err(DataLoadError::MissingColumn(column));
            }
        }
    }

    let mut tweets = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataLoadError::invalid_row(row, "not a JSON object"))?;

        let airline = json_string(obj.get("airline"))
            .ok_or_else(|| DataLoadError::invalid_row(row, "missing or invalid 'airline'"))?;
        let sentiment = json_string(obj.get("airline_sentiment")).ok_or_else(|| {
            DataLoadError::invalid_row(row, "missing or invalid 'airline_sentiment'")
        })?;
        let score = obj.get("vader_score").and_then(JsonValue::as_f64);
        let text = json_string(obj.get("text"));

        tweets.push(build_record(row, airline, &sentiment, score, text)?);
    }

    Ok(finish(tweets))
}

fn json_string(val: Option<&JsonValue>) -> Option<String> {
    match val? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the required columns.
///
/// String columns may be `Utf8` or `LargeUtf8`; `vader_score` may be
/// `Float64`, `Float32` or `Int64`. Works with files written by both
/// **Pandas** (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<TweetDataset, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let schema = builder.schema().clone();
    let mut indices = [0usize; 4];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = schema
            .index_of(column)
            .map_err(|_| DataLoadError::MissingColumn(column))?;
    }
    let [airline_idx, sentiment_idx, score_idx, text_idx] = indices;

    let reader = builder.build()?;
    let mut tweets = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let airline_col = batch.column(airline_idx);
        let sentiment_col = batch.column(sentiment_idx);
        let score_col = batch.column(score_idx);
        let text_col = batch.column(text_idx);

        for i in 0..batch.num_rows() {
            let row = tweets.len();
            let airline = string_value(airline_col, i)
                .ok_or_else(|| DataLoadError::invalid_row(row, "missing or invalid 'airline'"))?;
            let sentiment = string_value(sentiment_col, i).ok_or_else(|| {
                DataLoadError::invalid_row(row, "missing or invalid 'airline_sentiment'")
            })?;
            let score = float_value(score_col, i);
            let text = string_value(text_col, i);

            tweets.push(build_record(row, airline, &sentiment, score, text)?);
        }
    }

    Ok(finish(tweets))
}

// -- Parquet / Arrow helpers --

/// Read a string cell from a Utf8 or LargeUtf8 column.
fn string_value(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col.as_string_opt::<i32>().map(|s| s.value(row).to_string()),
        DataType::LargeUtf8 => col.as_string_opt::<i64>().map(|s| s.value(row).to_string()),
        _ => None,
    }
}

/// Read a numeric cell as `f64`.
fn float_value(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Some(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Some(arr.value(row) as f64)
    } else {
        any.downcast_ref::<Int64Array>().map(|arr| arr.value(row) as f64)
    }
}
