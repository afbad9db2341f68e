use std::path::Path;
use std::sync::Arc;

use airline_sentiment_dashboard::data::model::Sentiment;
use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const AIRLINES: [&str; 6] = [
    "Virgin America",
    "United",
    "Southwest",
    "Delta",
    "US Airways",
    "American",
];

const POSITIVE_TEXT: &[&str] = &[
    "thanks for the great flight crew was awesome",
    "love the new seats and friendly service",
    "smooth boarding and early arrival thank you",
    "best customer service rebooked me quickly",
    "great view from the window seat amazing trip",
];

const NEUTRAL_TEXT: &[&str] = &[
    "what time does the gate open for boarding",
    "is there wifi on the flight to Chicago",
    "need to change my reservation for tomorrow",
    "checking baggage allowance for international flight",
    "flight status update please",
];

const NEGATIVE_TEXT: &[&str] = &[
    "flight delayed again and no updates from the gate",
    "lost my bag and customer service put me on hold",
    "cancelled flight and no rebooking terrible service",
    "rude crew and late departure worst experience",
    "hours on hold still no refund for cancelled flight",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Debug, Serialize)]
struct SampleTweet {
    airline: String,
    airline_sentiment: String,
    vader_score: f64,
    text: String,
}

/// Roughly the label mix of the public airline tweet set: mostly negative.
fn draw_sentiment(rng: &mut SimpleRng) -> Sentiment {
    let u = rng.next_f64();
    if u < 0.62 {
        Sentiment::Negative
    } else if u < 0.83 {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

fn generate(rng: &mut SimpleRng, n: usize) -> Vec<SampleTweet> {
    (0..n)
        .map(|_| {
            let airline = *rng.pick(&AIRLINES);
            let sentiment = draw_sentiment(rng);
            let (texts, lo, hi) = match sentiment {
                Sentiment::Positive => (POSITIVE_TEXT, 0.3, 0.98),
                Sentiment::Neutral => (NEUTRAL_TEXT, -0.1, 0.1),
                Sentiment::Negative => (NEGATIVE_TEXT, -0.95, -0.2),
            };
            let score = (rng.uniform(lo, hi) * 10_000.0).round() / 10_000.0;
            SampleTweet {
                airline: airline.to_string(),
                airline_sentiment: sentiment.as_str().to_string(),
                vader_score: score,
                text: rng.pick(texts).to_string(),
            }
        })
        .collect()
}

fn write_csv(path: &Path, tweets: &[SampleTweet]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for tweet in tweets {
        writer.serialize(tweet)?;
    }
    writer.flush()?;
    Ok(())
}

fn to_batch(tweets: &[SampleTweet]) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("airline", DataType::Utf8, false),
        Field::new("airline_sentiment", DataType::Utf8, false),
        Field::new("vader_score", DataType::Float64, false),
        Field::new("text", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(tweets.iter().map(|t| t.airline.as_str()))),
            Arc::new(StringArray::from_iter_values(
                tweets.iter().map(|t| t.airline_sentiment.as_str()),
            )),
            Arc::new(Float64Array::from_iter_values(tweets.iter().map(|t| t.vader_score))),
            Arc::new(StringArray::from_iter_values(tweets.iter().map(|t| t.text.as_str()))),
        ],
    )
    .context("building record batch")?;
    Ok(batch)
}

fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let tweets = generate(&mut rng, 1200);

    let out_dir = Path::new("Data");
    std::fs::create_dir_all(out_dir).context("creating Data directory")?;

    let csv_path = out_dir.join("Cleaned_Tweets.csv");
    write_csv(&csv_path, &tweets)?;

    let batch = to_batch(&tweets)?;
    let parquet_path = out_dir.join("Cleaned_Tweets.parquet");
    write_parquet(&parquet_path, &batch)?;

    println!("{}", pretty_format_batches(&[batch.slice(0, 5)])?);
    println!(
        "Wrote {} tweets for {} airlines to {} and {}",
        tweets.len(),
        AIRLINES.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
