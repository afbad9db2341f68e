use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Sentiment – the precomputed polarity label of a tweet
// ---------------------------------------------------------------------------

/// Sentiment label stored in the `airline_sentiment` column.
///
/// Variant order is the display order used by every ordered rendering
/// (positive, neutral, negative), so `Ord` can be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Lowercase label as stored in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Capitalised label for chart legends.
    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known sentiment labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSentiment(pub String);

impl fmt::Display for UnknownSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sentiment '{}' (expected positive, neutral or negative)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSentiment {}

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Sentiment::ALL
            .into_iter()
            .find(|sent| sent.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSentiment(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SentimentOption – the value of the sentiment radio group
// ---------------------------------------------------------------------------

/// Second-stage filter choice. `All` disables the sentiment filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentOption {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl SentimentOption {
    /// Options in the order the radio group shows them.
    pub const ALL: [SentimentOption; 4] = [
        SentimentOption::All,
        SentimentOption::Positive,
        SentimentOption::Negative,
        SentimentOption::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SentimentOption::All => "All",
            SentimentOption::Positive => "Positive",
            SentimentOption::Negative => "Negative",
            SentimentOption::Neutral => "Neutral",
        }
    }

    /// The sentiment this option restricts to, or `None` for `All`.
    pub fn sentiment(self) -> Option<Sentiment> {
        match self {
            SentimentOption::All => None,
            SentimentOption::Positive => Some(Sentiment::Positive),
            SentimentOption::Negative => Some(Sentiment::Negative),
            SentimentOption::Neutral => Some(Sentiment::Neutral),
        }
    }
}

impl FromStr for SentimentOption {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SentimentOption::All);
        }
        Ok(match s.parse::<Sentiment>()? {
            Sentiment::Positive => SentimentOption::Positive,
            Sentiment::Neutral => SentimentOption::Neutral,
            Sentiment::Negative => SentimentOption::Negative,
        })
    }
}

// ---------------------------------------------------------------------------
// TweetRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single tweet with its precomputed sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetRecord {
    pub airline: String,
    pub airline_sentiment: Sentiment,
    /// VADER compound score in [-1, 1].
    pub vader_score: f64,
    pub text: String,
}

// ---------------------------------------------------------------------------
// TweetDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TweetDataset {
    /// All tweets in source order.
    pub tweets: Vec<TweetRecord>,
    /// Distinct airline names in order of first appearance.
    pub airlines: Vec<String>,
}

impl TweetDataset {
    /// Build the airline index from the loaded tweets.
    pub fn from_tweets(tweets: Vec<TweetRecord>) -> Self {
        let mut airlines: Vec<String> = Vec::new();
        for tweet in &tweets {
            if !airlines.iter().any(|a| a == &tweet.airline) {
                airlines.push(tweet.airline.clone());
            }
        }
        TweetDataset { tweets, airlines }
    }

    /// Number of tweets.
    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    /// The airline selected when the dashboard opens.
    pub fn default_airline(&self) -> Option<&str> {
        self.airlines.first().map(String::as_str)
    }
}
