use std::collections::BTreeMap;

use super::model::{Sentiment, TweetRecord};
use super::words::{word_frequencies, WordWeight};

// ---------------------------------------------------------------------------
// Metrics – the four headline numbers
// ---------------------------------------------------------------------------

/// Headline metrics of a filtered subset.
///
/// There is deliberately no neutral percentage: `positive_pct +
/// negative_pct` only reaches 100 when the subset has no neutral tweets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub total_count: usize,
    /// Mean `vader_score`; 0.0 for an empty subset.
    pub avg_sentiment_score: f64,
    pub positive_pct: f64,
    pub negative_pct: f64,
}

pub fn aggregate(subset: &[&TweetRecord]) -> Metrics {
    let total_count = subset.len();
    if total_count == 0 {
        return Metrics::default();
    }

    let n = total_count as f64;
    let score_sum: f64 = subset.iter().map(|t| t.vader_score).sum();
    let share = |sentiment: Sentiment| {
        let hits = subset
            .iter()
            .filter(|t| t.airline_sentiment == sentiment)
            .count();
        100.0 * hits as f64 / n
    };

    Metrics {
        total_count,
        avg_sentiment_score: score_sum / n,
        positive_pct: share(Sentiment::Positive),
        negative_pct: share(Sentiment::Negative),
    }
}

// ---------------------------------------------------------------------------
// Visualization summaries
// ---------------------------------------------------------------------------

/// Count per sentiment. Always holds all three labels; iteration follows
/// display order (positive, neutral, negative).
pub type SentimentCounts = BTreeMap<Sentiment, usize>;

pub fn sentiment_counts(subset: &[&TweetRecord]) -> SentimentCounts {
    let mut counts: SentimentCounts = Sentiment::ALL.into_iter().map(|s| (s, 0)).collect();
    for tweet in subset {
        *counts.entry(tweet.airline_sentiment).or_insert(0) += 1;
    }
    counts
}

/// Percentage share of each sentiment present in the subset.
///
/// Absent labels are omitted. Sorted by count descending, display order
/// breaking ties.
pub fn sentiment_proportions(subset: &[&TweetRecord]) -> Vec<(Sentiment, f64)> {
    if subset.is_empty() {
        return Vec::new();
    }
    let n = subset.len() as f64;

    let mut present: Vec<(Sentiment, usize)> = sentiment_counts(subset)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    // Stable sort keeps display order among equal counts.
    present.sort_by(|a, b| b.1.cmp(&a.1));

    present
        .into_iter()
        .map(|(sentiment, count)| (sentiment, 100.0 * count as f64 / n))
        .collect()
}

/// All tweet bodies joined by single spaces, in subset order.
pub fn word_corpus(subset: &[&TweetRecord]) -> String {
    subset
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// DashboardSummary – everything the UI draws for one filter selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    pub metrics: Metrics,
    pub counts: SentimentCounts,
    pub proportions: Vec<(Sentiment, f64)>,
    pub words: Vec<WordWeight>,
}

impl DashboardSummary {
    pub fn compute(subset: &[&TweetRecord], max_words: usize) -> Self {
        Self {
            metrics: aggregate(subset),
            counts: sentiment_counts(subset),
            proportions: sentiment_proportions(subset),
            words: word_frequencies(&word_corpus(subset), max_words),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter;
    use crate::data::model::{SentimentOption, TweetDataset};

    const EPS: f64 = 1e-9;

    fn tweet(airline: &str, sentiment: Sentiment, score: f64, text: &str) -> TweetRecord {
        TweetRecord {
            airline: airline.to_string(),
            airline_sentiment: sentiment,
            vader_score: score,
            text: text.to_string(),
        }
    }

    fn scenario() -> TweetDataset {
        TweetDataset::from_tweets(vec![
            tweet("Delta", Sentiment::Positive, 0.8, "great flight"),
            tweet("Delta", Sentiment::Negative, -0.6, "bad delay"),
            tweet("United", Sentiment::Neutral, 0.0, "ok trip"),
        ])
    }

    fn mixed() -> Vec<TweetRecord> {
        vec![
            tweet("A", Sentiment::Negative, -0.5, "late"),
            tweet("A", Sentiment::Neutral, 0.0, "fine"),
            tweet("A", Sentiment::Negative, -0.9, "lost bag"),
            tweet("A", Sentiment::Positive, 0.7, "thanks"),
            tweet("A", Sentiment::Negative, -0.2, "meh"),
        ]
    }

    #[test]
    fn delta_scenario_metrics() {
        let ds = scenario();
        let subset = filter(&ds, "Delta", SentimentOption::All);
        assert_eq!(subset.len(), 2);

        let m = aggregate(&subset);
        assert_eq!(m.total_count, 2);
        assert!((m.avg_sentiment_score - 0.1).abs() < EPS);
        assert!((m.positive_pct - 50.0).abs() < EPS);
        assert!((m.negative_pct - 50.0).abs() < EPS);
    }

    #[test]
    fn united_positive_scenario_is_all_zero() {
        let ds = scenario();
        let subset = filter(&ds, "United", SentimentOption::Positive);
        assert!(subset.is_empty());
        assert_eq!(aggregate(&subset), Metrics::default());
        assert_eq!(word_corpus(&subset), "");
    }

    #[test]
    fn empty_subset_never_fails() {
        let subset: Vec<&TweetRecord> = Vec::new();
        let m = aggregate(&subset);
        assert_eq!(m.total_count, 0);
        assert_eq!(m.avg_sentiment_score, 0.0);
        assert_eq!(m.positive_pct, 0.0);
        assert_eq!(m.negative_pct, 0.0);

        let counts = sentiment_counts(&subset);
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c == 0));
        assert!(sentiment_proportions(&subset).is_empty());

        let summary = DashboardSummary::compute(&subset, 50);
        assert!(summary.is_empty());
        assert!(summary.words.is_empty());
    }

    #[test]
    fn neutral_rows_keep_percentages_below_hundred() {
        let rows = mixed();
        let subset: Vec<&TweetRecord> = rows.iter().collect();
        let m = aggregate(&subset);
        assert!((m.positive_pct - 20.0).abs() < EPS);
        assert!((m.negative_pct - 60.0).abs() < EPS);
        assert!(m.positive_pct + m.negative_pct < 100.0);

        let without_neutral: Vec<&TweetRecord> = rows
            .iter()
            .filter(|t| t.airline_sentiment != Sentiment::Neutral)
            .collect();
        let m = aggregate(&without_neutral);
        assert!((m.positive_pct + m.negative_pct - 100.0).abs() < EPS);
    }

    #[test]
    fn counts_sum_to_total_in_display_order() {
        let rows = mixed();
        let subset: Vec<&TweetRecord> = rows.iter().collect();
        let counts = sentiment_counts(&subset);

        assert_eq!(counts.values().sum::<usize>(), aggregate(&subset).total_count);
        let order: Vec<Sentiment> = counts.keys().copied().collect();
        assert_eq!(order, Sentiment::ALL.to_vec());
        assert_eq!(counts[&Sentiment::Negative], 3);
    }

    #[test]
    fn proportions_cover_present_labels_only() {
        let rows = mixed();
        let subset: Vec<&TweetRecord> = rows.iter().collect();
        let props = sentiment_proportions(&subset);

        let total: f64 = props.iter().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < EPS);
        assert_eq!(props[0].0, Sentiment::Negative);
        // Positive and neutral tie at one tweet each; display order decides.
        assert_eq!(props[1].0, Sentiment::Positive);
        assert_eq!(props[2].0, Sentiment::Neutral);

        let ds = scenario();
        let delta = filter(&ds, "Delta", SentimentOption::All);
        let props = sentiment_proportions(&delta);
        assert_eq!(props.len(), 2);
        assert!(props.iter().all(|(s, _)| *s != Sentiment::Neutral));
    }

    #[test]
    fn corpus_joins_texts_in_order() {
        let ds = scenario();
        let delta = filter(&ds, "Delta", SentimentOption::All);
        assert_eq!(word_corpus(&delta), "great flight bad delay");
    }

    #[test]
    fn summary_bundles_every_stage() {
        let ds = scenario();
        let delta = filter(&ds, "Delta", SentimentOption::All);
        let summary = DashboardSummary::compute(&delta, 50);

        assert_eq!(summary.metrics.total_count, 2);
        assert_eq!(summary.counts[&Sentiment::Positive], 1);
        assert_eq!(summary.proportions.len(), 2);
        let words: Vec<&str> = summary.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["bad", "delay", "flight", "great"]);
    }
}
