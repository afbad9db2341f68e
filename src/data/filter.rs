use super::model::{SentimentOption, TweetDataset, TweetRecord};

// ---------------------------------------------------------------------------
// Filter selection: airline first, then optional sentiment
// ---------------------------------------------------------------------------

/// Current values of the two dashboard controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub airline: String,
    pub sentiment: SentimentOption,
}

/// Initialise a [`FilterState`] with the first airline and no sentiment filter.
pub fn init_filter_state(dataset: &TweetDataset) -> FilterState {
    FilterState {
        airline: dataset.default_airline().unwrap_or_default().to_string(),
        sentiment: SentimentOption::All,
    }
}

/// Return indices of tweets that pass the filters, in dataset order.
///
/// A tweet passes when:
/// * its `airline` equals the selected airline exactly (case-sensitive)
/// * the option is `All`, or its sentiment equals the selected one
///
/// An airline that is not in the dataset matches nothing.
pub fn filtered_indices(dataset: &TweetDataset, filters: &FilterState) -> Vec<usize> {
    let wanted = filters.sentiment.sentiment();
    dataset
        .tweets
        .iter()
        .enumerate()
        .filter(|(_, tweet)| tweet.airline == filters.airline)
        .filter(|(_, tweet)| wanted.map_or(true, |s| tweet.airline_sentiment == s))
        .map(|(i, _)| i)
        .collect()
}

/// Borrow the tweets that pass the filters, preserving dataset order.
pub fn filter<'a>(
    dataset: &'a TweetDataset,
    airline: &str,
    option: SentimentOption,
) -> Vec<&'a TweetRecord> {
    let filters = FilterState {
        airline: airline.to_string(),
        sentiment: option,
    };
    select(dataset, &filtered_indices(dataset, &filters))
}

/// Resolve cached indices back into records.
pub fn select<'a>(dataset: &'a TweetDataset, indices: &[usize]) -> Vec<&'a TweetRecord> {
    indices.iter().filter_map(|&i| dataset.tweets.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sentiment;

    fn tweet(airline: &str, sentiment: Sentiment, text: &str) -> TweetRecord {
        TweetRecord {
            airline: airline.to_string(),
            airline_sentiment: sentiment,
            vader_score: 0.0,
            text: text.to_string(),
        }
    }

    fn sample() -> TweetDataset {
        TweetDataset::from_tweets(vec![
            tweet("Delta", Sentiment::Positive, "a"),
            tweet("United", Sentiment::Neutral, "b"),
            tweet("Delta", Sentiment::Negative, "c"),
            tweet("Delta", Sentiment::Neutral, "d"),
            tweet("delta", Sentiment::Positive, "e"),
            tweet("Delta", Sentiment::Positive, "f"),
        ])
    }

    fn texts(rows: &[&TweetRecord]) -> Vec<String> {
        rows.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn all_keeps_every_row_of_the_airline_in_order() {
        let ds = sample();
        let rows = filter(&ds, "Delta", SentimentOption::All);
        assert_eq!(texts(&rows), vec!["a", "c", "d", "f"]);
    }

    #[test]
    fn airline_match_is_case_sensitive() {
        let ds = sample();
        let rows = filter(&ds, "delta", SentimentOption::All);
        assert_eq!(texts(&rows), vec!["e"]);
    }

    #[test]
    fn sentiment_stage_narrows_the_airline_stage() {
        let ds = sample();
        let rows = filter(&ds, "Delta", SentimentOption::Positive);
        assert_eq!(texts(&rows), vec!["a", "f"]);
    }

    #[test]
    fn sentiment_options_partition_all() {
        let ds = sample();
        for airline in &ds.airlines {
            let all = filtered_indices(
                &ds,
                &FilterState {
                    airline: airline.clone(),
                    sentiment: SentimentOption::All,
                },
            );

            let mut union: Vec<usize> = Vec::new();
            for option in [
                SentimentOption::Positive,
                SentimentOption::Negative,
                SentimentOption::Neutral,
            ] {
                let part = filtered_indices(
                    &ds,
                    &FilterState {
                        airline: airline.clone(),
                        sentiment: option,
                    },
                );
                for i in &part {
                    assert!(all.contains(i));
                    assert!(!union.contains(i), "row {i} matched two options");
                }
                union.extend(part);
            }
            union.sort_unstable();
            assert_eq!(union, all);
        }
    }

    #[test]
    fn unknown_airline_gives_empty_subset() {
        let ds = sample();
        assert!(filter(&ds, "Lufthansa", SentimentOption::All).is_empty());
    }

    #[test]
    fn no_match_for_option_gives_empty_subset() {
        let ds = sample();
        assert!(filter(&ds, "United", SentimentOption::Positive).is_empty());
    }

    #[test]
    fn init_state_selects_first_airline() {
        let ds = sample();
        let state = init_filter_state(&ds);
        assert_eq!(state.airline, "Delta");
        assert_eq!(state.sentiment, SentimentOption::All);
    }
}
