use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::error::DataLoadError;
use crate::data::filter::{filtered_indices, init_filter_state, select, FilterState};
use crate::data::loader::DatasetCache;
use crate::data::model::{SentimentOption, TweetDataset, TweetRecord};
use crate::data::stats::DashboardSummary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Every dataset loaded this session.
    cache: DatasetCache,

    /// Dataset currently shown. Never mutated after load.
    pub dataset: Arc<TweetDataset>,

    /// File the current dataset came from.
    pub source: PathBuf,

    /// Airline and sentiment selections.
    pub filters: FilterState,

    /// Indices of tweets passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Results of the last recomputation.
    pub summary: DashboardSummary,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the configured dataset. Failure here is fatal to the session.
    pub fn load(config: DashboardConfig) -> Result<Self, DataLoadError> {
        let mut cache = DatasetCache::new();
        let source = config.data_path.clone();
        let dataset = cache.load(&source)?;

        let mut state = Self {
            config,
            cache,
            dataset: Arc::new(TweetDataset::default()),
            source: PathBuf::new(),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            summary: DashboardSummary::default(),
            status_message: None,
        };
        state.set_dataset(dataset, source);
        Ok(state)
    }

    /// Ingest a dataset, reset filters to their defaults and recompute.
    pub fn set_dataset(&mut self, dataset: Arc<TweetDataset>, source: PathBuf) {
        self.filters = init_filter_state(&dataset);
        self.dataset = dataset;
        self.source = source;
        self.status_message = None;
        self.refilter();
    }

    /// Switch to another data file. On failure the current dataset stays.
    pub fn open(&mut self, path: &Path) {
        match self.cache.load(path) {
            Ok(dataset) => self.set_dataset(dataset, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Run filter → aggregate → summaries for the current selection.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        let subset = select(&self.dataset, &self.visible_indices);
        self.summary = DashboardSummary::compute(&subset, self.config.max_words);
        log::debug!(
            "Recomputed {} / {}: {} tweets",
            self.filters.airline,
            self.filters.sentiment.label(),
            self.visible_indices.len()
        );
    }

    pub fn set_airline(&mut self, airline: &str) {
        if self.filters.airline != airline {
            self.filters.airline = airline.to_string();
            self.refilter();
        }
    }

    pub fn set_sentiment(&mut self, option: SentimentOption) {
        if self.filters.sentiment != option {
            self.filters.sentiment = option;
            self.refilter();
        }
    }

    /// Tweets passing the current filters, in dataset order.
    pub fn visible_tweets(&self) -> Vec<&TweetRecord> {
        select(&self.dataset, &self.visible_indices)
    }
}
