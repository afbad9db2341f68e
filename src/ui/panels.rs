use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::data::model::SentimentOption;
use crate::data::stats::Metrics;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} tweets loaded, {} visible",
            format_count(state.dataset.len()),
            format_count(state.visible_indices.len())
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – dataset info and legend
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Dataset");
    ui.separator();

    let file_name = state
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.source.display().to_string());
    ui.label(RichText::new(file_name).strong())
        .on_hover_text(state.source.display().to_string());
    ui.label(format!("{} tweets", format_count(state.dataset.len())));
    ui.label(format!("{} airlines", state.dataset.airlines.len()));

    ui.add_space(8.0);
    ui.strong("Sentiment colours");
    for (label, colour) in color::legend_entries() {
        ui.label(RichText::new(format!("■ {label}")).color(colour));
    }
}

// ---------------------------------------------------------------------------
// Filter controls
// ---------------------------------------------------------------------------

/// Airline combo box and the horizontal sentiment radio group.
pub fn filter_controls(ui: &mut Ui, state: &mut AppState) {
    let airlines = state.dataset.airlines.clone();
    let mut airline = state.filters.airline.clone();
    let mut sentiment = state.filters.sentiment;

    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong("Select Airline");
            egui::ComboBox::from_id_salt("airline")
                .selected_text(&airline)
                .width(200.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for name in &airlines {
                        ui.selectable_value(&mut airline, name.clone(), name);
                    }
                });
        });

        ui.add_space(24.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Filter Sentiment");
            ui.horizontal(|ui: &mut Ui| {
                for option in SentimentOption::ALL {
                    ui.radio_value(&mut sentiment, option, option.label());
                }
            });
        });
    });

    state.set_airline(&airline);
    state.set_sentiment(sentiment);
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// One displayed metric: label, formatted value, hover text.
pub fn metric_cards_content(metrics: &Metrics) -> [(&'static str, String, &'static str); 4] {
    [
        (
            "Total Tweets",
            format_count(metrics.total_count),
            "# tweets analyzed",
        ),
        (
            "Avg. Sentiment",
            format!("{:.2}", metrics.avg_sentiment_score),
            "Range: -1 (Negative) to 1 (Positive)",
        ),
        (
            "Positive %",
            format!("{:.1}%", metrics.positive_pct),
            "% of positive feedback",
        ),
        (
            "Negative %",
            format!("{:.1}%", metrics.negative_pct),
            "% of negative feedback",
        ),
    ]
}

pub fn metric_cards(ui: &mut Ui, metrics: &Metrics) {
    let cards = metric_cards_content(metrics);
    ui.columns(cards.len(), |cols| {
        for (col, (label, value, tooltip)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style())
                .show(col, |ui: &mut Ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(label).size(14.0).color(Color32::GRAY));
                    ui.label(
                        RichText::new(value)
                            .size(24.0)
                            .strong()
                            .color(Color32::from_rgb(0x1f, 0x56, 0x7d)),
                    );
                })
                .response
                .on_hover_text(tooltip);
        }
    });
}

// ---------------------------------------------------------------------------
// Tweet table
// ---------------------------------------------------------------------------

/// Filtered tweets, capped at `config.table_rows`.
pub fn tweet_table(ui: &mut Ui, state: &AppState) {
    let tweets = state.visible_tweets();
    if tweets.is_empty() {
        ui.label("No data available for current filters");
        return;
    }

    let shown = tweets.len().min(state.config.table_rows);
    if shown < tweets.len() {
        ui.label(format!(
            "Showing the first {} of {} tweets",
            format_count(shown),
            format_count(tweets.len())
        ));
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Sentiment");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Score");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Tweet");
            });
        })
        .body(|body| {
            body.rows(20.0, shown, |mut row| {
                let tweet = tweets[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.colored_label(
                        color::sentiment_color(tweet.airline_sentiment),
                        tweet.airline_sentiment.title(),
                    );
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", tweet.vader_score));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&tweet.text).on_hover_text(&tweet.text);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tweet data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Integer with comma thousands separators: `15000` → `"15,000"`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(14640), "14,640");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn metric_cards_format_like_the_dashboard() {
        let metrics = Metrics {
            total_count: 2222,
            avg_sentiment_score: 0.1,
            positive_pct: 50.0,
            negative_pct: 33.333,
        };
        let cards = metric_cards_content(&metrics);
        let values: Vec<&str> = cards.iter().map(|(_, v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["2,222", "0.10", "50.0%", "33.3%"]);
    }

    #[test]
    fn empty_metrics_render_as_zeros() {
        let cards = metric_cards_content(&Metrics::default());
        let values: Vec<&str> = cards.iter().map(|(_, v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["0", "0.00", "0.0%", "0.0%"]);
    }
}
