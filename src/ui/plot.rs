use std::f64::consts::PI;
use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color;
use crate::data::model::Sentiment;
use crate::data::stats::{DashboardSummary, SentimentCounts};
use crate::data::words::WordWeight;

/// Largest arc drawn as one polygon; egui_plot only fills convex shapes.
const MAX_PIECE_DEG: f64 = 90.0;
/// Angular resolution of wedge outlines.
const ARC_STEP_DEG: f64 = 2.0;

const MIN_FONT: f32 = 14.0;
const MAX_FONT: f32 = 48.0;

// ---------------------------------------------------------------------------
// Sentiment distribution (horizontal count bars)
// ---------------------------------------------------------------------------

/// Vertical position of a sentiment's bar; positive sits on top.
fn bar_position(sentiment: Sentiment) -> f64 {
    match sentiment {
        Sentiment::Positive => 2.0,
        Sentiment::Neutral => 1.0,
        Sentiment::Negative => 0.0,
    }
}

pub fn sentiment_bar_chart(ui: &mut Ui, summary: &DashboardSummary) {
    if summary.is_empty() {
        ui.label("No data available for current filters");
        return;
    }

    let counts: &SentimentCounts = &summary.counts;
    let max = counts.values().copied().max().unwrap_or(0) as f64;

    Plot::new("sentiment_distribution")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
        .include_x(max * 1.15 + 1.0)
        .include_y(-0.6)
        .include_y(2.6)
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            Sentiment::ALL
                .into_iter()
                .find(|s| (bar_position(*s) - mark.value).abs() < 1e-6)
                .map(|s| s.as_str().to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (&sentiment, &count) in counts {
                let y = bar_position(sentiment);
                let bar = Bar::new(y, count as f64).width(0.7);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .color(color::sentiment_color(sentiment))
                        .name(sentiment.title()),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(count as f64, y), format!("  {count}"))
                        .anchor(Align2::LEFT_CENTER),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Sentiment proportions (pie)
// ---------------------------------------------------------------------------

fn polar(angle_deg: f64, radius: f64) -> [f64; 2] {
    let rad = angle_deg * PI / 180.0;
    [radius * rad.cos(), radius * rad.sin()]
}

/// Outline of a unit-circle wedge split into convex pieces.
///
/// Each piece starts at the centre and follows the arc counterclockwise
/// from `start_deg` over at most `MAX_PIECE_DEG`.
pub fn wedge_pieces(start_deg: f64, sweep_deg: f64) -> Vec<Vec<[f64; 2]>> {
    if sweep_deg <= 0.0 {
        return Vec::new();
    }
    let n_pieces = (sweep_deg / MAX_PIECE_DEG).ceil() as usize;
    let piece_sweep = sweep_deg / n_pieces as f64;

    (0..n_pieces)
        .map(|p| {
            let from = start_deg + p as f64 * piece_sweep;
            let steps = (piece_sweep / ARC_STEP_DEG).ceil().max(1.0) as usize;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for s in 0..=steps {
                points.push(polar(from + piece_sweep * s as f64 / steps as f64, 1.0));
            }
            points
        })
        .collect()
}

/// Pie starting at 90° and running counterclockwise.
pub fn sentiment_pie(ui: &mut Ui, summary: &DashboardSummary) {
    if summary.proportions.is_empty() {
        ui.label("No data for pie chart");
        return;
    }

    Plot::new("sentiment_proportions")
        .height(260.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.4)
        .include_y(1.4)
        .show(ui, |plot_ui| {
            let mut start = 90.0;
            for &(sentiment, pct) in &summary.proportions {
                let sweep = 360.0 * pct / 100.0;
                let fill = color::sentiment_color(sentiment);

                for piece in wedge_pieces(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(piece))
                            .fill_color(fill)
                            .stroke(Stroke::new(1.0, fill)),
                    );
                }
                plot_ui.line(
                    Line::new(PlotPoints::new(vec![[0.0, 0.0], polar(start, 1.0)]))
                        .color(Color32::WHITE)
                        .width(2.0),
                );

                let mid = start + sweep / 2.0;
                let [lx, ly] = polar(mid, 1.18);
                plot_ui.text(Text::new(PlotPoint::new(lx, ly), sentiment.title()));
                let [px, py] = polar(mid, 0.6);
                plot_ui.text(
                    Text::new(PlotPoint::new(px, py), format!("{pct:.1}%"))
                        .color(Color32::BLACK),
                );

                start += sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Word cloud
// ---------------------------------------------------------------------------

/// Font size for a term of the given relative weight.
pub fn font_size(weight: f64) -> f32 {
    MIN_FONT + (MAX_FONT - MIN_FONT) * weight.clamp(0.0, 1.0) as f32
}

pub fn word_cloud(ui: &mut Ui, words: &[WordWeight]) {
    if words.is_empty() {
        ui.label("No data available for word cloud");
        return;
    }

    let colours = color::word_palette(words.len());
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for (word, colour) in words.iter().zip(colours) {
                    ui.label(
                        RichText::new(&word.word)
                            .size(font_size(word.weight))
                            .color(colour),
                    )
                    .on_hover_text(format!("{} occurrences", word.count));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle_of(p: [f64; 2]) -> f64 {
        p[1].atan2(p[0]) * 180.0 / PI
    }

    #[test]
    fn full_circle_splits_into_four_convex_pieces() {
        let pieces = wedge_pieces(90.0, 360.0);
        assert_eq!(pieces.len(), 4);
        for piece in &pieces {
            assert_eq!(piece[0], [0.0, 0.0]);
            for p in &piece[1..] {
                assert!(((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn wedge_starts_at_requested_angle() {
        let pieces = wedge_pieces(90.0, 45.0);
        assert_eq!(pieces.len(), 1);
        let first = pieces[0][1];
        let last = *pieces[0].last().unwrap();
        assert!((angle_of(first) - 90.0).abs() < 1e-9);
        assert!((angle_of(last) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn empty_wedge_draws_nothing() {
        assert!(wedge_pieces(0.0, 0.0).is_empty());
    }

    #[test]
    fn bars_run_positive_to_negative_top_down() {
        assert!(bar_position(Sentiment::Positive) > bar_position(Sentiment::Neutral));
        assert!(bar_position(Sentiment::Neutral) > bar_position(Sentiment::Negative));
    }

    #[test]
    fn font_size_scales_with_weight() {
        assert_eq!(font_size(0.0), MIN_FONT);
        assert_eq!(font_size(1.0), MAX_FONT);
        assert!(font_size(0.5) > MIN_FONT && font_size(0.5) < MAX_FONT);
    }
}
