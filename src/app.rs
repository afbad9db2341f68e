use eframe::egui::{self, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dataset info ----
        egui::SidePanel::left("info_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: controls, metrics, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    dashboard(ui, &mut self.state);
                });
        });
    }
}

fn dashboard(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Airline Sentiment Analysis");
    ui.separator();

    panels::filter_controls(ui, state);
    ui.add_space(12.0);

    ui.strong("Key Insights");
    panels::metric_cards(ui, &state.summary.metrics);
    ui.add_space(12.0);

    ui.strong("Sentiment Analysis");
    ui.columns(2, |cols| {
        cols[0].label("Sentiment Distribution");
        plot::sentiment_bar_chart(&mut cols[0], &state.summary);
        cols[1].label("Sentiment Proportions");
        plot::sentiment_pie(&mut cols[1], &state.summary);
    });
    ui.add_space(12.0);

    ui.strong("Customer Feedback Analysis");
    plot::word_cloud(ui, &state.summary.words);
    ui.add_space(12.0);

    egui::CollapsingHeader::new("Tweets")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            panels::tweet_table(ui, state);
        });
}
