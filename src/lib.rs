//! Airline tweet sentiment dashboard.
//!
//! [`data`] holds the pure pipeline (load → filter → aggregate); everything
//! under [`ui`] and [`app`] only renders what [`state::AppState`] computed.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
