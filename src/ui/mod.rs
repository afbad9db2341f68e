//! egui rendering. Reads [`crate::state::AppState`]; all numbers come from
//! the pure functions in [`crate::data`].

pub mod panels;
pub mod plot;
