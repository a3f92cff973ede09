//! egui drop zone: state, behavior and rendering.

pub mod controller;
pub mod state;
pub mod ui;
