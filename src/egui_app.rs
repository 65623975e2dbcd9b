//! egui front end: UI state, the controller driving it and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
