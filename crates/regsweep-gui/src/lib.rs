/// RegSweep GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. Sweeping and report writing live in
/// `regsweep-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod picker;
pub mod state;
pub mod widgets;

pub use app::{RegSweepApp, RegSweepState};
