/// Central panel content for each application phase.
pub mod sweep_panel;
