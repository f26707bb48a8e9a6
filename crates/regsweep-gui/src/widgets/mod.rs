/// UI widgets for RegSweep.

pub mod folder_picker;
pub mod status_bar;
pub mod toolbar;
