mod ui;
mod viewport;

pub use ui::{UIState, TITLE_LOADED};
pub use viewport::ViewportState;
