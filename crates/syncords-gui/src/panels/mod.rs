pub mod menu_bar;
pub mod points;
pub mod status;
pub mod viewport;
