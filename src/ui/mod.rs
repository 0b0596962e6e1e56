pub mod app;
pub mod center_panel;
pub mod left_panel;
pub mod message;
pub mod right_panel;
