pub mod clock;
pub mod store;
pub mod apply_action;
pub mod pet;
