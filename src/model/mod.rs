pub mod pet_record;
pub mod mood;
pub mod pet_action;
pub mod action_result;
pub mod pet_status;
