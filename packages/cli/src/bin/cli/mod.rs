pub mod credits;
pub mod settings;
