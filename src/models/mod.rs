pub mod errors;
pub mod lightbulb;
