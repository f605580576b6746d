pub mod ideas;
pub mod options;
