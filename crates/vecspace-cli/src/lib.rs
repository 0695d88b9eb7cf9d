pub mod input;
pub mod narration;
pub mod runner;
