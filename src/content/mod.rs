pub mod controller;
pub mod prompts;
pub mod slot;
