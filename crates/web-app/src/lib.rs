#![warn(clippy::pedantic)]

pub mod generator;
pub mod log;
pub mod settings;

pub use generator::{GlooTimer, PlanGenerator, Timer};
pub use settings::Settings;
