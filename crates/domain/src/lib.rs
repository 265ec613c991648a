#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod exercise;
mod goal;
mod plan;

pub use catalog::{ExerciseCategory, Icon};
pub use exercise::*;
pub use goal::*;
pub use plan::*;
