pub mod action;
pub mod problem;
pub mod quiz;
pub mod report;
pub mod style;

pub use crate::problem::{Problem, ProblemSet};
pub use crate::quiz::{Outcome, QuizRunner, RunResult};
