pub mod answer;
pub mod outcome;
pub mod runner;

pub use answer::*;
pub use outcome::*;
pub use runner::*;
