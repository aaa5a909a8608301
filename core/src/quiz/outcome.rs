#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Outcome {
    Correct,
    Wrong,
    #[strum(serialize = "Timed out")]
    TimedOut,
}

/// Aggregate of a finished run.
///
/// Indices point back into the [`ProblemSet`](crate::problem::ProblemSet) that was run and
/// are stored in the order they were encountered, which is ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    correct_count: usize,
    wrong_indices: Vec<usize>,
    timed_out_indices: Vec<usize>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, index: usize, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct_count += 1,
            Outcome::Wrong => self.wrong_indices.push(index),
            Outcome::TimedOut => self.timed_out_indices.push(index),
        }
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn wrong_indices(&self) -> &[usize] {
        &self.wrong_indices
    }

    pub fn timed_out_indices(&self) -> &[usize] {
        &self.timed_out_indices
    }

    /// Number of problems this result covers.
    pub fn total(&self) -> usize {
        self.correct_count + self.wrong_indices.len() + self.timed_out_indices.len()
    }

    pub fn is_perfect(&self) -> bool {
        self.wrong_indices.is_empty() && self.timed_out_indices.is_empty()
    }
}
