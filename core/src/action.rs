pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use error::*;

use crate::problem::ProblemSet;
use crate::quiz::{AnswerReader, QuizRunner, RunResult, StdinAnswerReader};
use crate::report;

/// Gives the quiz stored in `csv_path` on the terminal, answers coming from stdin.
pub async fn take_quiz(csv_path: impl AsRef<Path>, time_limit: Duration) -> Result<RunResult> {
    let runner = QuizRunner::new(StdinAnswerReader::stdin()).time_limit(time_limit);
    self::take_quiz_with(csv_path, &runner, &mut io::stdout()).await
}

/// Loads the problems, runs them and reports the score.
///
/// Load failures abort before anything is written to `out`.
pub async fn take_quiz_with<R, W>(
    csv_path: impl AsRef<Path>,
    runner: &QuizRunner<R>,
    out: &mut W,
) -> Result<RunResult>
where
    R: AnswerReader,
    W: Write + ?Sized,
{
    let problems = ProblemSet::load(csv_path)?;

    log::info!(
        "{} problem(s), {}s per question",
        problems.len(),
        runner.get_time_limit().as_secs_f64()
    );
    writeln!(out, "{}", "The quiz is starting!".bold()).context("Failed to write to output")?;

    let result = runner
        .run(&problems, out)
        .await
        .context("Failed to write to output")?;

    report::report(&problems, &result, out).context("Failed to write the report")?;
    Ok(result)
}
