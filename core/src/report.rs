use std::io::{self, Write};

use colored::Colorize;

use crate::problem::ProblemSet;
use crate::quiz::{Outcome, RunResult};
use crate::style;

/// Writes the final score followed by the solutions of every problem that was
/// answered wrong or not answered in time. Empty sections are left out.
pub fn report<W>(problems: &ProblemSet, result: &RunResult, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    debug_assert_eq!(result.total(), problems.len());

    let score = format!("{} out of {}", result.correct_count(), problems.len());
    let score = if result.is_perfect() {
        score.green().bold()
    } else {
        score.bright_red().bold()
    };
    writeln!(out, "\nYou got {} questions correct.", score)?;

    let sections = [
        (
            Outcome::Wrong,
            "Solutions to the ones you got wrong:",
            result.wrong_indices(),
        ),
        (
            Outcome::TimedOut,
            "Solutions of the ones you didn't answer on time:",
            result.timed_out_indices(),
        ),
    ];

    for (outcome, title, indices) in sections {
        if indices.is_empty() {
            continue;
        }
        writeln!(out, "\n{}", style::colorize(outcome, title).bold())?;
        for &i in indices {
            style::print_solution(out, i + 1, &problems[i])?;
        }
    }
    out.flush()
}
