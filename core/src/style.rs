use std::io::{self, Write};

use colored::{Color, ColoredString, Colorize};

use crate::problem::Problem;
use crate::quiz::Outcome;

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    match v.as_str() {
        "truecolor" | "24bit" => true,
        _ => false,
    }
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Outcome {
    fn color(&self) -> Color {
        use Outcome::*;
        if !self::is_truecolor_supported() {
            return match self {
                Correct => Color::Green,
                Wrong => Color::Yellow,
                TimedOut => Color::Red,
            };
        }

        match self {
            Correct => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Wrong => Color::TrueColor {
                r: 210,
                g: 138,
                b: 4,
            },
            TimedOut => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
        }
    }
}

pub fn colorize(outcome: Outcome, s: &str) -> ColoredString {
    s.color(outcome.color())
}

/// `Problem <n>\t<question> = `, left open for the answer to be typed after it.
pub fn print_prompt<W>(out: &mut W, number: usize, problem: &Problem) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(
        out,
        "{}\t{} = ",
        format!("Problem {}", number).cyan().bold(),
        problem.question()
    )?;
    out.flush()
}

pub fn print_timeout_notice<W>(out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "{}", colorize(Outcome::TimedOut, "Out of time!").bold())?;
    out.flush()
}

/// `Problem <n>: <question> = <answer>`
pub fn print_solution<W>(out: &mut W, number: usize, problem: &Problem) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "{}: {} = {}",
        format!("Problem {}", number).cyan(),
        problem.question(),
        problem.answer().bold(),
    )
}
