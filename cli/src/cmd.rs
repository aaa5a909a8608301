use std::path::PathBuf;

use quiz_core::action;

use crate::config::QuizConfig;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// A CSV file with the format: question,answer [default: quiz.csv]
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Time limit for each question in seconds [default: 3]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

pub type CmdResult = anyhow::Result<()>;

impl Args {
    pub async fn exec(&self) -> CmdResult {
        let cfg = QuizConfig::from_env_and_args(self)?;
        log::debug!("{:?}", cfg);

        action::take_quiz(&cfg.csv, cfg.time_limit()).await?;
        Ok(())
    }
}
