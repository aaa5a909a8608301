use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use serde::Deserialize;

use crate::cmd::Args;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "QuizConfig::default_csv")]
    pub csv: PathBuf,

    /// Seconds per question.
    #[serde(default = "QuizConfig::default_limit")]
    pub limit: i64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            csv: Self::default_csv(),
            limit: Self::default_limit(),
        }
    }
}

impl QuizConfig {
    pub const ENV_PREFIX: &str = "QUIZ_";

    fn default_csv() -> PathBuf {
        PathBuf::from("quiz.csv")
    }

    fn default_limit() -> i64 {
        3
    }

    /// Reads `QUIZ_CSV` and `QUIZ_LIMIT`, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::ENV_PREFIX).from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::ENV_PREFIX).from_iter(vars)
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        let Args { csv, limit } = args;

        csv.as_ref().map(|p| self.csv = p.clone());
        limit.map(|l| self.limit = l);
        self
    }

    pub fn from_env_and_args(args: &Args) -> anyhow::Result<Self> {
        let cfg = Self::from_env().with_context(|| {
            format!("Invalid {}* environment variable", Self::ENV_PREFIX)
        })?;
        Ok(cfg.with_args(args))
    }

    /// Negative limits are clamped to zero.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.limit.max(0).unsigned_abs())
    }
}
