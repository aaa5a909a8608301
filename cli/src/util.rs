use std::io::Write as _;

use colored::Colorize;
use env_logger::Env;
use quiz_core::style::ColorTheme;

/// Logs go to stderr as `[LEVEL] message`; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = record.level();
            writeln!(
                buf,
                "[{}] {}",
                level.to_string().color(level.color()),
                record.args()
            )
        })
        .init();
}
