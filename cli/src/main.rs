use clap::Parser;
use quiz_cli::{cmd::Args, util};

#[tokio::main]
async fn main() {
    util::init_logger();
    let args = Args::parse();
    args.exec().await.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    });
}
