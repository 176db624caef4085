use std::io::Write;

use clap::Parser;
use junit_summary::{
    config::Options, constants::LOG_FILTER_ENV, runner::run, sink::ConsoleSink,
};

#[derive(Debug, Parser)]
#[command(
    version = std::env!("CARGO_PKG_VERSION"),
    name = "junit-summary",
    about = "Summarize failing tests from JUnit XML reports"
)]
struct Cli {
    #[command(flatten)]
    pub options: Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logger()?;
    let cli = Cli::parse();
    let mut sink = ConsoleSink;
    match run(&cli.options, &mut sink).await {
        Ok(run_result) => std::process::exit(run_result.exit_code),
        Err(e) => {
            log::error!("Error: {:?}", e);
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}

fn setup_logger() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Warn);
    if let Ok(log) = std::env::var(LOG_FILTER_ENV) {
        builder.parse_filters(&log);
    }
    builder.try_init()?;
    Ok(())
}
