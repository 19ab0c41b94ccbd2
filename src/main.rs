use anyhow::Context;
use clap::Parser;
use digit_mirror::utils::logger;
use digit_mirror::{CheckEngine, CliConfig, StdinSource};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut engine = CheckEngine::new(StdinSource::new());
    let mut stdout = std::io::stdout().lock();

    match engine.run() {
        Ok(verdict) => {
            writeln!(stdout, "{}", verdict).context("failed to write verdict")?;
        }
        Err(e) => {
            tracing::info!("Check failed: {} (Severity: {:?})", e, e.severity());
            tracing::debug!("Suggestion: {}", e.recovery_suggestion());

            if e.is_reported_on_stdout() {
                writeln!(stdout, "{}", e.user_friendly_message())
                    .context("failed to write error message")?;
            } else {
                eprintln!("{}", e.user_friendly_message());
            }
            stdout.flush().context("failed to flush stdout")?;
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
