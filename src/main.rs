use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemini_smoke::payload::Payload;
use gemini_smoke::report::{Outcome, write_header, write_outcome};
use gemini_smoke::runner::Runner;
use gemini_smoke::transport::http::HttpTransport;

#[derive(Parser)]
#[command(
    name = "gemini-smoke",
    version,
    about = "Send one test request to the geminiCall endpoint and print what came back."
)]
struct Cli {
    /// Log request details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();

    let transport = match HttpTransport::new() {
        Ok(t) => t,
        Err(e) => {
            // Still counts as a reported failure, not a crash.
            write_header(&mut stdout, &Payload::probe())?;
            write_outcome(
                &mut stdout,
                &Outcome::Failed {
                    error: format!("{:#}", e),
                },
            )?;
            return Ok(());
        }
    };

    Runner::new(Box::new(transport)).run(&mut stdout).await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,gemini_smoke=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
