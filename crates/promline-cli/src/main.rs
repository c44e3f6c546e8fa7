//! promline: render a metric snapshot file as Prometheus exposition text.
//!
//! Output goes to stdout; set `RUST_LOG` for diagnostics on stderr.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use promline_cli::{config, export, obs, opts::ProcArgs, Result};

fn main() -> ExitCode {
    let args = ProcArgs::parse();
    obs::init_logging();

    match run(&args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(path = %args.path.display(), code = e.code(), error = %e, "promline failed");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let records = cfg.to_records()?;
    let body = export::render_snapshot(&records);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
