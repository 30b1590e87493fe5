// Main application entry point.
// Parses the command line, loads the remap rules, switches stdin/stdout to
// unbuffered handles and runs the event loop until end of stream.

use capsremap::event::{EventReader, EventWriter};
use capsremap::{cli, config::Config, pipeline, telemetry, Error};
use std::process::exit;
use tracing::{debug, info};

fn main() {
    match run() {
        Ok(()) => {}
        Err(e @ Error::Usage(_)) => {
            eprint!("{e}");
            exit(e.code());
        }
        Err(e) => {
            debug!(kind = ?e.kind(), code = e.code(), "{e}");
            eprintln!("capsremap: {e}");
            exit(e.code());
        }
    }
}

fn run() -> Result<(), Error> {
    let args = cli::parse_args()?;
    let cfg = Config::load(&args)?;
    telemetry::init_tracing(&cfg);

    // Both handles are set up before the first record is read.
    let mut reader = EventReader::stdin()?;
    let mut writer = EventWriter::stdout()?;
    let mut engine = cfg.engine();

    let summary = pipeline::run(&mut reader, &mut writer, &mut engine)?;
    info!(
        read = summary.read,
        written = summary.written(),
        remapped = summary.remapped,
        dropped = summary.dropped,
        "end of input stream"
    );
    Ok(())
}
