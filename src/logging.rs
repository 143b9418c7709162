//! Logging setup for the CLI binary.
//!
//! `fern` + `chrono` gives leveled, timestamped, colored output; installed
//! once, first thing, in `main`.

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Installs the global logger at the level implied by `verbosity`
/// (`0` = warnings and errors only, `1` = info, `2+` = debug).
pub fn init(verbosity: u64) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(fern::InitError::SetLoggerError)
}
