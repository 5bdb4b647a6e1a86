//! Console loggers for arguments and formatted pairs

use std::fmt::Display;
use std::io::{self, Write};

/// Print positional arguments numbered from 1, then keyword arguments
/// sorted by key
pub fn args_logger(args: &[&dyn Display], kwargs: &[(&str, &dyn Display)]) {
    let stdout = io::stdout();
    if let Err(e) = args_logger_to(&mut stdout.lock(), args, kwargs) {
        tracing::warn!("Failed to write arguments: {}", e);
    }
}

/// Write the argument listing to `writer`
pub fn args_logger_to<W: Write>(
    writer: &mut W,
    args: &[&dyn Display],
    kwargs: &[(&str, &dyn Display)],
) -> io::Result<()> {
    for (i, arg) in args.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, arg)?;
    }

    let mut sorted = kwargs.to_vec();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        writeln!(writer, "* {}: {}", key, value)?;
    }
    Ok(())
}

/// `first: second`
pub fn colon_delimit(first: &str, second: &str) -> String {
    format!("{first}: {second}")
}

/// `first - second`
pub fn dash_delimit(first: &str, second: &str) -> String {
    format!("{first} - {second}")
}

/// Prints pairs of strings through a formatter
pub struct Logger<F> {
    formatter: F,
}

impl<F> Logger<F>
where
    F: Fn(&str, &str) -> String,
{
    /// Print one formatted line to stdout
    pub fn log(&self, first: &str, second: &str) {
        let stdout = io::stdout();
        if let Err(e) = self.log_to(&mut stdout.lock(), first, second) {
            tracing::warn!("Failed to write log line: {}", e);
        }
    }

    /// Write one formatted line to `writer`
    pub fn log_to<W: Write>(&self, writer: &mut W, first: &str, second: &str) -> io::Result<()> {
        writeln!(writer, "{}", (self.formatter)(first, second))
    }
}

/// Build a logger around `formatter`
pub fn get_logger<F>(formatter: F) -> Logger<F>
where
    F: Fn(&str, &str) -> String,
{
    Logger { formatter }
}
