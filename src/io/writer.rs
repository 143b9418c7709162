//! Output formatting: one function per task shape, each writing to any
//! `dyn Write`.

use std::io::Write;

use anyhow::{Context, Result};

use crate::aa::ArgumentSet;
use crate::extension::Extension;

fn names_in_order<'a>(ext: &Extension, args: &'a ArgumentSet) -> Vec<&'a str> {
    ext.iter().map(|&v| args.by_value(v).name()).collect()
}

fn write_bracketed_names(writer: &mut dyn Write, names: &[&str]) -> Result<()> {
    write!(writer, "[{}]", names.join(",")).context("failed to write extension")
}

/// `DC` / `DS`: `YES` or `NO`.
pub fn write_decision(writer: &mut dyn Write, accepted: bool) -> Result<()> {
    writeln!(writer, "{}", if accepted { "YES" } else { "NO" }).context("failed to write decision")?;
    writer.flush().context("failed to flush output")
}

/// `SE`: `[a,b,c]`, or `NO` if `extension` is `None`.
pub fn write_single_extension(
    writer: &mut dyn Write,
    extension: Option<&Extension>,
    args: &ArgumentSet,
) -> Result<()> {
    match extension {
        Some(ext) => write_bracketed_names(writer, &names_in_order(ext, args))?,
        None => write!(writer, "NO").context("failed to write extension")?,
    }
    writeln!(writer).context("failed to write extension")?;
    writer.flush().context("failed to flush output")
}

/// `EE`: `[[a,b],[c],[]]` — outer brackets always present, even for an empty
/// extension set.
pub fn write_extension_set(
    writer: &mut dyn Write,
    extensions: &[Extension],
    args: &ArgumentSet,
) -> Result<()> {
    write!(writer, "[").context("failed to write extension set")?;
    for (i, ext) in extensions.iter().enumerate() {
        if i > 0 {
            write!(writer, ",").context("failed to write extension set")?;
        }
        write_bracketed_names(writer, &names_in_order(ext, args))?;
    }
    writeln!(writer, "]").context("failed to write extension set")?;
    writer.flush().context("failed to flush output")
}
