/// Plain-text output on stdout: usage, errors, and the final name list.
use std::io::{self, Write};

use crate::signatures::SignatureError;

/// Separator placed between names in the final list.
pub const NAME_SEPARATOR: &str = " * ";

/// Usage line printed before the usage error message.
pub const USAGE: &str = "Usage: signature-names --list_id 12345";

/// Write the final list: a blank line, the joined names, a blank line, and
/// the summary count.
///
/// # Errors
///
/// Returns `io::Error` if the writer fails.
pub fn write_names<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", names.join(NAME_SEPARATOR))?;
    writeln!(out)?;
    writeln!(out, "Successfully output {} signature names.", names.len())?;
    out.flush()
}

/// Write a terminal error. The usage error carries the usage line.
pub fn write_error<W: Write>(out: &mut W, err: &SignatureError) {
    let result = match err {
        SignatureError::Usage => writeln!(out, "{USAGE}\n{err}"),
        SignatureError::NoSignatures => writeln!(out, "{err}"),
        SignatureError::Client(_) | SignatureError::Io(_) => writeln!(out, "Error: {err}"),
    };
    if result.and_then(|()| out.flush()).is_err() {
        eprintln!("Error: {err}");
    }
}
