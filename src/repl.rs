use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{evaluate, interpreter::environment::Environment};

/// Printed before every line read.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until `input` is exhausted.
///
/// Each line is parsed and evaluated as a program of its own, but all lines
/// share one environment, so bindings persist for the whole session. Lines
/// that do not parse print their diagnostics and are not evaluated. Lines
/// that produce no value, such as a `let`, print nothing.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// ## Example
/// ```
/// use std::io::Cursor;
///
/// use monkey::repl::start;
///
/// let mut output = Vec::new();
/// start(Cursor::new("let a = 2;\na * 3\n"), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 6\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        debug!(line = %line, "read line");

        match evaluate(&line, &mut env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(errors) => write!(output, "{errors}")?,
        }
    }
}
