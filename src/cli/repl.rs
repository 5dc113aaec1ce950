//! Interactive read-eval loop

use std::io::{self, BufRead, Write};
use tracing::debug;

use super::command::Command;
use super::handlers;
use crate::task::TaskStore;

const PROMPT: &str = "\nEnter command: ";

/// Run the command loop until `exit` or end of input.
///
/// The help text is printed once before the first prompt. Only failures
/// writing to `out` or reading from `input` end the loop early.
pub fn run<R, W>(store: &mut TaskStore, mut input: R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    handlers::help(out)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = read_line(&mut input, &mut buf)? else {
            debug!("End of input");
            return Ok(());
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!("Dispatching {:?}", command);

        match command {
            Command::Add(name) => handlers::add(store, &name, out)?,
            Command::List => handlers::list(store, out)?,
            Command::Done(id) => handlers::mark_done(store, id, out)?,
            Command::Delete(id) => handlers::delete(store, id, out)?,
            Command::Help => handlers::help(out)?,
            Command::Exit => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
        }
    }
}

/// Read one line, dropping the `\n` or `\r\n` terminator.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte never ends the session. Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    let mut line = buf.as_slice();
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest.strip_suffix(b"\r").unwrap_or(rest);
    }
    Ok(Some(String::from_utf8_lossy(line).into_owned()))
}
