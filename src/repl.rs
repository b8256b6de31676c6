//! Interactive read-eval-print loop over a single table.
//!
//! ```text
//! db > insert 1 user1 person1@example.com
//! Executed.
//! db > select
//! (1, user1, person1@example.com)
//! Executed.
//! db > .exit
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::common::{Error, Result};
use crate::statement::{prepare, MetaCommand, Statement};
use crate::table::Table;

const PROMPT: &str = "db > ";

/// How a REPL session ended without a storage fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `.exit` was entered; the table was flushed and closed.
    Exited,
    /// Input ran out before `.exit`; the table was dropped unflushed.
    InputClosed,
}

/// Drives one session: reads lines from `input`, writes responses to
/// `output`.
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the loop until `.exit` or end of input.
    ///
    /// Lines are read as raw bytes, so input that is not UTF-8 is handled
    /// like any other. Recoverable errors (bad input, full table) are
    /// reported on `output` and the loop continues.
    ///
    /// # Errors
    /// Returns the first fatal error: a storage fault, or failure to read
    /// input or write output.
    pub fn run(&mut self, mut table: Table) -> Result<SessionEnd> {
        let mut line = Vec::new();

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                writeln!(self.output, "Error reading input")?;
                debug!(num_rows = table.num_rows(), "input closed before .exit");
                return Ok(SessionEnd::InputClosed);
            }
            let command = trim_line_ending(&line);
            trace!(command = %String::from_utf8_lossy(command), "read command");

            if let Some(meta) = MetaCommand::parse(command) {
                match meta {
                    MetaCommand::Exit => {
                        table.close()?;
                        return Ok(SessionEnd::Exited);
                    }
                    MetaCommand::Unrecognized => {
                        writeln!(
                            self.output,
                            "Unrecognized command '{}'",
                            String::from_utf8_lossy(command)
                        )?;
                        continue;
                    }
                }
            }

            let statement = match prepare(command) {
                Ok(statement) => statement,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            match self.execute(statement, &mut table) {
                Ok(()) => writeln!(self.output, "Executed.")?,
                Err(Error::TableFull) => writeln!(self.output, "Error: Table full.")?,
                Err(e) => return Err(e),
            }
        }
    }

    fn execute(&mut self, statement: Statement, table: &mut Table) -> Result<()> {
        match statement {
            Statement::Insert(row) => table.insert(&row),
            Statement::Select => {
                for row in table.scan() {
                    writeln!(self.output, "{}", row?)?;
                }
                Ok(())
            }
        }
    }
}

/// `line` without its trailing `\n` / `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |last| last + 1);
    &line[..end]
}
