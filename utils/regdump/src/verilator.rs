//! Parser for the register dump printed at the end of a Verilator run.
//!
//! The simulator finishes with eight lines of four registers each followed by
//! one more (normally empty) line:
//!
//! ```text
//! x0 (zero):= 00000000, x1 ( ra ):= 00000010, x2 ( sp ):= 0000001e, x3 ( gp ):= 00000001,
//! ...
//! x28( t3 ):= 00000000, x29( t4 ):= 00000000, x30( t5 ):= 00001044, x31( t6 ):= 0000000b,
//!
//! ```

use camino::Utf8Path;
use tracing::debug;

use crate::dump::{hex_field, read_dump};
use crate::error::{DumpError, Result};
use crate::register_file::NUM_REGS;

/// Start columns of the four value fields on each register line.
pub const VERILATOR_COLUMNS: [usize; 4] = [12, 34, 56, 78];

/// Register lines at the end of the dump.
pub const REGISTER_LINES: usize = NUM_REGS / VERILATOR_COLUMNS.len();

/// Lines a dump must have: the register block plus the trailing line.
pub const MIN_LINES: usize = REGISTER_LINES + 1;

/// Read `path` and return x0..x31 from its register block.
pub fn parse_verilator_dump(path: &Utf8Path) -> Result<Vec<u32>> {
    let text = read_dump(path)?;
    let regs = parse_verilator_str(path, &text)?;
    debug!("parsed {} registers from {}", regs.len(), path);
    Ok(regs)
}

/// Parse an in-memory Verilator dump; `path` only names it in errors.
pub fn parse_verilator_str(path: &Utf8Path, text: &str) -> Result<Vec<u32>> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < MIN_LINES {
        return Err(DumpError::TooFewLines {
            path: path.to_owned(),
            expected: MIN_LINES,
            found: lines.len(),
        });
    }

    let first = lines.len() - MIN_LINES;
    let block = &lines[first..lines.len() - 1];

    let mut regs = Vec::with_capacity(NUM_REGS);
    for (offset, line) in block.iter().enumerate() {
        let line_no = first + offset + 1;
        for column in VERILATOR_COLUMNS {
            regs.push(hex_field(path, line_no, line, column)?);
        }
    }
    Ok(regs)
}
