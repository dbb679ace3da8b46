//! Parser for register dumps read back from the FPGA.
//!
//! One register per line, value at column 12:
//!
//! ```text
//! ret[ 0] = 0x00000000
//! ret[ 1] = 0x00000010
//! ```

use camino::Utf8Path;
use tracing::debug;

use crate::dump::{hex_field, read_dump};
use crate::error::Result;

/// Start column of the value field.
pub const FPGA_COLUMN: usize = 12;

/// Read `path` and return one value per line, in file order.
///
/// Every line is returned, including any past x31; callers decide how many
/// are meaningful.
pub fn parse_fpga_dump(path: &Utf8Path) -> Result<Vec<u32>> {
    let text = read_dump(path)?;
    let regs = parse_fpga_str(path, &text)?;
    debug!("parsed {} values from {}", regs.len(), path);
    Ok(regs)
}

/// Parse an in-memory FPGA dump; `path` only names it in errors.
pub fn parse_fpga_str(path: &Utf8Path, text: &str) -> Result<Vec<u32>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| hex_field(path, idx + 1, line, FPGA_COLUMN))
        .collect()
}
