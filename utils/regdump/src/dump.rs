//! Fixed-column field extraction shared by both dump formats.

use camino::Utf8Path;

use crate::error::{DumpError, Result};

/// Width in characters of one register field.
pub const FIELD_WIDTH: usize = 8;

/// Read a whole dump into memory; the file is closed before parsing starts.
pub(crate) fn read_dump(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DumpError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Parse the hexadecimal field that starts at `column` in `line`.
///
/// Columns count characters, not bytes. Behaves like plain string slicing: a
/// line that ends inside the field yields the characters that are left, and
/// whitespace around the digits is ignored. Anything else that is not hex
/// digits is an error.
///
/// `line_no` is 1-based and only used for diagnostics.
pub fn hex_field(path: &Utf8Path, line_no: usize, line: &str, column: usize) -> Result<u32> {
    let text = char_slice(line, column, column + FIELD_WIDTH);

    u32::from_str_radix(text.trim_ascii(), 16).map_err(|source| DumpError::InvalidField {
        path: path.to_owned(),
        line: line_no,
        column,
        text: text.to_owned(),
        source,
    })
}

/// Characters `start..end` of `line`, clamped to its length.
fn char_slice(line: &str, start: usize, end: usize) -> &str {
    let byte_at = |column: usize| {
        line.char_indices()
            .nth(column)
            .map_or(line.len(), |(offset, _)| offset)
    };
    &line[byte_at(start)..byte_at(end)]
}
