use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use glob::{Pattern, glob};
use tracing::{debug, info};

use crate::error::{DumpError, Result};

/// Suffix of simulator dumps; one file per test case.
pub const VERILATOR_SUFFIX: &str = ".hex.txt";

/// Suffix of FPGA dumps.
pub const FPGA_SUFFIX: &str = ".ret";

/// A named test case and the two dumps that describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub verilator_dump: Utf8PathBuf,
    pub fpga_dump: Utf8PathBuf,
}

impl TestCase {
    pub fn new(verilator_dir: &Utf8Path, fpga_dir: &Utf8Path, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            verilator_dump: Utf8PathBuf::from(format!("{verilator_dir}/{name}{VERILATOR_SUFFIX}")),
            fpga_dump: Utf8PathBuf::from(format!("{fpga_dir}/{name}{FPGA_SUFFIX}")),
        }
    }
}

/// Test case name for a dump file name: everything before the first `.`.
pub fn testcase_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// List the test cases that have a simulator dump in `verilator_dir`.
///
/// Names are sorted and unique, so the result does not depend on directory
/// listing order.
pub fn discover_testcases(verilator_dir: &Utf8Path) -> Result<Vec<String>> {
    let metadata = std::fs::metadata(verilator_dir).map_err(|source| DumpError::Io {
        path: verilator_dir.to_owned(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DumpError::Io {
            path: verilator_dir.to_owned(),
            source: io::ErrorKind::NotADirectory.into(),
        });
    }

    let pattern = format!(
        "{}/*{VERILATOR_SUFFIX}",
        Pattern::escape(verilator_dir.as_str())
    );
    let entries = glob(&pattern).map_err(|source| DumpError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| DumpError::Listing {
            path: verilator_dir.to_owned(),
            source,
        })?;
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            debug!("skipping non UTF-8 dump name {}", path.display());
            continue;
        };
        names.push(testcase_name(file_name).to_owned());
    }
    names.sort();
    names.dedup();

    info!("found {} test cases in {}", names.len(), verilator_dir);
    Ok(names)
}
