use std::fs::File;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Simulator dumps, relative to the working directory of a test run.
pub const DEFAULT_VERILATOR_DUMP_DIR: &str = "../test/dump";

/// FPGA read-back results, relative to the working directory of a test run.
pub const DEFAULT_FPGA_DUMP_DIR: &str = "../../results_fpga";

/// Where to find the two sets of dumps.
///
/// ```yaml
/// verilatorDumpDir: build/dump
/// fpgaDumpDir: results_fpga
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "verilatorDumpDir")]
    pub verilator_dump_dir: Utf8PathBuf,
    #[serde(rename = "fpgaDumpDir")]
    pub fpga_dump_dir: Utf8PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verilator_dump_dir: DEFAULT_VERILATOR_DUMP_DIR.into(),
            fpga_dump_dir: DEFAULT_FPGA_DUMP_DIR.into(),
        }
    }
}

impl Config {
    pub fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open config {path}"))?;
        let config = serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse config {path}"))?;
        Ok(config)
    }

    /// Replace directories with any overrides given on the command line.
    pub fn with_overrides(
        mut self,
        verilator_dump_dir: Option<Utf8PathBuf>,
        fpga_dump_dir: Option<Utf8PathBuf>,
    ) -> Self {
        if let Some(dir) = verilator_dump_dir {
            self.verilator_dump_dir = dir;
        }
        if let Some(dir) = fpga_dump_dir {
            self.fpga_dump_dir = dir;
        }
        self
    }
}
