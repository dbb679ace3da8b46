use std::io::{self, Write};

use camino::Utf8Path;
use tracing::debug;

use crate::discovery::TestCase;
use crate::error::{DumpError, Result};
use crate::fpga::parse_fpga_dump;
use crate::register_file::{NUM_REGS, RegisterFile, abi_name};
use crate::verilator::parse_verilator_dump;

/// Outcome of comparing two register vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    /// First register that differs; later registers are not inspected.
    Mismatch { index: usize, verilator: u32, fpga: u32 },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Compare x0..x31 positionally, stopping at the first difference.
///
/// Both slices must hold at least 32 values.
pub fn compare_registers(verilator: &[u32], fpga: &[u32]) -> Comparison {
    for (index, (&v, &f)) in verilator.iter().zip(fpga).take(NUM_REGS).enumerate() {
        if v != f {
            return Comparison::Mismatch {
                index,
                verilator: v,
                fpga: f,
            };
        }
    }
    Comparison::Match
}

fn require_registers(path: &Utf8Path, values: Vec<u32>) -> Result<RegisterFile> {
    let found = values.len();
    RegisterFile::from_values(&values).ok_or_else(|| DumpError::MissingRegisters {
        path: path.to_owned(),
        expected: NUM_REGS,
        found,
    })
}

/// Parse both dumps of `case` and compare them.
///
/// Either dump holding fewer than 32 values is `DumpError::MissingRegisters`,
/// even when a register before the missing ones already differs; no
/// `Comparison` is produced for such a case.
pub fn compare_testcase(case: &TestCase) -> Result<Comparison> {
    let verilator = require_registers(
        &case.verilator_dump,
        parse_verilator_dump(&case.verilator_dump)?,
    )?;
    let fpga = require_registers(&case.fpga_dump, parse_fpga_dump(&case.fpga_dump)?)?;

    let comparison = compare_registers(verilator.as_slice(), fpga.as_slice());
    if let Comparison::Mismatch { index, .. } = comparison {
        debug!(
            "{}: first mismatch in x{index} ({})\nverilator:\n{verilator}fpga:\n{fpga}",
            case.name,
            abi_name(index)
        );
    }
    Ok(comparison)
}

/// Compare one test case and write its result line to `out`.
///
/// Returns `true` when all 32 registers match.
pub fn compare_results_to<W: Write>(
    out: &mut W,
    verilator_dir: &Utf8Path,
    fpga_dir: &Utf8Path,
    testcase: &str,
) -> anyhow::Result<bool> {
    let case = TestCase::new(verilator_dir, fpga_dir, testcase);
    match compare_testcase(&case)? {
        Comparison::Match => {
            writeln!(out, "OK: {testcase}")?;
            Ok(true)
        }
        Comparison::Mismatch {
            index,
            verilator,
            fpga,
        } => {
            writeln!(
                out,
                "Error: {testcase} x{index} verilator={verilator}, fpga={fpga}"
            )?;
            Ok(false)
        }
    }
}

/// Compare one test case and print its result line to stdout.
pub fn compare_results(
    verilator_dir: &Utf8Path,
    fpga_dir: &Utf8Path,
    testcase: &str,
) -> anyhow::Result<bool> {
    compare_results_to(&mut io::stdout().lock(), verilator_dir, fpga_dir, testcase)
}
