use anyhow::{Context, Result};
use camino::Utf8Path;
use regdump::{Comparison, NUM_REGS, TestCase, abi_name, compare_testcase};

/// Fixture dumps shipped with the testbench.
pub const DUMPS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/dumps");

/// Fixtures named `mismatch_x<N>...` first differ at register x<N>.
pub const MISMATCH_PREFIX: &str = "mismatch_x";

/// What a fixture is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Match,
    /// First differing register.
    Mismatch(usize),
}

impl Expectation {
    pub fn for_testcase(name: &str) -> Result<Self> {
        let Some(rest) = name.strip_prefix(MISMATCH_PREFIX) else {
            return Ok(Expectation::Match);
        };
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest, |end| &rest[..end]);
        let index = digits
            .parse::<usize>()
            .ok()
            .filter(|&index| index < NUM_REGS)
            .with_context(|| {
                format!("Fixture {name} does not name a register after {MISMATCH_PREFIX}")
            })?;
        Ok(Expectation::Mismatch(index))
    }
}

/// Compare Verilator and FPGA dumps of one test case.
pub fn compare_dumps(
    verilator_dir: &Utf8Path,
    fpga_dir: &Utf8Path,
    name: &str,
) -> Result<Comparison> {
    let case = TestCase::new(verilator_dir, fpga_dir, name);
    compare_testcase(&case).with_context(|| format!("Failed to compare {name}"))
}

fn describe_mismatch(index: usize, verilator: u32, fpga: u32) -> String {
    format!(
        "x{}({}): verilator=0x{:08x}, fpga=0x{:08x}",
        index,
        abi_name(index),
        verilator,
        fpga
    )
}

/// Check a fixture against the expectation encoded in its name.
pub fn check_fixture(verilator_dir: &Utf8Path, fpga_dir: &Utf8Path, name: &str) -> Result<()> {
    let expectation = Expectation::for_testcase(name)?;
    let comparison = compare_dumps(verilator_dir, fpga_dir, name)?;
    check_comparison(expectation, comparison)
}

/// Check a comparison outcome against what the fixture expects.
pub fn check_comparison(expectation: Expectation, comparison: Comparison) -> Result<()> {
    match (expectation, comparison) {
        (Expectation::Match, Comparison::Match) => Ok(()),
        (
            Expectation::Match,
            Comparison::Mismatch {
                index,
                verilator,
                fpga,
            },
        ) => anyhow::bail!(
            "Register mismatch {}",
            describe_mismatch(index, verilator, fpga)
        ),
        (Expectation::Mismatch(expected), Comparison::Match) => {
            anyhow::bail!("Expected a mismatch at x{expected}, but all registers matched")
        }
        (
            Expectation::Mismatch(expected),
            Comparison::Mismatch {
                index,
                verilator,
                fpga,
            },
        ) if index != expected => anyhow::bail!(
            "Expected the first mismatch at x{}, found {}",
            expected,
            describe_mismatch(index, verilator, fpga)
        ),
        (
            Expectation::Mismatch(_),
            Comparison::Mismatch {
                index,
                verilator,
                fpga,
            },
        ) => {
            println!(
                "Detected expected mismatch {}",
                describe_mismatch(index, verilator, fpga)
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expectation_follows_name_prefix() {
        assert_eq!(
            Expectation::for_testcase("add_basic").unwrap(),
            Expectation::Match
        );
        assert_eq!(
            Expectation::for_testcase("mismatch_x17").unwrap(),
            Expectation::Mismatch(17)
        );
        assert_eq!(
            Expectation::for_testcase("mismatch_x5_short").unwrap(),
            Expectation::Mismatch(5)
        );
    }

    #[test]
    fn mismatch_name_without_register_is_rejected() {
        assert!(Expectation::for_testcase("mismatch_xa").is_err());
        assert!(Expectation::for_testcase("mismatch_x32").is_err());
    }

    #[test]
    fn first_mismatch_must_be_the_named_register() {
        let later = Comparison::Mismatch {
            index: 20,
            verilator: 0,
            fpga: 0x99,
        };
        let err = check_comparison(Expectation::Mismatch(5), later).unwrap_err();
        assert!(err.to_string().contains("x5"), "{err}");
        assert!(err.to_string().contains("x20(s4)"), "{err}");

        let named = Comparison::Mismatch {
            index: 5,
            verilator: 2,
            fpga: 3,
        };
        assert!(check_comparison(Expectation::Mismatch(5), named).is_ok());
    }

    #[test]
    fn expected_mismatch_that_matches_fails() {
        assert!(check_comparison(Expectation::Mismatch(17), Comparison::Match).is_err());
        assert!(check_comparison(Expectation::Match, Comparison::Match).is_ok());
    }

    #[test]
    fn mismatch_description_names_register() {
        assert_eq!(
            describe_mismatch(17, 0x5d, 0x5e),
            "x17(a7): verilator=0x0000005d, fpga=0x0000005e"
        );
    }
}
