use std::fmt;

/// Number of integer registers in a dump.
pub const NUM_REGS: usize = 32;

const ABI_NAMES: [&str; NUM_REGS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI mnemonic of register `idx` (`"?"` outside x0..x31).
pub fn abi_name(idx: usize) -> &'static str {
    ABI_NAMES.get(idx).copied().unwrap_or("?")
}

/// Register file state as reported by a dump.
///
/// x0 is stored as dumped rather than forced to zero, so a backend that
/// reports a non-zero x0 shows up in comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Build from the first 32 parsed values; `None` if fewer are available.
    pub fn from_values(values: &[u32]) -> Option<Self> {
        let regs: [u32; NUM_REGS] = values.get(..NUM_REGS)?.try_into().ok()?;
        Some(Self { regs })
    }

    pub fn get(&self, idx: usize) -> u32 {
        self.regs.get(idx).copied().unwrap_or(0)
    }

    pub fn set(&mut self, idx: usize, value: u32) {
        if let Some(reg) = self.regs.get_mut(idx) {
            *reg = value;
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    /// Four registers per line, in the layout the simulator prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.regs.iter().enumerate() {
            let label = format!("x{idx}");
            let name = abi_name(idx);
            let name = match name.len() {
                2 => format!(" {name} "),
                3 => format!(" {name}"),
                _ => name.to_owned(),
            };
            write!(f, "{label:<3}({name}):= {value:08x}, ")?;
            if idx % 4 == 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
