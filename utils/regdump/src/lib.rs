mod compare;
mod config;
mod discovery;
mod dump;
mod error;
mod fpga;
mod register_file;
mod verilator;

// Re-export public API
pub use compare::{
    Comparison, compare_registers, compare_results, compare_results_to, compare_testcase,
};
pub use config::{Config, DEFAULT_FPGA_DUMP_DIR, DEFAULT_VERILATOR_DUMP_DIR};
pub use discovery::{FPGA_SUFFIX, TestCase, VERILATOR_SUFFIX, discover_testcases, testcase_name};
pub use dump::{FIELD_WIDTH, hex_field};
pub use error::{DumpError, Result};
pub use fpga::{FPGA_COLUMN, parse_fpga_dump, parse_fpga_str};
pub use register_file::{NUM_REGS, RegisterFile, abi_name};
pub use verilator::{VERILATOR_COLUMNS, parse_verilator_dump, parse_verilator_str};
