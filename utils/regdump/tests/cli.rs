use std::path::Path;
use std::process::{Command, Output};

use regdump::RegisterFile;

fn registers(seed: u32) -> RegisterFile {
    let mut regs = RegisterFile::new();
    for idx in 1..32 {
        regs.set(idx, seed.wrapping_mul(idx as u32));
    }
    regs
}

fn write_case(
    sim: &Path,
    fpga: &Path,
    name: &str,
    verilator: &RegisterFile,
    board: &RegisterFile,
) {
    std::fs::write(
        sim.join(format!("{name}.hex.txt")),
        format!("Simulation finished\n{verilator}\n"),
    )
    .unwrap();
    let ret: String = board
        .as_slice()
        .iter()
        .enumerate()
        .map(|(idx, value)| format!("ret[{idx:2}] = 0x{value:08x}\n"))
        .collect();
    std::fs::write(fpga.join(format!("{name}.ret")), ret).unwrap();
}

fn run(sim: &Path, fpga: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_regdump-compare"))
        .arg("--verilator-dir")
        .arg(sim)
        .arg("--fpga-dir")
        .arg(fpga)
        .args(extra)
        .output()
        .unwrap()
}

struct Layout {
    _root: tempfile::TempDir,
    sim: std::path::PathBuf,
    fpga: std::path::PathBuf,
}

fn layout() -> Layout {
    let root = tempfile::tempdir().unwrap();
    let sim = root.path().join("dump");
    let fpga = root.path().join("results_fpga");
    std::fs::create_dir(&sim).unwrap();
    std::fs::create_dir(&fpga).unwrap();
    Layout {
        _root: root,
        sim,
        fpga,
    }
}

#[test]
fn prints_one_line_per_discovered_testcase() {
    let dirs = layout();
    write_case(&dirs.sim, &dirs.fpga, "add_basic", &registers(7), &registers(7));
    let mut board = registers(3);
    board.set(17, 1);
    write_case(&dirs.sim, &dirs.fpga, "branch", &registers(3), &board);

    let output = run(&dirs.sim, &dirs.fpga, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "OK: add_basic\nError: branch x17 verilator=51, fpga=1\n"
    );
}

#[test]
fn strict_mode_fails_on_mismatch() {
    let dirs = layout();
    let mut board = registers(3);
    board.set(4, 0);
    write_case(&dirs.sim, &dirs.fpga, "sub", &registers(3), &board);

    let output = run(&dirs.sim, &dirs.fpga, &["--strict"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn named_testcases_skip_discovery() {
    let dirs = layout();
    write_case(&dirs.sim, &dirs.fpga, "lw", &registers(5), &registers(5));
    write_case(&dirs.sim, &dirs.fpga, "sw", &registers(5), &registers(6));

    let output = run(&dirs.sim, &dirs.fpga, &["lw"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "OK: lw\n");
}

#[test]
fn missing_fpga_dump_aborts_run() {
    let dirs = layout();
    write_case(&dirs.sim, &dirs.fpga, "fib", &registers(2), &registers(2));
    std::fs::remove_file(dirs.fpga.join("fib.ret")).unwrap();

    let output = run(&dirs.sim, &dirs.fpga, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("fib.ret"), "{stderr}");
}

#[test]
fn config_file_supplies_directories() {
    let dirs = layout();
    write_case(&dirs.sim, &dirs.fpga, "jal", &registers(9), &registers(9));
    let config = dirs.sim.parent().unwrap().join("regdump.yaml");
    std::fs::write(
        &config,
        format!(
            "verilatorDumpDir: {}\nfpgaDumpDir: {}\n",
            dirs.sim.display(),
            dirs.fpga.display()
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_regdump-compare"))
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "OK: jal\n");
}
