use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use regdump::{Config, compare_results, discover_testcases};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regdump-compare")]
#[command(about = "Compare Verilator and FPGA register dumps")]
#[command(version)]
struct Args {
    /// Test cases to compare (default: every *.hex.txt in the Verilator dump directory)
    #[arg(value_name = "TESTCASE")]
    testcases: Vec<String>,

    /// YAML file with verilatorDumpDir / fpgaDumpDir
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,

    /// Directory holding <name>.hex.txt dumps
    #[arg(long)]
    verilator_dir: Option<Utf8PathBuf>,

    /// Directory holding <name>.ret dumps
    #[arg(long)]
    fpga_dir: Option<Utf8PathBuf>,

    /// Exit with status 1 if any test case mismatches
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "regdump=warn",
        1 => "regdump=info",
        _ => "regdump=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(args.verilator_dir, args.fpga_dir);

    let testcases = if args.testcases.is_empty() {
        discover_testcases(&config.verilator_dump_dir).with_context(|| {
            format!("Failed to discover test cases in {}", config.verilator_dump_dir)
        })?
    } else {
        args.testcases
    };

    let mut matched = 0;
    for testcase in &testcases {
        if compare_results(&config.verilator_dump_dir, &config.fpga_dump_dir, testcase)
            .with_context(|| format!("Failed to compare {testcase}"))?
        {
            matched += 1;
        }
    }
    info!("{}/{} test cases matched", matched, testcases.len());

    if args.strict && matched != testcases.len() {
        std::process::exit(1);
    }
    Ok(())
}
