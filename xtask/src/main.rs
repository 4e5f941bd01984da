use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "hola_lambda";
const DIST_DIR: &str = "dist";
/// Executable name the `provided.al2023` runtime launches from the zip root.
const BOOTSTRAP_ENTRY: &str = "bootstrap";

type TaskResult = Result<(), String>;

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the hola lambda workspace",
    long_about = "CI checks and Lambda packaging for the hola lambda workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::All)]
        job: CiJob,
    },
    /// Build the Lambda binary and zip it as `bootstrap`
    ServerlessPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CiJob {
    /// cargo fmt --check and clippy with warnings denied
    Check,
    /// Tests for hola_core and hola_lambda
    Test,
    /// check, then test
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

fn cargo_task(label: &str, args: &[&str]) -> TaskResult {
    eprintln!("\n=== {label} ===\n+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|error| format!("{label}: could not start cargo: {error}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{label}: cargo exited with {status}"))
    }
}

fn run_ci(job: CiJob) -> TaskResult {
    if matches!(job, CiJob::Check | CiJob::All) {
        cargo_task("fmt", &["fmt", "--all", "--", "--check"])?;
        cargo_task(
            "clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        )?;
    }
    if matches!(job, CiJob::Test | CiJob::All) {
        for package in ["hola_core", LAMBDA_PACKAGE] {
            cargo_task(&format!("test {package}"), &["test", "-p", package])?;
        }
    }
    Ok(())
}

fn serverless_package(target: &str, profile: BuildProfile) -> Result<PathBuf, String> {
    ensure_rust_target_installed(target)?;

    let mut build_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--bin",
        LAMBDA_PACKAGE,
        "--target",
        target,
    ];
    build_args.extend(profile.as_cargo_flag());
    cargo_task(&format!("build {LAMBDA_PACKAGE}"), &build_args)?;

    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(binary_file_name(target));
    fs::create_dir_all(DIST_DIR)
        .map_err(|error| format!("cannot create {DIST_DIR}/ for {LAMBDA_PACKAGE}: {error}"))?;

    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_PACKAGE}.zip"));
    package_lambda_zip(&binary_path, &zip_path)?;
    Ok(zip_path)
}

/// Skips the check with a warning when rustup is unavailable.
fn ensure_rust_target_installed(target: &str) -> TaskResult {
    let output = match Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            return Err(format!(
                "rustup could not list installed targets: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
        Err(error) => {
            eprintln!("warning: rustup unavailable ({error}); assuming `{target}` is installed");
            return Ok(());
        }
    };

    if target_listed(&String::from_utf8_lossy(&output.stdout), target) {
        Ok(())
    } else {
        Err(format!(
            "{LAMBDA_PACKAGE} targets `{target}`, which is not installed; run `rustup target add {target}`"
        ))
    }
}

fn target_listed(installed: &str, target: &str) -> bool {
    installed.lines().map(str::trim).any(|line| line == target)
}

fn binary_file_name(target: &str) -> String {
    if target.contains("windows") {
        format!("{LAMBDA_PACKAGE}.exe")
    } else {
        LAMBDA_PACKAGE.to_string()
    }
}

fn package_lambda_zip(binary_path: &Path, zip_path: &Path) -> TaskResult {
    let binary = fs::read(binary_path).map_err(|error| {
        format!(
            "{LAMBDA_PACKAGE} binary unreadable at '{}': {error}",
            binary_path.display()
        )
    })?;

    write_bootstrap_zip(&binary, zip_path).map_err(|error| {
        format!(
            "cannot write {LAMBDA_PACKAGE} zip '{}': {error}",
            zip_path.display()
        )
    })
}

fn write_bootstrap_zip(binary: &[u8], zip_path: &Path) -> zip::result::ZipResult<()> {
    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file(BOOTSTRAP_ENTRY, options)?;
    zip.write_all(binary)?;
    zip.finish()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Ci { job } => run_ci(job).map(|()| eprintln!("\nCI job passed.")),
        Commands::ServerlessPackage { target, profile } => serverless_package(&target, profile)
            .map(|zip_path| eprintln!("\nPackaged artifact:\n- {}", zip_path.display())),
    };

    if let Err(error) = outcome {
        eprintln!("error: {error}");
        exit(1);
    }
}
