use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use version_gate::config::{self, CiEnvironment};
use version_gate::git::{Git2Repository, UnavailableRepository};
use version_gate::warning::GateWarning;
use version_gate::{logging, ui, VersionGate};

#[derive(clap::Parser)]
#[command(
    name = "version-gate",
    version,
    about = "Check that version metadata is valid and moves forward with every change"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Repository root")]
    root: PathBuf,

    #[arg(long, help = "Version file path relative to the repository root")]
    version_file: Option<String>,

    #[arg(long, help = "Target branch of the pull request [default: $GITHUB_BASE_REF]")]
    base_ref: Option<String>,

    #[arg(long, help = "Path to the CI event payload [default: $GITHUB_EVENT_PATH]")]
    event_path: Option<PathBuf>,

    #[arg(long = "label", help = "Additional label that signals a release")]
    labels: Vec<String>,

    #[arg(long, help = "Fail when the baseline diff cannot be computed")]
    strict_diff: bool,

    #[arg(long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match config::load_config(args.config.as_deref(), &args.root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Some(path) = args.version_file {
        config.version_path = path;
    }
    config.release_labels.extend(args.labels);
    if args.strict_diff {
        config.change_detection.strict = true;
    }

    let ci = CiEnvironment::from_env();
    let env = CiEnvironment::new(
        args.base_ref.or(ci.base_ref),
        args.event_path.or(ci.event_path),
    );
    let gate = VersionGate::new(&config, &env, &args.root);
    let mut warnings = Vec::new();

    let verdict = match Git2Repository::open(&args.root) {
        Ok(repo) => gate.run(&repo, &mut warnings),
        Err(e) => {
            warnings.push(GateWarning::RepositoryUnavailable {
                root: args.root.clone(),
                reason: e.to_string(),
            });
            gate.run(&UnavailableRepository::new(e.to_string()), &mut warnings)
        }
    };

    for warning in &warnings {
        ui::display_warning(warning);
    }

    match verdict {
        Ok(verdict) => {
            ui::display_success(&verdict.to_string());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
