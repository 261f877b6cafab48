use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use ncs_pkg_bumper::cli::orchestration::{run_bump_workflow, BumpRequest, BumpWorkflowArgs};
use ncs_pkg_bumper::{config, logging, ui, BumperError};

#[derive(clap::Parser)]
#[command(
    name = "ncs-pkg-bumper",
    version,
    about = "Bump the version in an NCS package-meta-data.xml file"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Path to file or its directory. Defaults to './package-meta-data.xml'"
    )]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Mode of bump one of: ['major', 'minor', 'patch']")]
    mode: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the new version without modifying the file")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase diagnostic logging")]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = BumperError::usage(e.to_string().trim_end().to_string());
            ui::display_error(&err.to_string());
            return ExitCode::from(err.exit_code());
        }
    };

    if let Err(e) = logging::setup_logging(args.verbose) {
        eprintln!("failed to set up logging: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "bump failed");
            ui::display_error(&err.to_string());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: Args) -> ncs_pkg_bumper::Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let request = BumpRequest::from_args(
        &BumpWorkflowArgs {
            path: args.path,
            mode: args.mode,
            dry_run: args.dry_run,
        },
        &config,
    )?;

    let result = run_bump_workflow(&request, &config)?;

    ui::display_package(&result.package_name);
    for warning in &result.warnings {
        ui::display_warning(warning);
    }
    ui::display_versions(&result.current_version, &result.new_version);
    if !result.written {
        ui::display_dry_run(&result.metadata_path.display().to_string());
    }

    Ok(())
}
