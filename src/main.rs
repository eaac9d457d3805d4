//! `gnome2webcss` - translate GTK theme stylesheets into web CSS.
//!
//! Each file named on the command line is translated as a whole and the
//! result is written to stdout. The first file that cannot be read or parsed
//! stops the run.

mod error;
mod log_init;
mod selftest;

use clap::Parser;
use error::{AppError, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about = "Translate GTK/GNOME theme CSS into standard web CSS")]
struct Args {
    /// Stylesheets to translate, processed in order
    files: Vec<PathBuf>,

    /// Run the built-in grammar self-test instead of translating files
    #[arg(long)]
    test: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append log records to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn translate_file(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("translating {} ({} bytes)", path.display(), source.len());
    gtkcss::translate(&source).map_err(|source| AppError::Translate {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: &Args) -> Result<()> {
    log_init::init_logger(
        log_init::level_for_verbosity(args.verbose),
        args.log_file.as_deref(),
    )?;

    if args.test {
        return selftest::run();
    }

    for path in &args.files {
        let css = translate_file(path)?;
        println!("{}", css);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flag_and_files() {
        let args = Args::parse_from(["gnome2webcss", "--test", "-vv", "a.css", "b.css"]);
        assert!(args.test);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.files, vec![PathBuf::from("a.css"), PathBuf::from("b.css")]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = translate_file(Path::new("/nonexistent/theme.css")).unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/theme.css: "));
    }
}
