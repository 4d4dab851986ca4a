// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, Flags, Source};
use iced_compare::media::MediaPair;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_compare - before/after image comparison

USAGE:
  iced_compare [OPTIONS] <BEFORE> <AFTER>
  iced_compare [OPTIONS] --feed <POSTS.json>

OPTIONS:
  -h, --help                  Print this help
      --lang <LOCALE>         Interface language (en-US, fr)
      --config-dir <DIR>      Directory holding settings.toml
      --fraction <0..1>       Initial divider position
      --feed <FILE>           Load compare posts from a JSON feed
      --diagnostics-out <FILE> Write the diagnostics report on exit
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let fraction = args.opt_value_from_str("--fraction")?;
    let diagnostics_out: Option<PathBuf> = args.opt_value_from_os_str("--diagnostics-out", path)?;
    let feed: Option<PathBuf> = args.opt_value_from_os_str("--feed", path)?;

    let source = match feed {
        Some(feed) => Source::Feed(feed),
        None => source_from_positional(args.finish()),
    };

    Ok(Some(Flags {
        lang,
        config_dir,
        fraction,
        diagnostics_out,
        source,
    }))
}

fn path(value: &std::ffi::OsStr) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

fn source_from_positional(rest: Vec<OsString>) -> Source {
    let mut paths = rest.into_iter().map(PathBuf::from);
    match (paths.next(), paths.next()) {
        (Some(before), Some(after)) => Source::Pair(MediaPair::new(before, after)),
        (Some(only), None) => {
            eprintln!(
                "Ignoring {}: a comparison needs two images",
                only.display()
            );
            Source::None
        }
        _ => Source::None,
    }
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
