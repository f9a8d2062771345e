// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::logging;
use std::process::ExitCode;

const HELP: &str = "\
Art Space - a small art gallery viewer

USAGE:
  art_space [OPTIONS]

OPTIONS:
  --lang <LANG>         Interface language (en-US, fr, es)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = logging::init_logging() {
        eprintln!("{err}");
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    match app::run(flags.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            eprintln!("{}", app::localized_error(&flags, &err));
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
