// SPDX-License-Identifier: MPL-2.0
use iced_tempo::app::{self, Flags};
use iced_tempo::logging;
use std::path::PathBuf;

const HELP: &str = "\
IcedTempo: media player with variable speed and target-duration playback

USAGE:
  iced_tempo [OPTIONS] [FILES_OR_DIR...]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --verbose            Debug logging (ICED_TEMPO_LOG overrides)
  -h, --help           Print this help

ARGS:
  FILES_OR_DIR         Media files or a folder to play
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains("--verbose");
    logging::init(verbose);

    let lang = optional_value(&mut args, "--lang");
    let config_dir = optional_value(&mut args, "--config-dir");

    let paths: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
    tracing::debug!(?lang, ?config_dir, count = paths.len(), "starting");

    app::run(Flags {
        lang,
        paths,
        config_dir,
    })
}

/// Reads an optional `--flag value`, logging and ignoring malformed input.
fn optional_value(args: &mut pico_args::Arguments, flag: &'static str) -> Option<String> {
    match args.opt_value_from_str::<_, String>(flag) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag, error = %err, "ignoring invalid argument");
            None
        }
    }
}
