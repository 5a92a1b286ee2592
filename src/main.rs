mod tagger;

use std::env;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use wave::args::{parse, FlagSpec};
use wave::error::{Result, WaveError};
use wave::status::ExitStatus;
use wave::{version_line, Command, Config};

const HELP: &str = "\
OVERVIEW: A command line tool to help with basic audio metadata editing.

USAGE: wave audio_file.mp3 [options]

OPTIONS:
--version    (-v)   Outputs wave's current version
--verbose    (-vv)  Prints out what wave is currently doing
--summarize  (-s)   Outputs a summary of the track.
--set-artist (-a)   Sets the artist(s) of the track.
--set-title  (-t)   Sets the title of the track.
--set-album  (-l)   Sets the album to which the track belongs to.
--set-genre  (-g)   Sets the genre(s) to which the track belongs to.
--set-year   (-y)   Sets the year in which the track was published.
--set-art    (-r)   Sets the cover of the track to a specified image path, only supports jpeg and png.
--help       (-h)   Displays this help message and exits.";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "wave=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<()> {
    for path in &config.files {
        tagger::tag_file(path, config)?;
    }
    debug!("processed {} file(s)", config.files.len());
    Ok(())
}

fn main() -> ExitStatus {
    let command = parse(env::args_os().skip(1), &FlagSpec::wave())
        .map_err(WaveError::from)
        .and_then(|parsed| Command::from_args(&parsed));

    let result = match command {
        Ok(Command::Help) => {
            println!("{}", HELP);
            return ExitStatus::Success;
        }
        Ok(Command::Version) => {
            println!("{}", version_line());
            return ExitStatus::Success;
        }
        Ok(Command::Run(config)) => {
            init_logging(config.verbose);
            run(&config)
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            eprintln!("{}", err);
            err.exit_status()
        }
    }
}
