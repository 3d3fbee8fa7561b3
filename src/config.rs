//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::types::DEFAULT_VOLUME;

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "term-tetris", version, about)]
pub struct Opts {
    /// Seed for the piece randomizer (random when omitted)
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Background music file
    #[arg(long, env = "TETRIS_MUSIC", default_value = "assets/music.mp3")]
    pub music: PathBuf,

    /// Initial music volume, 0 to 1
    #[arg(long, env = "TETRIS_VOLUME", default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Disable background music
    #[arg(long, env = "TETRIS_NO_MUSIC")]
    pub no_music: bool,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,
}

/// Settings resolved from [`Opts`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u64,
    /// `None` when music is disabled.
    pub music: Option<PathBuf>,
    pub volume: f32,
    pub log_file: Option<PathBuf>,
    pub frame: Duration,
}

impl Config {
    pub fn from_opts(opts: Opts) -> Self {
        let volume = if opts.volume.is_nan() {
            DEFAULT_VOLUME
        } else {
            opts.volume.clamp(0.0, 1.0)
        };
        Self {
            seed: opts.seed.unwrap_or_else(rand::random),
            music: (!opts.no_music).then_some(opts.music),
            volume,
            log_file: opts.log_file,
            frame: Duration::from_millis(u64::from(1000 / opts.fps.max(1))),
        }
    }

    pub fn from_args() -> Self {
        Self::from_opts(Opts::parse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("term-tetris").chain(args.iter().copied());
        Config::from_opts(Opts::try_parse_from(argv).unwrap())
    }

    #[test]
    fn explicit_flags() {
        let config = parse(&[
            "--seed",
            "42",
            "--music",
            "song.ogg",
            "--volume",
            "0.8",
            "--log-file",
            "game.log",
            "--fps",
            "30",
        ]);
        assert_eq!(config.seed, 42);
        assert_eq!(config.music, Some(PathBuf::from("song.ogg")));
        assert_eq!(config.volume, 0.8);
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(config.frame, Duration::from_millis(33));
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(parse(&["--volume", "3"]).volume, 1.0);
        assert_eq!(parse(&["--volume=-1"]).volume, 0.0);
    }

    #[test]
    fn no_music_drops_path() {
        let config = parse(&["--seed", "1", "--no-music"]);
        assert_eq!(config.music, None);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(Opts::try_parse_from(["term-tetris", "--fps", "0"]).is_err());
    }
}
