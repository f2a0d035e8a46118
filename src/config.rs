use crate::encode::{DEFAULT_OUTPUT, DEFAULT_OUTPUT_FPS};
use crate::error::{ReplayError, ReplayResult};
use crate::pipeline::FontSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub const DEFAULT_DISPLAY_FPS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_fps: u32,
    pub display_fps: u32,
    pub headless: bool,
    pub fonts: FontSource,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl ReplayConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            output_fps: DEFAULT_OUTPUT_FPS,
            display_fps: DEFAULT_DISPLAY_FPS,
            headless: false,
            fonts: FontSource::default(),
            log_file: None,
            verbose: false,
        }
    }

    pub fn validate(&self) -> ReplayResult<()> {
        if self.output_fps == 0 {
            return Err(ReplayError::config("--fps must be non-zero"));
        }
        if self.display_fps == 0 {
            return Err(ReplayError::config("--display-fps must be non-zero"));
        }
        Ok(())
    }
}

pub fn create_clap_command() -> Command {
    Command::new("warehouse_replay")
        .about("Plays back warehouse robot frames in a window and saves them as a video")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Text file of blank-line separated grid frames")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Where to write the video. A .gif extension writes a GIF, anything else goes through ffmpeg")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .value_name("N")
                .help("Frame rate of the saved video")
                .default_value("20")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("display-fps")
                .long("display-fps")
                .value_name("N")
                .help("Playback rate cap while the window is up")
                .default_value("50")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .help("Render and capture without opening a window")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("font")
                .long("font")
                .value_name("FILE")
                .help("Font file for regular text. Defaults to a system Arial or sans-serif face")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("bold-font")
                .long("bold-font")
                .value_name("FILE")
                .help("Font file for bold text (boxes and the robot)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Also write the log to this file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Debug logging")
                .action(ArgAction::SetTrue),
        )
}

pub fn handle_clap_matches(matches: &ArgMatches) -> ReplayResult<ReplayConfig> {
    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .ok_or_else(|| ReplayError::config("missing INPUT"))?;

    let mut config = ReplayConfig::new(input);
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }
    if let Some(&fps) = matches.get_one::<u32>("fps") {
        config.output_fps = fps;
    }
    if let Some(&fps) = matches.get_one::<u32>("display-fps") {
        config.display_fps = fps;
    }
    config.headless = matches.get_flag("headless");
    config.verbose = matches.get_flag("verbose");
    config.fonts = FontSource {
        regular: matches.get_one::<PathBuf>("font").cloned(),
        bold: matches.get_one::<PathBuf>("bold-font").cloned(),
    };
    config.log_file = matches.get_one::<PathBuf>("log-file").cloned();

    config.validate()?;
    Ok(config)
}
