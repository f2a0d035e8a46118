use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use warehouse_replay::encode::is_ffmpeg_on_path;
use warehouse_replay::pipeline::FontSet;
use warehouse_replay::{run, ReplayConfig, ReplayError};

const TWO_FRAMES: &str = "#.@\n...\n\n#.@\n..@\n";

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("warehouse_replay_e2e_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn headless_config(input: &str, output: PathBuf) -> ReplayConfig {
    let input_path = scratch(&format!("{}.txt", output.file_name().unwrap().to_string_lossy()));
    std::fs::write(&input_path, input).unwrap();
    let mut config = ReplayConfig::new(input_path);
    config.output = output;
    config.headless = true;
    config.display_fps = 1000;
    config
}

#[test]
fn two_frames_become_a_two_frame_gif() {
    if FontSet::system().is_err() {
        eprintln!("skipping: no system fonts");
        return;
    }
    let out = scratch("two_frames.gif");
    let config = headless_config(TWO_FRAMES, out.clone());

    let report = run(&config).unwrap();
    assert_eq!((report.frames_total, report.frames_captured), (2, 2));
    assert!(!report.interrupted);

    let decoder = GifDecoder::new(BufReader::new(File::open(&out).unwrap())).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 2);
    // 3 columns of 529px, 2 rows plus the 40px header
    assert_eq!(frames[0].buffer().dimensions(), (1587, 1098));
    assert_eq!(frames[0].delay().numer_denom_ms(), (50, 1));
}

fn is_ffprobe_on_path() -> bool {
    Command::new("ffprobe")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Decodes the whole video stream and returns how many frames it holds.
fn count_video_frames(path: &Path) -> u32 {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-count_frames",
            "-show_entries",
            "stream=nb_read_frames",
            "-of",
            "csv=p=0",
        ])
        .arg(path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .trim_end_matches(',')
        .parse()
        .unwrap()
}

#[test]
fn two_frames_become_a_two_frame_mp4() {
    if FontSet::system().is_err() || !is_ffmpeg_on_path() || !is_ffprobe_on_path() {
        eprintln!("skipping: needs system fonts, ffmpeg and ffprobe");
        return;
    }
    let out = scratch("two_frames.mp4");
    let config = headless_config(TWO_FRAMES, out.clone());

    let report = run(&config).unwrap();
    assert_eq!(report.frames_captured, 2);
    assert_eq!(count_video_frames(&out), 2);
}

#[test]
fn missing_input_is_reported() {
    let config = ReplayConfig::new(scratch("does_not_exist.txt"));
    assert!(matches!(run(&config), Err(ReplayError::InputNotFound(_))));
}

#[test]
fn blank_input_is_an_empty_animation() {
    let config = headless_config("\n   \n\n", scratch("blank.gif"));
    assert!(matches!(run(&config), Err(ReplayError::EmptyAnimation)));
}
