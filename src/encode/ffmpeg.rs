use crate::encode::{ensure_parent_dir, VideoBuffer, VideoEncoder};
use crate::error::{ReplayError, ReplayResult};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// H.264 MP4 through the system `ffmpeg`, fed raw rgb24 frames on stdin.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    pub program: String,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }
}

impl FfmpegEncoder {
    fn command(&self, width: u32, height: u32, fps: u32, out_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.args([
            "-y",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
            "-s",
            &format!("{width}x{height}"),
            "-r",
            &fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            // yuv420p needs even dimensions
            "-vf",
            "pad=ceil(iw/2)*2:ceil(ih/2)*2",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(out_path);
        cmd
    }
}

impl VideoEncoder for FfmpegEncoder {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn encode(&self, video: &VideoBuffer, fps: u32, out_path: &Path) -> ReplayResult<()> {
        let (width, height) = video.dimensions()?;
        if let Some((i, frame)) = video
            .frames()
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.dimensions() != (width, height))
        {
            return Err(ReplayError::encode(format!(
                "frame {i} is {}x{}, expected {width}x{height}",
                frame.width(),
                frame.height()
            )));
        }
        ensure_parent_dir(out_path)?;

        let mut child = self
            .command(width, height, fps, out_path)
            .spawn()
            .map_err(|e| {
                ReplayError::encode(format!(
                    "failed to spawn {} (is it installed and on PATH?): {e}",
                    self.program
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ReplayError::encode("failed to open ffmpeg stdin"))?;

        // a broken pipe means ffmpeg bailed; its stderr says why, so keep going to the wait
        let write_error = video
            .frames()
            .iter()
            .enumerate()
            .find_map(|(i, frame)| stdin.write_all(frame.as_raw()).err().map(|e| (i, e)));
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|e| ReplayError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(ReplayError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if let Some((i, e)) = write_error {
            return Err(ReplayError::encode(format!(
                "failed to write frame {i} to ffmpeg: {e}: {}",
                stderr.trim()
            )));
        }

        log::debug!("ffmpeg wrote {} frames to {}", video.len(), out_path.display());
        Ok(())
    }
}
