use crate::error::{ReplayError, ReplayResult};
use crate::core::Symbol;
use std::path::Path;

/// One snapshot of the warehouse grid. Rows aren't required to have the same
/// length, and nothing checks that every frame has the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    rows: Vec<Vec<char>>,
}

impl Frame {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// First robot in row-major order, as (column, row).
    pub fn robot_position(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&c| Symbol::from_char(c) == Some(Symbol::Robot))
                .map(|x| (x, y))
        })
    }

    fn push_row(&mut self, line: &str) {
        self.rows.push(line.chars().collect());
    }
}

/// Splits text into frames. Any blank (or whitespace-only) line closes the
/// frame being built; runs of blank lines never yield empty frames.
pub fn parse_frames(content: &str) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut current = Frame::default();

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            if !current.is_empty() {
                frames.push(std::mem::take(&mut current));
            }
        } else {
            current.push_row(line);
        }
    }

    if !current.is_empty() {
        frames.push(current);
    }

    frames
}

pub fn read_frames(path: &Path) -> ReplayResult<Vec<Frame>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ReplayError::InputNotFound(path.to_path_buf()),
        _ => ReplayError::Io(e),
    })?;
    let frames = parse_frames(&content);
    log::debug!("parsed {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> Frame {
        Frame::new(rows.iter().map(|r| r.chars().collect()).collect())
    }

    #[test]
    fn two_frames() {
        let frames = parse_frames("#.@\n...\n\n#.@\n..@\n");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frame(&["#.@", "..."]));
        assert_eq!(frames[1], frame(&["#.@", "..@"]));
        assert_eq!((frames[0].height(), frames[0].width()), (2, 3));
    }

    #[test]
    fn unterminated_last_frame_is_kept() {
        let frames = parse_frames("##\n#@\n\n\n\n##\n@#");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], frame(&["##", "@#"]));
    }

    #[test]
    fn leading_and_whitespace_only_lines_are_separators() {
        let frames = parse_frames("\n\n  \n#\n \t \n.\r\n\r\n");
        assert_eq!(frames, vec![frame(&["#"]), frame(&["."])]);
    }

    #[test]
    fn empty_input_has_no_frames() {
        assert!(parse_frames("").is_empty());
        assert!(parse_frames("\n\n   \n").is_empty());
    }

    #[test]
    fn irregular_rows_are_kept_as_is() {
        let frames = parse_frames("#####\n#@\n#..x.#..\n");
        assert_eq!(frames.len(), 1);
        let lens: Vec<_> = frames[0].rows().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![5, 2, 8]);
        assert_eq!(frames[0].width(), 5);
        assert_eq!(frames[0].get(3, 2), Some('x'));
        assert_eq!(frames[0].get(3, 1), None);
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "#[]@\n....\n\n#[]#\n.@..\n\n";
        assert_eq!(parse_frames(text), parse_frames(text));
    }

    #[test]
    fn robot_is_found_row_major() {
        assert_eq!(frame(&["#.@", "..."]).robot_position(), Some((2, 0)));
        assert_eq!(frame(&["#..", ".@.", "@.."]).robot_position(), Some((1, 1)));
        assert_eq!(frame(&["#..", "..."]).robot_position(), None);
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let path = std::env::temp_dir().join("warehouse_replay_definitely_missing.txt");
        match read_frames(&path) {
            Err(ReplayError::InputNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected {other:?}"),
        }
    }
}
