//! In-place terminal repaint

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Writer that overwrites the block of lines it printed last time
///
/// Rows wider than the terminal wrap, so the block height is counted in
/// screen lines rather than rows.
pub struct LiveWriter<W: Write> {
    out: W,
    /// Screen lines printed by the previous repaint
    lines: u16,
    /// Fixed terminal width; `None` means rows never wrap
    width: Option<u16>,
    /// Ask the terminal for its width on every repaint
    detect_width: bool,
}

impl LiveWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            detect_width: true,
            ..Self::new(io::stdout())
        }
    }
}

impl<W: Write> LiveWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines: 0,
            width: None,
            detect_width: false,
        }
    }

    /// Use a fixed terminal width instead of querying the terminal
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self.detect_width = false;
        self
    }

    fn current_width(&self) -> Option<u16> {
        if self.detect_width {
            terminal::size().ok().map(|(cols, _)| cols)
        } else {
            self.width
        }
    }

    /// Replace the previously printed block with `rows`
    pub fn repaint(&mut self, rows: &[String]) -> io::Result<()> {
        if self.lines > 0 {
            queue!(
                self.out,
                MoveToPreviousLine(self.lines),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        let width = self.current_width();
        let mut lines: u16 = 0;
        for row in rows {
            writeln!(self.out, "{row}")?;
            lines = lines.saturating_add(screen_lines(row, width));
        }
        self.lines = lines;

        self.out.flush()
    }

    pub fn lines(&self) -> u16 {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Number of terminal lines `row` occupies at `width` columns
fn screen_lines(row: &str, width: Option<u16>) -> u16 {
    match width {
        Some(width) if width > 0 => {
            let width = usize::from(width);
            let lines = visible_width(row).div_ceil(width).max(1);
            u16::try_from(lines).unwrap_or(u16::MAX)
        }
        _ => 1,
    }
}

/// Printed width of `row`, skipping ANSI CSI escape sequences
fn visible_width(row: &str) -> usize {
    let mut width = 0;
    let mut chars = row.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC [ params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}
