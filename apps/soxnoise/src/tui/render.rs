//! Draws the status line and help overlay from a [`View`] snapshot.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use noise_model::{NoiseColor, ParameterState};
use playback::PlaybackStatus;

pub const TOO_SMALL: &str = "Term too small";

const HELP_TITLE: &str = "In help";
const HELP_TITLE_COLUMN: u16 = 48;
const HELP_LINES: [(u16, &str, Color); 7] = [
    (2, "9/0 : adjusts volume", Color::Reset),
    (3, "c/C : adjusts center frequency", Color::Reset),
    (4, "r/R : adjusts reverb level", Color::Reset),
    (5, "m : mute the audio", Color::Reset),
    (7, "p/b/w : selects different noise profiles", Color::Reset),
    (8, " (p)ink (b)rown (w)hite", Color::Green),
    (9, "  press h to exit help", Color::Red),
];

pub struct View<'a> {
    pub params: &'a ParameterState,
    pub status: PlaybackStatus,
    pub help: bool,
}

impl View<'_> {
    fn segments(&self) -> [(String, Color); 4] {
        let params = self.params;
        [
            (params.color().to_string(), color_of(params.color())),
            (format!(" vol. {}", params.volume()), Color::Cyan),
            (format!("  (r)everb. {}", params.reverb_depth()), Color::Red),
            (
                format!("  (c)enterHz. {}", params.center_frequency_hz()),
                Color::Green,
            ),
        ]
    }

    fn status_line(&self) -> String {
        let mut line = match self.status {
            PlaybackStatus::Playing { pid } => format!("playing (pid {pid})"),
            PlaybackStatus::Finished(outcome) if outcome.success => "finished".to_string(),
            PlaybackStatus::Finished(outcome) => match outcome.code {
                Some(code) => format!("synthesizer exited with code {code}"),
                None => "synthesizer was killed".to_string(),
            },
            PlaybackStatus::Stopped => "stopped".to_string(),
        };
        if self.params.is_muted() {
            line.push_str(" [muted]");
        }
        if let Some(duration) = self.params.duration() {
            line.push_str(&format!(" for {duration}"));
        }
        line.push_str("  h: help  q: quit");
        line
    }

    fn required_size(&self) -> (u16, u16) {
        let segments_width: usize = self
            .segments()
            .iter()
            .map(|(text, _)| text.chars().count())
            .sum();

        if self.help {
            let help_width = HELP_LINES
                .iter()
                .map(|(_, text, _)| text.chars().count())
                .max()
                .unwrap_or(0)
                .max(HELP_TITLE_COLUMN as usize + HELP_TITLE.len())
                .max(segments_width);
            (clamp_u16(help_width), 10)
        } else {
            let width = segments_width.max(self.status_line().chars().count());
            (clamp_u16(width), 2)
        }
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn color_of(color: NoiseColor) -> Color {
    match color {
        NoiseColor::Pink => Color::Magenta,
        NoiseColor::Brown => Color::Red,
        NoiseColor::White => Color::White,
    }
}

/// Clears the screen and draws `view`. If the terminal is smaller than the
/// layout only [`TOO_SMALL`] is drawn.
pub fn render<W: Write>(out: &mut W, view: &View<'_>, size: (u16, u16)) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;

    let (cols, rows) = size;
    let (need_cols, need_rows) = view.required_size();
    if cols < need_cols || rows < need_rows {
        queue!(out, Print(TOO_SMALL))?;
        return out.flush();
    }

    for (text, color) in view.segments() {
        queue!(out, SetForegroundColor(color), Print(text))?;
    }

    if view.help {
        queue!(
            out,
            MoveTo(HELP_TITLE_COLUMN, 0),
            SetForegroundColor(Color::Reset),
            Print(HELP_TITLE)
        )?;
        for (row, text, color) in HELP_LINES {
            queue!(out, MoveTo(0, row), SetForegroundColor(color), Print(text))?;
        }
    } else {
        queue!(
            out,
            MoveTo(0, 1),
            SetForegroundColor(Color::DarkGrey),
            Print(view.status_line())
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
