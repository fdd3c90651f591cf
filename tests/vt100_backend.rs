//! Virtual terminal backend for TUI render tests.
//!
//! Feeds ratatui's cell diff through a `vt100::Parser` as real ANSI, so tests
//! observe what a terminal would show: text, colors, attributes and cursor.

use std::fmt;
use std::io::{self, Write};

use crossterm::Command;
use crossterm::{cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Modifier};

pub struct VT100Backend {
    parser: vt100::Parser,
    width: u16,
    height: u16,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
        }
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }

    /// Screen contents as plain text, rows joined by newlines.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// Column of the first occurrence of `needle` on screen, with its row.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        let screen = self.parser.screen();
        screen
            .rows(0, self.width)
            .enumerate()
            .find_map(|(row, text)| {
                text.find(needle)
                    .map(|byte| (text[..byte].chars().count() as u16, row as u16))
            })
    }

    /// Cursor as `(column, row)`.
    pub fn cursor(&self) -> (u16, u16) {
        let (row, col) = self.parser.screen().cursor_position();
        (col, row)
    }

    fn emit(&mut self, command: impl Command) {
        let mut buf = String::new();
        let _ = command.write_ansi(&mut buf);
        self.parser.process(buf.as_bytes());
    }
}

impl Write for VT100Backend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contents())
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut buf = String::new();
        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_style = None;

        for (x, y, cell) in content {
            if last_pos != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut buf);
            }

            let cell_style = cell.style();
            if last_style != Some(cell_style) {
                let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(&mut buf);
                for attribute in attributes(cell_style.add_modifier) {
                    let _ = style::SetAttribute(attribute).write_ansi(&mut buf);
                }
                if let Some(fg) = cell_style.fg.and_then(to_crossterm_color) {
                    let _ = style::SetForegroundColor(fg).write_ansi(&mut buf);
                }
                if let Some(bg) = cell_style.bg.and_then(to_crossterm_color) {
                    let _ = style::SetBackgroundColor(bg).write_ansi(&mut buf);
                }
                last_style = Some(cell_style);
            }

            buf.push_str(cell.symbol());
            last_pos = Some((x + 1, y));
        }

        self.parser.process(buf.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (x, y) = self.cursor();
        Ok(Position::new(x, y))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        self.emit(cursor::MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.emit(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: Size::new(self.width, self.height),
            pixels: Size::new(self.width * 8, self.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn attributes(modifier: Modifier) -> Vec<style::Attribute> {
    use style::Attribute;

    let mut out = Vec::new();
    for (flag, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ] {
        if modifier.contains(flag) {
            out.push(attribute);
        }
    }
    out
}

fn to_crossterm_color(color: Color) -> Option<style::Color> {
    use style::Color as CColor;

    match color {
        Color::Reset => None,
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
    }
}
