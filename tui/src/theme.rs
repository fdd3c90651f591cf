//! Color theme and glyphs for the FLAMES TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.
//! Result cards are tinted with each result's own accent gradient.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use flames_engine::{Accent, ResultIcon, Rgb, UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const PRIMARY_DIM: Color = Color::Rgb(147, 138, 169); // springViolet1
    pub const PINK: Color = Color::Rgb(210, 126, 153); // sakuraPink

    // === Accent Colors ===
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Semantic Aliases ===
    pub const ERROR: Color = RED;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub pink: Color,
    pub error: Color,
    pub peach: Color,
    /// Result accents collapse to `primary` when false.
    pub true_color_accents: bool,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            pink: colors::PINK,
            error: colors::ERROR,
            peach: colors::PEACH,
            true_color_accents: true,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            pink: Color::LightMagenta,
            error: Color::Red,
            peach: Color::Yellow,
            true_color_accents: false,
        }
    }

    /// Leading color of a result accent.
    #[must_use]
    pub fn accent_color(&self, accent: Accent) -> Color {
        if self.true_color_accents {
            rgb(accent.from)
        } else {
            self.primary
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

fn rgb(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Spread a two-stop accent across `text`, one span per char.
#[must_use]
pub fn gradient_spans(
    text: &str,
    accent: Accent,
    palette: &Palette,
    base: Style,
) -> Vec<Span<'static>> {
    if !palette.true_color_accents {
        return vec![Span::styled(text.to_string(), base.fg(palette.primary))];
    }
    let count = text.chars().count();
    let steps = count.saturating_sub(1).max(1) as f32;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let t = i as f32 / steps;
            let Rgb(r0, g0, b0) = accent.from;
            let Rgb(r1, g1, b1) = accent.to;
            let color = Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t));
            Span::styled(c.to_string(), base.fg(color))
        })
        .collect()
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub heart: &'static str,
    pub heart_outline: &'static str,
    pub sparkle: &'static str,
    pub selected: &'static str,
    pub progress_filled: &'static str,
    pub progress_empty: &'static str,
    pub spinner_frames: &'static [&'static str],
    pub friends: &'static str,
    pub love: &'static str,
    pub affection: &'static str,
    pub marriage: &'static str,
    pub enemy: &'static str,
    pub sister: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn icon(&self, icon: ResultIcon) -> &'static str {
        match icon {
            ResultIcon::Users => self.friends,
            ResultIcon::Heart => self.love,
            ResultIcon::Sparkles => self.affection,
            ResultIcon::Home => self.marriage,
            ResultIcon::UserX => self.enemy,
            ResultIcon::UsersRound => self.sister,
        }
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "<3",
            heart_outline: "<3",
            sparkle: "*",
            selected: ">",
            progress_filled: "#",
            progress_empty: "-",
            spinner_frames: SPINNER_FRAMES_ASCII,
            friends: "(^_^)(^_^)",
            love: "<3",
            affection: "*~*",
            marriage: "o=o",
            enemy: ">:(",
            sister: "(^.^)(^.^)",
        }
    } else {
        Glyphs {
            heart: "♥",
            heart_outline: "♡",
            sparkle: "✦",
            selected: "▸",
            progress_filled: "█",
            progress_empty: "░",
            spinner_frames: SPINNER_FRAMES,
            friends: "☺ ☺",
            love: "♥",
            affection: "✦",
            marriage: "⚭",
            enemy: "⚔",
            sister: "♀ ♀",
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Beating heart for the form header; static under reduced motion.
#[must_use]
pub fn heart_frame(tick: usize, options: UiOptions) -> &'static str {
    let glyphs = glyphs(options);
    // ~8ms frames: swap roughly every half second
    if options.reduced_motion || (tick / 60) % 2 == 0 {
        glyphs.heart
    } else {
        glyphs.heart_outline
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn field_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn field_border(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default().fg(palette.pink)
        } else {
            Style::default().fg(palette.bg_border)
        }
    }

    #[must_use]
    pub fn placeholder(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.pink)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_outline(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }

    #[must_use]
    pub fn struck(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
