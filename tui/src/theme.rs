//! Color theme and glyphs for the DayPredictor TUI.
//!
//! Deep-indigo night sky by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use daypredict_types::ui::UiOptions;

/// Night-sky palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(15, 12, 41); // #0f0c29
    pub const BG_PANEL: Color = Color::Rgb(36, 36, 62); // #24243e
    pub const BG_HIGHLIGHT: Color = Color::Rgb(48, 43, 99); // #302b63
    pub const BG_BORDER: Color = Color::Rgb(96, 92, 140);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(214, 212, 232);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 146, 186);
    pub const TEXT_DISABLED: Color = Color::Rgb(88, 84, 122);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(168, 85, 247); // purple-500
    pub const PRIMARY_DIM: Color = Color::Rgb(99, 102, 241); // indigo-500

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(59, 130, 246); // blue-500
    pub const CYAN: Color = Color::Rgb(103, 232, 249); // cyan-300
    pub const GREEN: Color = Color::Rgb(74, 222, 128); // green-400
    pub const YELLOW: Color = Color::Rgb(254, 240, 138); // yellow-200
    pub const RED: Color = Color::Rgb(248, 113, 113); // red-400

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = YELLOW;
    pub const ERROR: Color = RED;
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
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub blue: Color,
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
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            blue: colors::BLUE,
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
            text_disabled: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            blue: Color::Blue,
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

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub online: &'static str,
    pub correct: &'static str,
    pub wrong: &'static str,
    pub chevron: &'static str,
    pub selected: &'static str,
    pub copyright: &'static str,
    pub tech_icons: [&'static str; 3],
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            online: "*",
            correct: "OK",
            wrong: "X",
            chevron: ">>",
            selected: ">",
            copyright: "(c)",
            tech_icons: ["[#]", "{~}", "(o)"],
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            online: "●",
            correct: "✓",
            wrong: "✗",
            chevron: "»",
            selected: "▸",
            copyright: "©",
            tech_icons: ["📦", "🧠", "🛰"],
            spinner_frames: SPINNER_FRAMES,
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

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn day_button(palette: &Palette, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text_secondary)
                .bg(palette.bg_highlight)
        }
    }

    #[must_use]
    pub fn slider_handle(palette: &Palette, dragging: bool) -> Style {
        if dragging {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_border)
                .add_modifier(Modifier::BOLD)
        }
    }

    #[must_use]
    pub fn badge_online(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn badge_warning(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn loading_message(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}
