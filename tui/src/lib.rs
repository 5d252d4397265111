//! TUI rendering for DayPredictor using ratatui.

mod effects;
mod hit;
mod input;
mod theme;

pub use effects::apply_reveal;
pub use hit::{HitMap, HitTarget};
pub use input::{InputPump, PointerCapture, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use daypredict_engine::{App, DAYS, Day, Presentation, SliderMetrics, TrackGeometry, Verdict};

const CARD_MAX_WIDTH: u16 = 52;
const SLIDER_LABEL: &str = "SLIDE TO PREDICT";
const PREDICT_AGAIN: &str = "[ Predict Again ]";

const HERO_TITLE: (&str, &str) = ("The Future of ", "Chronological Prediction");
const HERO_TAGLINE: &str = "Leveraging quantum entanglement, blockchain-backed temporal arrays, \
    and a really big calendar we bought at the dollar store to accurately predict what day \
    comes after today.";

const TECH_HEADING: &str = "Our \"Core Technology\"";
const TECH_SUBHEADING: &str = "How we achieve 100% accuracy in predicting tomorrow \
    (unless it's a leap year, then we get confused).";
const TECH_CARDS: [(&str, &str); 3] = [
    (
        "Quantum Guessing",
        "We put all 7 days in a box. Until you open it, tomorrow is simultaneously Monday and Friday.",
    ),
    (
        "AI-Powered If-Statements",
        "Our neural network consists of exactly 7 highly optimized 'if' statements written by an intern.",
    ),
    (
        "NASA Satellites",
        "We bounce signals off the moon just to feel important while checking the system clock.",
    ),
];

/// Main draw function. Rebuilds `hits` for the controls drawn this frame.
pub fn draw(frame: &mut Frame, app: &mut App, hits: &mut HitMap) {
    hits.clear();
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Hero
            Constraint::Min(16),   // Predictor card
            Constraint::Length(9), // Technology
            Constraint::Length(4), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette, &glyphs);
    draw_hero(frame, chunks[1], &palette);
    draw_card(frame, app, chunks[2], hits, &palette, &glyphs);
    draw_technology(frame, chunks[3], &palette, &glyphs);
    draw_footer(frame, app, chunks[4], &palette, &glyphs);
}

fn panel(palette: &Palette) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel(palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" D ", Style::default().fg(palette.text_primary).bg(palette.primary_dim)),
        Span::raw(" "),
        Span::styled("DayPredictor", styles::heading(palette)),
    ]));
    frame.render_widget(logo, cols[0]);

    let link = styles::link(palette);
    let nav = Paragraph::new(Line::from(vec![
        Span::styled("Predict", link),
        Span::raw("   "),
        Span::styled("Technology", link),
        Span::raw("   "),
        Span::styled("About", link),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(nav, cols[1]);

    let badge = Paragraph::new(Line::from(vec![
        Span::styled(glyphs.online, styles::badge_online(palette)),
        Span::styled(" System Online ", styles::badge_online(palette)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(badge, cols[2]);
}

fn draw_hero(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled(HERO_TITLE.0, styles::heading(palette)),
            Span::styled(HERO_TITLE.1, styles::heading(palette).fg(palette.primary)),
        ]),
        Line::from(Span::styled(
            HERO_TAGLINE,
            Style::default().fg(palette.text_secondary),
        )),
    ];
    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn draw_card(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = area.width.min(CARD_MAX_WIDTH);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = panel(palette)
        .title(Line::from(Span::styled(" Day Predictor AI ", styles::heading(palette))).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Badge
            Constraint::Length(1),
            Constraint::Min(1), // Body
        ])
        .split(inner);

    let badge = Paragraph::new(Span::styled(
        " Please kids stay away ",
        styles::badge_warning(palette),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(badge, rows[0]);

    let body = rows[2];
    // Geometry first so the presentation borrow below is read-only.
    if app.phase().is_choosing()
        && let Some(slider) = slider_area(body)
    {
        let track = Block::bordered().inner(slider);
        app.set_slider_track(TrackGeometry {
            left: f32::from(track.x),
            width: f32::from(track.width),
        });
    }

    let view = app.presentation();
    if let Some(verdict) = view.verdict {
        let body = app
            .reveal_effect()
            .filter(|effect| !effect.is_finished())
            .map_or(body, |effect| apply_reveal(effect, body));
        draw_result(frame, verdict, body, hits, palette, glyphs);
    } else if let Some(message) = view.message {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        draw_loading(frame, &view, message, spinner, body, palette);
    } else {
        let metrics = app.settings().slider();
        draw_choosing(frame, &view, metrics, body, hits, palette, glyphs);
    }
}

/// Bottom three rows of the card body hold the slider.
fn slider_area(body: Rect) -> Option<Rect> {
    if body.height < 3 {
        return None;
    }
    Some(Rect {
        y: body.y + body.height - 3,
        height: 3,
        ..body
    })
}

fn draw_choosing(
    frame: &mut Frame,
    view: &Presentation<'_>,
    metrics: SliderMetrics,
    body: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let prompt = Paragraph::new(Span::styled(
        "Tomorrow is which day?",
        Style::default().fg(palette.text_secondary),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, Rect { height: 1, ..body });

    let grid = Rect {
        y: body.y + 2,
        height: body.height.saturating_sub(2 + 3 + 1).min(7),
        ..body
    };
    draw_day_grid(frame, view.selected_day, grid, hits, palette, glyphs);

    if let Some(slider) = slider_area(body) {
        draw_slider(frame, view, metrics, slider, hits, palette, glyphs);
    }
}

/// Two columns for Monday..Saturday, Sunday centred underneath.
fn draw_day_grid(
    frame: &mut Frame,
    selected: Option<Day>,
    area: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rows = DAYS.len().div_ceil(2) as u16;
    if area.height < rows || area.width < 8 {
        return;
    }
    // Spread the rows out when there is space for a gap between them.
    let stride = if area.height >= rows * 2 - 1 { 2 } else { 1 };
    let button_width = (area.width - 3) / 2;

    for (i, day) in DAYS.iter().copied().enumerate() {
        let row = (i / 2) as u16;
        let y = area.y + row * stride;
        let x = if i == DAYS.len() - 1 {
            area.x + (area.width - button_width) / 2
        } else if i % 2 == 0 {
            area.x + 1
        } else {
            area.x + 2 + button_width
        };
        let rect = Rect::new(x, y, button_width, 1);
        let is_selected = selected == Some(day);
        let label = if is_selected {
            format!("{} {}", glyphs.selected, day.name())
        } else {
            day.name().to_string()
        };
        let button = Paragraph::new(fit_width(&label, button_width))
            .alignment(Alignment::Center)
            .style(styles::day_button(palette, is_selected));
        frame.render_widget(button, rect);
        hits.add_day(day, rect);
    }
}

fn draw_slider(
    frame: &mut Frame,
    view: &Presentation<'_>,
    metrics: SliderMetrics,
    area: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let enabled = view.slider_enabled;
    let border = if enabled {
        palette.primary_dim
    } else {
        palette.text_disabled
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.bg_highlight));
    let track = block.inner(area);
    frame.render_widget(block, area);
    if track.width == 0 || track.height == 0 {
        return;
    }

    let handle_width = (metrics.handle_width.round() as u16).clamp(1, track.width);
    let padding = metrics.handle_padding.max(0.0).round() as u16;
    let travel = track
        .width
        .saturating_sub(padding.saturating_add(handle_width));
    let offset = (padding / 2)
        .saturating_add((view.slider_display.fraction() * f32::from(travel)).round() as u16);
    let handle_x = track.x + offset.min(track.width - handle_width);

    let fill_width = (handle_x - track.x)
        .saturating_add(handle_width / 2)
        .min(track.width);
    if fill_width > 0 {
        let fill = Block::default().style(Style::default().bg(palette.primary_dim));
        frame.render_widget(fill, Rect::new(track.x, track.y, fill_width, 1));
    }

    let label_style = if enabled {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_disabled)
    };
    if SLIDER_LABEL.width() <= track.width as usize {
        let label = Paragraph::new(Span::styled(SLIDER_LABEL, label_style))
            .alignment(Alignment::Center);
        frame.render_widget(label, Rect { height: 1, ..track });
    }

    let handle_style = if enabled {
        styles::slider_handle(palette, view.drag_active)
    } else {
        Style::default()
            .fg(palette.text_disabled)
            .bg(palette.bg_panel)
    };
    let handle_rect = Rect::new(handle_x, track.y, handle_width, 1);
    frame.render_widget(Clear, handle_rect);
    let handle = Paragraph::new(fit_width(glyphs.chevron, handle_width))
        .alignment(Alignment::Center)
        .style(handle_style);
    frame.render_widget(handle, handle_rect);

    if enabled {
        hits.set_slider_handle(Rect::new(handle_x, area.y, handle_width, area.height));
    }
}

fn draw_loading(
    frame: &mut Frame,
    view: &Presentation<'_>,
    message: &str,
    spinner: &str,
    body: Rect,
    palette: &Palette,
) {
    let top = body.height.saturating_sub(5) / 2;
    let area = Rect {
        y: body.y + top,
        height: body.height - top,
        ..body
    };
    let lines = vec![
        Line::from(Span::styled(
            spinner.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            styles::loading_message(palette),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("step {}", view.message_index + 1),
            Style::default().fg(palette.text_muted),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_result(
    frame: &mut Frame,
    verdict: Verdict,
    area: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_panel)),
        area,
    );

    let (icon, accent) = if verdict.is_correct {
        (glyphs.correct, palette.success)
    } else {
        (glyphs.wrong, palette.error)
    };
    let lines = vec![
        Line::from(Span::styled(
            icon,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            verdict.headline(),
            styles::heading(palette).fg(accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            verdict.tagline(),
            Style::default().fg(palette.text_secondary),
        )),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let text_height = area.height.saturating_sub(2);
    frame.render_widget(text, Rect { height: text_height, ..area });

    if area.height < 2 {
        return;
    }
    let label_width = PREDICT_AGAIN.width() as u16;
    let button_width = label_width.min(area.width);
    let button = Rect::new(
        area.x + (area.width - button_width) / 2,
        area.y + area.height - 1,
        button_width,
        1,
    );
    let widget = Paragraph::new(fit_width(PREDICT_AGAIN, button_width)).style(
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.primary_dim)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(widget, button);
    hits.set_predict_again(button);
}

fn draw_technology(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.height < 3 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let heading =
        Paragraph::new(Span::styled(TECH_HEADING, styles::heading(palette))).alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);
    let sub = Paragraph::new(Span::styled(
        fit_width(TECH_SUBHEADING, area.width),
        Style::default().fg(palette.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(sub, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(rows[2]);

    for (i, (title, desc)) in TECH_CARDS.iter().enumerate() {
        let block = panel(palette).title(Line::from(vec![
            Span::raw(" "),
            Span::raw(glyphs.tech_icons[i]),
            Span::raw(" "),
            Span::styled(*title, styles::heading(palette)),
            Span::raw(" "),
        ]));
        let card = Paragraph::new(Span::styled(
            *desc,
            Style::default().fg(palette.text_secondary),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(card, cols[i]);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel(palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let notice = format!(
        "{} {} DayPredictor AI. Not responsible if tomorrow never comes.",
        glyphs.copyright,
        app.current_year()
    );
    let notice = Paragraph::new(Span::styled(
        fit_width(&notice, inner.width),
        Style::default().fg(palette.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(notice, Rect { height: 1, ..inner });

    if inner.height < 2 {
        return;
    }
    let row = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };
    let brand = Paragraph::new(Span::styled(" DayPredictor AI", styles::heading(palette)));
    frame.render_widget(brand, row);
    let link = styles::link(palette);
    let links = Paragraph::new(Line::from(vec![
        Span::styled("Privacy Policy", link),
        Span::raw("   "),
        Span::styled("Terms of Service ", link),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(links, row);
}

/// Cut `text` to at most `max` display columns, marking the cut with "...".
fn fit_width(text: &str, max: u16) -> String {
    let max = max as usize;
    if text.width() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 3 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
