//! Frame rendering.
//!
//! Layout, top to bottom: pulsing title, optional HP/MP/XP strip, input
//! box, list viewport, status line. One-shot item transitions shift or
//! restyle individual rows; looping chrome keys off the frame tick.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};
use unicode_width::UnicodeWidthStr;

use questlog_types::ui::{InputMode, StepKind, Transition};
use questlog_types::Item;

use crate::app::App;
use crate::effects;
use crate::theme::{styles, Theme};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = *app.theme();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg)),
        area,
    );

    let mut constraints = vec![Constraint::Length(3)];
    if theme.show_status_strip {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    draw_title(frame, app, &theme, chunks[next]);
    next += 1;
    if theme.show_status_strip {
        draw_status_strip(frame, app, &theme, chunks[next]);
        next += 1;
    }
    draw_input(frame, app, &theme, chunks[next]);
    next += 1;
    draw_list(frame, app, &theme, chunks[next]);
    next += 1;
    draw_status_line(frame, app, &theme, chunks[next]);

    if app.level_up_active() {
        draw_level_up_overlay(frame, app, &theme, area);
    }
}

fn draw_title(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let pulse = effects::title_pulse(app.frame_tick(), app.options().reduced_motion);
    let color = effects::lerp_color(theme.palette.title, theme.palette.accent, pulse * 0.7);

    let title = Paragraph::new(Line::from(Span::styled(
        theme.title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.palette.border))
            .style(Style::default().bg(theme.palette.bg_panel)),
    );
    frame.render_widget(title, area);
}

fn draw_status_strip(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.palette.border))
        .style(Style::default().bg(theme.palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // HP drains as the log fills; MP is flavor; XP tracks real progress.
    let hp = (100_u32.saturating_sub(app.list().len() as u32 * 10)) as f32 / 100.0;
    let mp = 0.7;
    let xp = app.xp_display();

    let mut spans = vec![Span::styled(
        format!("LV {:<2} ", app.xp().level()),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(meter_spans(theme, "HP", hp, theme.palette.hp));
    spans.extend(meter_spans(theme, "MP", mp, theme.palette.mp));
    spans.extend(meter_spans(theme, "XP", xp, theme.palette.xp));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

const METER_WIDTH: usize = 10;

fn meter_spans(theme: &Theme, label: &'static str, value: f32, color: ratatui::style::Color) -> Vec<Span<'static>> {
    let filled = ((value.clamp(0.0, 1.0) * METER_WIDTH as f32).round() as usize).min(METER_WIDTH);
    vec![
        Span::styled(format!("{label} "), Style::default().fg(theme.palette.text_muted)),
        Span::styled(
            theme.glyphs.meter_filled.repeat(filled),
            Style::default().fg(color),
        ),
        Span::styled(
            theme.glyphs.meter_empty.repeat(METER_WIDTH - filled),
            Style::default().fg(theme.palette.text_muted),
        ),
        Span::raw("  "),
    ]
}

fn draw_input(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let reduced = app.options().reduced_motion;
    let area = match (reduced, app.input_effect().and_then(Transition::active)) {
        (false, Some((StepKind::Shake, progress))) => {
            offset_x(area, effects::shake_offset(progress))
        }
        _ => area,
    };

    let border = effects::glow_color(
        app.frame_tick(),
        theme.palette.border,
        theme.palette.border_glow,
        reduced,
    );

    let draft = app.draft();
    let insert = app.mode() == InputMode::Insert;

    let line = if draft.text().is_empty() && !insert {
        Line::from(Span::styled(
            theme.placeholder,
            Style::default().fg(theme.palette.text_muted),
        ))
    } else {
        let mut spans = vec![Span::styled(
            draft.text().to_owned(),
            Style::default().fg(theme.palette.text),
        )];
        if insert && effects::cursor_visible(app.frame_tick(), reduced) {
            spans.push(Span::styled(
                theme.glyphs.cursor,
                Style::default().fg(theme.palette.accent),
            ));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if insert {
        let prefix: String = draft.text().chars().take(draft.cursor()).collect();
        let x = inner.x + prefix.width() as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn draw_list(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.set_list_viewport(inner);

    if app.list().is_empty() {
        draw_empty_hint(frame, app, theme, inner);
        return;
    }

    let height = usize::from(inner.height);
    let offset = app.scroll_offset();
    for (row, item) in app.list().items().iter().skip(offset).take(height).enumerate() {
        let index = offset + row;
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        draw_item_row(frame, app, theme, item, index, row_area);
    }

    if app.list().len() > height {
        let mut state = ScrollbarState::new(app.list().len().saturating_sub(height))
            .position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

fn draw_item_row(frame: &mut Frame, app: &App, theme: &Theme, item: &Item, index: usize, area: Rect) {
    let reduced = app.options().reduced_motion;
    let transition = app.transition(item.id());
    let active = transition.and_then(Transition::active);

    let mut area = area;
    let mut text_style = Style::default().fg(theme.palette.text);
    let mut indicator_style = Style::default().fg(if item.is_completed() {
        theme.palette.success
    } else {
        theme.palette.text_muted
    });

    match active {
        Some((StepKind::SlideInRight, progress)) if !reduced => {
            let max = area.width / 2;
            area = shrink_left(area, effects::slide_in_offset(progress, max));
        }
        Some((StepKind::Bounce, progress)) if !reduced => {
            area = offset_x(area, effects::bounce_offset(progress));
        }
        Some((StepKind::Shake, progress)) if !reduced => {
            area = offset_x(area, effects::shake_offset(progress));
        }
        Some((StepKind::Flash, progress)) => {
            if reduced || effects::flash_bright(progress) {
                text_style = Style::default()
                    .fg(theme.palette.success)
                    .add_modifier(Modifier::BOLD);
            }
        }
        Some((StepKind::FadeOut, progress)) => {
            let t = if reduced { 0.6 } else { progress };
            let faded = effects::lerp_color(theme.palette.text, theme.palette.bg, t);
            text_style = Style::default().fg(faded);
            indicator_style = Style::default().fg(faded);
        }
        _ => {}
    }

    if item.is_completed() && theme.strike_completed {
        text_style = Style::default()
            .fg(theme.palette.text_muted)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let selected = index == app.selected();
    let mut spans = vec![Span::styled(
        if selected { theme.glyphs.selected } else { " " },
        Style::default().fg(theme.palette.accent),
    )];
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        if item.is_completed() {
            theme.glyphs.done
        } else {
            theme.glyphs.pending
        },
        indicator_style,
    ));
    spans.push(Span::raw(" "));

    if theme.random_accents {
        if let Some(decor) = app.decor(item.id()) {
            spans.push(Span::raw(theme.emblem(decor.emblem)));
            spans.push(Span::raw(" "));
            text_style = text_style.fg(theme.accent_color(decor.accent));
        }
    }

    spans.push(Span::styled(item.label().as_str().to_owned(), text_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_empty_hint(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bob = effects::bob_offset(app.frame_tick(), app.options().reduced_motion);
    let y = (area.y + area.height / 2).saturating_sub(bob).max(area.y);
    let row = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            theme.empty_hint,
            Style::default()
                .fg(theme.palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
        row,
    );
}

fn draw_status_line(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (badge, badge_style) = match app.mode() {
        InputMode::Normal => (" NORMAL ", styles::mode_normal(&theme.palette)),
        InputMode::Insert => (" INSERT ", styles::mode_insert(&theme.palette)),
    };

    let hint = match app.status() {
        Some(message) => message.to_owned(),
        None => match app.mode() {
            InputMode::Normal => String::from(" i insert  j/k move  enter toggle  q quit"),
            InputMode::Insert => String::from(" enter add  esc back"),
        },
    };

    let count = format!(
        "{} {} ",
        app.list().len(),
        if app.list().len() == 1 { "entry" } else { "entries" }
    );
    let pad = usize::from(area.width)
        .saturating_sub(badge.width() + hint.width() + count.width());

    let line = Line::from(vec![
        Span::styled(badge, badge_style),
        Span::styled(hint, styles::status_hint(&theme.palette)),
        Span::raw(" ".repeat(pad)),
        Span::styled(count, styles::status_hint(&theme.palette)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_level_up_overlay(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let width = 24_u16.min(area.width);
    let height = 3_u16.min(area.height);
    let overlay = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("LEVEL UP!  LV {}", app.xp().level()),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.palette.accent))
                .style(Style::default().bg(theme.palette.bg_panel)),
        ),
        overlay,
    );
}

/// Shift a rect horizontally by a signed column offset. Shifting right
/// trims the width so the right edge never leaves the original bounds.
fn offset_x(area: Rect, dx: i32) -> Rect {
    if dx >= 0 {
        let dx = (dx as u16).min(area.width);
        Rect::new(area.x + dx, area.y, area.width - dx, area.height)
    } else {
        let x = i32::from(area.x).saturating_add(dx).max(0) as u16;
        Rect::new(x, area.y, area.width, area.height)
    }
}

/// Trim `columns` off the left edge, sliding content toward the right.
fn shrink_left(area: Rect, columns: u16) -> Rect {
    let columns = columns.min(area.width);
    Rect::new(
        area.x + columns,
        area.y,
        area.width - columns,
        area.height,
    )
}

#[cfg(test)]
mod tests {
    use super::{offset_x, shrink_left};
    use ratatui::layout::Rect;

    #[test]
    fn offset_x_clamps_at_the_left_edge() {
        let area = Rect::new(2, 5, 20, 1);
        assert_eq!(offset_x(area, -5).x, 0);
        assert_eq!(offset_x(area, 3).x, 5);
    }

    #[test]
    fn shrink_left_never_exceeds_width() {
        let area = Rect::new(0, 0, 10, 1);
        let shrunk = shrink_left(area, 30);
        assert_eq!(shrunk.width, 0);
        assert_eq!(shrunk.x, 10);
    }
}
