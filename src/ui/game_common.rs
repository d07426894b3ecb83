//! Scene frame, key-hint row and the game-over modal.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Screen regions of the runner scene.
pub struct SceneLayout {
    /// Play field, inside the outer border.
    pub field: Rect,
    /// One row of key hints under the field.
    pub keys: Rect,
    /// Side panel on the right.
    pub side: Rect,
}

/// Clear `area`, draw the titled border and split the inside into the play
/// field, the key row and a `side_width` column.
pub fn scene_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    side_width: u16,
) -> SceneLayout {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    let columns =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(side_width)]).split(inner);
    let rows = Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).split(columns[0]);

    SceneLayout {
        field: rows[0],
        keys: rows[1],
        side: columns[1],
    }
}

/// Status word followed by `(key, action)` pairs, centered on one row.
pub fn render_key_hints(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    status_color: Color,
    keys: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let mut spans = vec![Span::styled(
        status,
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, action) in keys {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );
}

pub const RESTART_LABEL: &str = "[ Restart ]";
pub const GAME_OVER_HINT: &str = "Space / ↑ : Jump · R : Restart";

/// Centered game-over box drawn over the frozen play field.
///
/// Returns the screen rectangle of the restart button, or `None` if the
/// area is too small to show the box.
pub fn render_game_over_modal(frame: &mut Frame, area: Rect, score: u64) -> Option<Rect> {
    let modal_width = 36u16;
    let modal_height = 9u16;
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if area.width < modal_width || area.height < modal_height {
        // Fall back to a single status line
        let line = Paragraph::new(Line::from(Span::styled(
            format!("GAME OVER  Score: {}  [R] Restart", score),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, Rect { height: 1, ..area });
        return None;
    }

    let x = area.x + (area.width - modal_width) / 2;
    let y = area.y + (area.height - modal_height) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your Score: {}", score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            RESTART_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(30, 41, 59))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            GAME_OVER_HINT,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);

    // Same offset the centered paragraph gives the label on line 4
    let label_width = RESTART_LABEL.len() as u16;
    Some(Rect::new(
        inner.x + (inner.width / 2).saturating_sub(label_width / 2),
        inner.y + 4,
        label_width,
        1,
    ))
}
