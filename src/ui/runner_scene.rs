//! Jump Runner scene rendering.
//!
//! The play field is drawn into a cell buffer (one char plus colors per
//! terminal cell) scaled from field units, then stamped row-by-row as
//! Paragraph widgets so every cell keeps its own colors.

use super::game_common::{render_game_over_modal, render_key_hints, scene_layout};
use crate::core::game_state::{Rect as FieldRect, Snapshot};
use crate::core::constants::GROUND_THICKNESS;
use crate::input::PointerTargets;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ── Palette ─────────────────────────────────────────────────────────
const BG: Color = Color::Rgb(17, 24, 39);
const GROUND: Color = Color::Rgb(31, 41, 55);
const ACTOR: Color = Color::Rgb(34, 211, 238);
const OBSTACLE: Color = Color::Rgb(244, 63, 94);
const TEXT: Color = Color::Rgb(226, 232, 240);
const DUST: Color = Color::Rgb(55, 65, 81);

const ACTOR_CHAR: char = '█';
const OBSTACLE_CHAR: char = '▓';
const GROUND_CHAR: char = '▀';
const GROUND_SUB: char = '░';

const INFO_PANEL_WIDTH: u16 = 24;

/// Render the whole scene. Returns the regions a pointer press can hit.
pub fn render_runner_scene(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    seed: u64,
) -> PointerTargets {
    let layout = scene_layout(frame, area, " Jump Runner ", Color::LightCyan, INFO_PANEL_WIDTH);

    render_play_field(frame, layout.field, snapshot);
    render_keys(frame, layout.keys, snapshot);
    render_info_panel(frame, layout.side, snapshot, seed);

    let restart_button = if snapshot.running {
        None
    } else {
        render_game_over_modal(frame, layout.field, snapshot.score)
    };

    PointerTargets {
        play_field: Some(layout.field),
        restart_button,
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: TEXT,
            bg: BG,
        }
    }
}

/// Field-to-cell mapping for one frame.
struct Scale {
    x: f64,
    y: f64,
    cols: usize,
    rows: usize,
}

impl Scale {
    /// Cell span covered by a field rectangle, clipped to the buffer.
    /// Anything at least partly on screen covers at least one cell.
    fn cells(&self, rect: &FieldRect) -> Option<(usize, usize, usize, usize)> {
        let col0 = (rect.x * self.x).floor();
        let col1 = (rect.right() * self.x).ceil().max(col0 + 1.0);
        let row0 = (rect.y * self.y).floor();
        let row1 = (rect.bottom() * self.y).ceil().max(row0 + 1.0);

        if col1 <= 0.0 || row1 <= 0.0 || col0 >= self.cols as f64 || row0 >= self.rows as f64 {
            return None;
        }

        let clip = |v: f64, max: usize| v.max(0.0).min(max as f64) as usize;
        Some((
            clip(col0, self.cols),
            clip(col1, self.cols),
            clip(row0, self.rows),
            clip(row1, self.rows),
        ))
    }
}

fn fill(buffer: &mut [Vec<Cell>], scale: &Scale, rect: &FieldRect, cell: Cell) {
    if let Some((col0, col1, row0, row1)) = scale.cells(rect) {
        for row in &mut buffer[row0..row1] {
            for slot in &mut row[col0..col1] {
                *slot = cell;
            }
        }
    }
}

fn write_text(buffer: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    let Some(line) = buffer.get_mut(row) else {
        return;
    };
    for (i, ch) in text.chars().enumerate() {
        if let Some(slot) = line.get_mut(col + i) {
            *slot = Cell { ch, fg, bg: BG };
        }
    }
}

/// Speed rounded to one decimal, as shown in the HUD.
pub fn format_speed(speed: f64) -> String {
    format!("{:.1}", (speed * 10.0).round() / 10.0)
}

/// Background, ground, obstacles, actor and HUD.
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let scale = Scale {
        x: area.width as f64 / snapshot.field_width,
        y: area.height as f64 / snapshot.field_height,
        cols: area.width as usize,
        rows: area.height as usize,
    };
    let mut buffer = vec![vec![Cell::default(); scale.cols]; scale.rows];

    // ── Drifting dust, moving with the scroll ─────────────────────────
    let drift = snapshot.tick_count as f64 * snapshot.speed * scale.x * 0.25;
    for &(base_x, y_frac, pattern) in &[
        (0.12_f64, 0.15_f64, "."),
        (0.40, 0.30, ".."),
        (0.65, 0.10, "."),
        (0.85, 0.45, "..."),
    ] {
        let row = (y_frac * scale.rows as f64) as usize;
        let col = (base_x * scale.cols as f64 - drift).rem_euclid(scale.cols as f64) as usize;
        for (i, ch) in pattern.chars().enumerate() {
            let c = (col + i) % scale.cols;
            if row < scale.rows {
                buffer[row][c] = Cell {
                    ch,
                    fg: DUST,
                    bg: BG,
                };
            }
        }
    }

    // ── Ground line and the earth below it ────────────────────────────
    let ground = FieldRect::new(0.0, snapshot.ground_y, snapshot.field_width, GROUND_THICKNESS);
    fill(
        &mut buffer,
        &scale,
        &ground,
        Cell {
            ch: GROUND_CHAR,
            fg: GROUND,
            bg: BG,
        },
    );
    let ground_row = ((snapshot.ground_y + GROUND_THICKNESS) * scale.y).ceil() as usize;
    for row in buffer.iter_mut().skip(ground_row) {
        for (i, slot) in row.iter_mut().enumerate() {
            if (i + (snapshot.tick_count as usize / 4)) % 6 == 0 {
                *slot = Cell {
                    ch: GROUND_SUB,
                    fg: GROUND,
                    bg: BG,
                };
            }
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &snapshot.obstacles {
        fill(
            &mut buffer,
            &scale,
            obstacle,
            Cell {
                ch: OBSTACLE_CHAR,
                fg: OBSTACLE,
                bg: BG,
            },
        );
    }

    // ── Actor ─────────────────────────────────────────────────────────
    fill(
        &mut buffer,
        &scale,
        &snapshot.actor,
        Cell {
            ch: ACTOR_CHAR,
            fg: ACTOR,
            bg: BG,
        },
    );

    // ── HUD ───────────────────────────────────────────────────────────
    let score_text = format!("Score: {}", snapshot.score);
    let speed_text = format!("Speed: {}", format_speed(snapshot.speed));
    write_text(&mut buffer, 0, 1, &score_text, TEXT);
    let speed_col = scale.cols.saturating_sub(speed_text.len() + 1);
    write_text(&mut buffer, 0, speed_col, &speed_text, TEXT);

    // ── Stamp buffer rows ─────────────────────────────────────────────
    for (row_idx, row) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current = Cell::default();
        let mut text = String::new();

        for &cell in row {
            if (cell.fg != current.fg || cell.bg != current.bg) && !text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut text),
                    Style::default().fg(current.fg).bg(current.bg),
                ));
            }
            current = cell;
            text.push(cell.ch);
        }
        if !text.is_empty() {
            spans.push(Span::styled(
                text,
                Style::default().fg(current.fg).bg(current.bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_keys(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if snapshot.running {
        render_key_hints(
            frame,
            area,
            "Run!",
            Color::LightCyan,
            &[("Space/Up/Click", "jump"), ("Q/Esc", "quit")],
        );
    } else {
        render_key_hints(
            frame,
            area,
            "Crashed",
            Color::Red,
            &[("R/Enter", "restart"), ("Q/Esc", "quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, seed: u64) {
    let block = Block::default()
        .title(" Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format_speed(snapshot.speed), value),
        ]),
        Line::from(vec![
            Span::styled("Spawn every: ", label),
            Span::styled(format!("{} ticks", snapshot.spawn_interval), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("On screen: ", label),
            Span::styled(snapshot.obstacles.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Cleared: ", label),
            Span::styled(snapshot.obstacles_passed.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Tick: ", label),
            Span::styled(snapshot.tick_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Seed: ", label),
            Span::styled(seed.to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", ACTOR_CHAR), Style::default().fg(ACTOR)),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", OBSTACLE_CHAR), Style::default().fg(OBSTACLE)),
            Span::styled("Obstacle", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
