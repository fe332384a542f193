#![allow(
    // Lane coordinates are bounded by the view window before they are cast to terminal cells
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::app::{App, BlockKind};
use crate::config::{Config, DisplayConfig};
use crate::game::LANE_HEIGHT;
use crate::menu_types::{MenuOption, MenuState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const TITLE: &str = "POLYOMINO BRIDGE";
const BRIDGE_COLOR: Color = Color::Rgb(255, 165, 0);
const FALLING_COLOR: Color = Color::Yellow;

pub fn render(f: &mut Frame, app: &App) {
    match app.menu.state {
        MenuState::Title => render_title(f, app),
        MenuState::Game => render_game(f, app),
    }
}

/// Horizontal scroll (in lane columns) that keeps the falling piece inside the view.
///
/// The view only scrolls once the piece's far edge, measured with its larger
/// dimension so a rotation never pushes it out, passes the last visible column.
#[must_use]
pub fn view_shift(piece_x: i32, piece_width: i32, piece_height: i32, view_columns: i32) -> i32 {
    let far_edge = piece_x + piece_width.max(piece_height);
    if far_edge > view_columns {
        view_columns - far_edge
    } else {
        0
    }
}

fn render_title(f: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(3), // Title
            Constraint::Length(2), // Spacing
            Constraint::Length(3), // Options
            Constraint::Fill(1),
            Constraint::Length(2), // High score
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(FALLING_COLOR).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, centered_rect(TITLE.len() as u16 + 8, 3, layout[1]));

    let lines: Vec<Line> = MenuOption::ALL
        .iter()
        .map(|&option| {
            let style = if option == app.menu.selected_option {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![Span::styled(option.label().to_string(), style)])
        })
        .collect();
    let options = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(options, layout[3]);

    let high_score = Paragraph::new(format!("High score: {}", app.high_score.get()))
        .alignment(Alignment::Center);
    f.render_widget(high_score, layout[5]);
}

fn render_game(f: &mut Frame, app: &App) {
    render_game_with(f, app, Config::current().display);
}

/// Draws the game scene with explicit display settings.
pub fn render_game_with(f: &mut Frame, app: &App, display: DisplayConfig) {
    let display = display.clamped();
    let cell_width = display.cell_width;
    let view_columns = i32::from(display.view_columns);

    let lane_width = display
        .view_columns
        .saturating_mul(cell_width)
        .saturating_add(2); // +2 for borders
    let lane_height = LANE_HEIGHT as u16 + 2;

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(lane_width), Constraint::Min(20)])
        .split(f.area());

    let lane_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Title
            Constraint::Length(lane_height), // Lane
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, lane_layout[0]);

    render_lane(f, app, lane_layout[1], cell_width, view_columns);

    let info = Paragraph::new(format!(
        "Score: {}\nHigh score: {}\n\nControls:\n←/→: Rotate\nSpace: Drop\nQ: Quit",
        app.score(),
        app.high_score.get()
    ))
    .block(Block::default().borders(Borders::LEFT))
    .wrap(Wrap { trim: true });
    f.render_widget(info, main_layout[1]);
}

fn render_lane(f: &mut Frame, app: &App, area: Rect, cell_width: u16, view_columns: i32) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let piece = app.falling_piece();
    let shift = view_shift(
        piece.position.x,
        piece.shape.width(),
        piece.shape.height(),
        view_columns,
    );

    for (cell, kind) in app.get_render_blocks() {
        let x = cell.x + shift;
        if x < 0 || x >= view_columns || cell.y < 0 || cell.y >= LANE_HEIGHT {
            continue;
        }

        let color = match kind {
            BlockKind::Bridge => BRIDGE_COLOR,
            BlockKind::Falling => FALLING_COLOR,
        };
        let block_x = inner_area
            .left()
            .saturating_add((x as u16).saturating_mul(cell_width));
        let block_y = inner_area.top() + cell.y as u16;

        for dx in 0..cell_width {
            let column = block_x.saturating_add(dx);
            if column >= inner_area.right() || block_y >= inner_area.bottom() {
                break;
            }
            if let Some(buffer_cell) = f.buffer_mut().cell_mut((column, block_y)) {
                buffer_cell.set_symbol("█");
                buffer_cell.set_fg(color);
            }
        }
    }
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;

    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
