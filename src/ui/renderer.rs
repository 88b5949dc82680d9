use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{Board, Cell, Game, GameState};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2; // rows + borders
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(20), // Info panel
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_info(f, game, info_area);

    if game.game_state == GameState::Over {
        render_game_over_overlay(f, board_area);
    }
}

/// Settled cells with the active piece drawn on top.
pub fn compose_cells(game: &Game) -> [[Cell; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut cells = *game.board.rows();

    if let Some(piece) = &game.current_piece {
        for (x, y) in piece.cells() {
            if Board::in_bounds(x, y) {
                cells[y as usize][x as usize] = Cell::Filled(piece.color);
            }
        }
    }

    cells
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let cells = compose_cells(game);
    let mut board_lines = Vec::with_capacity(BOARD_HEIGHT);

    for (y, row) in cells.iter().enumerate() {
        let mut line_spans = Vec::with_capacity(BOARD_WIDTH);
        for (x, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
                Cell::Filled(color) => {
                    line_spans.push(Span::styled("█▉", Style::default().fg(*color)));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, game: &Game, area: Rect) {
    let state_text = match game.game_state {
        GameState::Playing => Span::styled("Playing", Style::default().fg(Color::Green)),
        GameState::Over => Span::styled("Game over", Style::default().fg(Color::Red)),
    };

    let info_text = vec![
        Line::from(vec![state_text]),
        Line::from(vec![Span::raw(format!("Tick {}ms", game.tick_interval().as_millis()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("← →  move")]),
        Line::from(vec![Span::raw("↑ r  rotate")]),
        Line::from(vec![Span::raw("↓    drop")]),
        Line::from(vec![Span::raw("n    new game")]),
        Line::from(vec![Span::raw("q    quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).title("Info"))
        .alignment(Alignment::Left);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 30, area);
    f.render_widget(Clear, popup_area);

    let over_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("N: new game")]),
        Line::from(vec![Span::raw("Q: quit")]),
    ];

    let over_widget = Paragraph::new(over_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(over_widget, popup_area);
}
