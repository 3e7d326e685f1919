use maze_grid::prelude::{viewport_origin, MazeView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::{AppState, EditorMode};

const BG: Color = Color::Rgb(16, 18, 24);
const FG: Color = Color::Rgb(230, 228, 218);
const MUTED: Color = Color::Rgb(146, 148, 154);
const ACCENT: Color = Color::Rgb(233, 199, 104);

const PANEL_WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = outer_rows(area);
    render_title(frame, rows[0], state);

    let body = body_columns(rows[1]);
    render_maze(frame, body[0], state);
    render_panel(frame, body[1], state);
    render_status(frame, rows[2], state);

    match state.mode {
        EditorMode::Help => render_help(frame, area),
        EditorMode::ConfirmQuit => render_confirm_quit(frame, area),
        EditorMode::Edit => {}
    }
}

/// Inner rectangle the maze text is drawn into, derived from the same
/// layout as [`render`] so mouse clicks can be mapped back to characters.
pub fn maze_text_area(area: Rect) -> Rect {
    let rows = outer_rows(area);
    let body = body_columns(rows[1]);
    body[0].inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

/// Scroll offset of the maze view, shared between drawing and click mapping.
pub fn maze_scroll(state: &AppState, inner: Rect) -> (u16, u16) {
    viewport_origin(
        state.cursor.0,
        state.cursor.1,
        state.maze.text_width(),
        state.maze.text_height(),
        inner.width,
        inner.height,
    )
}

fn outer_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
}

fn body_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)])
        .split(area)
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let size = state.maze.size;
    let mut spans = vec![
        Span::styled(" mazetui ", Style::default().fg(BG).bg(ACCENT)),
        Span::raw(" "),
        Span::styled(
            format!("{}x{}", size, size),
            Style::default().fg(FG).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(file) = &state.file {
        spans.push(Span::styled(format!("  {}", file), Style::default().fg(MUTED)));
    }
    if state.dirty {
        spans.push(Span::styled(" [+]", Style::default().fg(ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(BG)), area);
}

fn render_maze(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" maze ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = state.maze.to_grid();
    frame.render_widget(
        MazeView::new(&grid).focus(state.cursor.0, state.cursor.1),
        inner,
    );
}

fn render_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = Style::default().fg(MUTED);
    let value = Style::default().fg(FG);
    let key = Style::default().fg(ACCENT);

    let goals = if state.maze.goals.is_empty() {
        "none".to_string()
    } else {
        state
            .maze
            .goals
            .iter()
            .map(|&(x, y)| format!("({}, {})", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("start ", label),
            Span::styled(
                format!("({}, {})", state.maze.start.0, state.maze.start.1),
                value,
            ),
        ]),
        Line::from(vec![Span::styled("goals ", label), Span::styled(goals, value)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("table ", label),
            Span::styled(state.table.name.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("type  ", label),
            Span::styled(state.table.elem_type.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("bits  ", label),
            Span::styled(format!("{:?} (E N W S)", state.table.bit_order), value),
        ]),
        Line::from(vec![
            Span::styled("rows  ", label),
            Span::styled(
                if state.table.y_origin_is_top {
                    "top to bottom"
                } else {
                    "bottom to top"
                },
                value,
            ),
        ]),
        Line::from(""),
    ];
    for (keys, what) in [
        ("arrows/hjkl", "move cursor"),
        ("enter/space", "toggle wall"),
        ("u", "mark wall unknown"),
        ("s / g", "set start / toggle goal"),
        ("w / e", "save / export table"),
        ("b / y", "bit order / row order"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", keys), key),
            Span::styled(what, label),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" editor ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = state
        .last_status
        .clone()
        .unwrap_or_else(|| "arrows move, enter toggles, ? for help".to_string());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED))))
            .style(Style::default().bg(BG)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 16, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(Span::styled("keys", Style::default().fg(ACCENT))),
        Line::from(""),
        Line::from("arrows or hjkl   move the cursor"),
        Line::from("enter or space   toggle the wall under it"),
        Line::from("mouse click      toggle the clicked wall"),
        Line::from("u                revert a wall to unknown"),
        Line::from("s                move the start here"),
        Line::from("g                toggle a goal here"),
        Line::from("w                save the maze file"),
        Line::from("e                export the C table"),
        Line::from("b                swap the table bit order"),
        Line::from("y                flip the table row order"),
        Line::from("q                quit"),
        Line::from(""),
        Line::from(Span::styled("press ? or esc to close", Style::default().fg(MUTED))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" help ");
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_confirm_quit(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 3, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(
        Paragraph::new(Line::from("Unsaved changes. Quit anyway? (y/n)"))
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MazeState, TableConfig};
    use maze_grid::core::MazeGrid;

    #[test]
    fn maze_text_area_tracks_the_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = maze_text_area(area);
        // One row of title, one border row, one border column.
        assert_eq!(inner, Rect::new(1, 2, 80 - PANEL_WIDTH - 2, 20));
    }

    #[test]
    fn small_mazes_never_scroll() {
        let state = AppState::new(
            MazeState::from_grid(&MazeGrid::new(2)),
            None,
            TableConfig::default(),
        );
        let inner = maze_text_area(Rect::new(0, 0, 80, 24));
        assert_eq!(maze_scroll(&state, inner), (0, 0));
    }

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_rect(46, 16, area);
        assert_eq!(popup, area);
    }
}
