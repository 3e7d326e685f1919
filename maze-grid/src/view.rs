use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::core::MazeGrid;
use crate::render::maze_string;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeTheme {
    pub wall: Style,
    pub open: Style,
    pub unknown: Style,
    pub pillar: Style,
    pub start: Style,
    pub goal: Style,
    pub cursor: Style,
}

impl Default for MazeTheme {
    fn default() -> Self {
        Self {
            wall: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            open: Style::default(),
            unknown: Style::default().fg(Color::DarkGray),
            pillar: Style::default().fg(Color::Gray),
            start: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            goal: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Top-left corner of the visible text window, centered on the focus and
/// clamped to the text block.
pub fn viewport_origin(
    focus_col: u16,
    focus_row: u16,
    text_w: u16,
    text_h: u16,
    view_w: u16,
    view_h: u16,
) -> (u16, u16) {
    if text_w == 0 || text_h == 0 || view_w == 0 || view_h == 0 {
        return (0, 0);
    }
    let max_x = text_w.saturating_sub(view_w);
    let max_y = text_h.saturating_sub(view_h);
    let start_x = focus_col.saturating_sub(view_w / 2).min(max_x);
    let start_y = focus_row.saturating_sub(view_h / 2).min(max_y);
    (start_x, start_y)
}

pub struct MazeView<'a> {
    maze: &'a MazeGrid,
    theme: MazeTheme,
    focus: Option<(u16, u16)>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a MazeGrid) -> Self {
        Self {
            maze,
            theme: MazeTheme::default(),
            focus: None,
        }
    }

    pub fn theme(mut self, theme: MazeTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Text-grid position to highlight and keep scrolled into view.
    pub fn focus(mut self, column: u16, row: u16) -> Self {
        self.focus = Some((column, row));
        self
    }
}

impl Widget for MazeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = maze_string(self.maze);
        let lines: Vec<&str> = text.lines().collect();
        let text_h = lines.len() as u16;
        let text_w = lines.first().map_or(0, |line| line.len()) as u16;

        let (focus_col, focus_row) = self.focus.unwrap_or((0, 0));
        let (scroll_x, scroll_y) =
            viewport_origin(focus_col, focus_row, text_w, text_h, area.width, area.height);

        let visible_rows = area.height.min(text_h.saturating_sub(scroll_y));
        let visible_cols = area.width.min(text_w.saturating_sub(scroll_x));
        for vy in 0..visible_rows {
            let row = scroll_y + vy;
            let line = lines[row as usize].as_bytes();
            for vx in 0..visible_cols {
                let col = scroll_x + vx;
                let Some(&byte) = line.get(col as usize) else {
                    continue;
                };
                let ch = byte as char;
                let mut style = match ch {
                    '-' | '|' => self.theme.wall,
                    '.' => self.theme.unknown,
                    '+' => self.theme.pillar,
                    'S' => self.theme.start,
                    'G' => self.theme.goal,
                    _ => self.theme.open,
                };
                if self.focus == Some((col, row)) {
                    style = style.patch(self.theme.cursor);
                }
                if let Some(cell) = buf.cell_mut((area.x + vx, area.y + vy)) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
