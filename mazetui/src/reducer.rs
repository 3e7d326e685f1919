use std::path::Path;

use maze_grid::core::WallKey;
use maze_grid::render::locate;
use maze_grid::table::table_string;
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, CursorMove, EditorMode, MazeState};

const BIT_ORDER_PRESETS: [[u8; 4]; 2] = [[0, 1, 2, 3], [1, 0, 3, 2]];

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            let size = state.maze.size;
            state.last_status = Some(match &state.file {
                Some(file) => format!("Editing {} ({}x{}).", file, size, size),
                None => format!("New {}x{} maze.", size, size),
            });
            DispatchResult::changed()
        }

        Action::MoveCursor(movement) => move_cursor(state, movement),
        Action::ClickAt { column, row } => {
            if column >= state.maze.text_width() || row >= state.maze.text_height() {
                return DispatchResult::unchanged();
            }
            state.cursor = (column, row);
            toggle_wall(state)
        }
        Action::ToggleWall => toggle_wall(state),
        Action::ClearWall => clear_wall(state),
        Action::PlaceStart => place_start(state),
        Action::ToggleGoal => toggle_goal(state),

        Action::Save => match &state.file {
            Some(path) => DispatchResult::changed_with(Effect::WriteText {
                path: path.clone(),
                contents: state.maze.text(),
            }),
            None => {
                state.last_status =
                    Some("No file path; start with a file argument to save.".to_string());
                DispatchResult::changed()
            }
        },
        Action::SaveDone(path) => {
            state.dirty = false;
            state.last_status = Some(format!("Saved {}.", path));
            DispatchResult::changed()
        }
        Action::SaveFailed(error) => {
            state.last_status = Some(format!("Save failed: {}", error));
            DispatchResult::changed()
        }

        Action::Export => {
            let contents = table_string(&state.maze.to_grid(), &state.table.to_options());
            DispatchResult::changed_with(Effect::WriteTable {
                path: export_path(state.file.as_deref()),
                contents,
            })
        }
        Action::ExportDone(path) => {
            state.last_status = Some(format!("Exported {}.", path));
            DispatchResult::changed()
        }
        Action::ExportFailed(error) => {
            state.last_status = Some(format!("Export failed: {}", error));
            DispatchResult::changed()
        }

        Action::CycleBitOrder => {
            state.table.bit_order = if state.table.bit_order == BIT_ORDER_PRESETS[0] {
                BIT_ORDER_PRESETS[1]
            } else {
                BIT_ORDER_PRESETS[0]
            };
            state.last_status = Some(format!(
                "Bit order (E, N, W, S) set to {:?}.",
                state.table.bit_order
            ));
            DispatchResult::changed()
        }
        Action::ToggleYOrigin => {
            state.table.y_origin_is_top = !state.table.y_origin_is_top;
            state.last_status = Some(if state.table.y_origin_is_top {
                "Table rows now run top to bottom.".to_string()
            } else {
                "Table rows now run bottom to top.".to_string()
            });
            DispatchResult::changed()
        }

        Action::HelpOpen => {
            state.mode = EditorMode::Help;
            DispatchResult::changed()
        }
        Action::HelpClose => {
            state.mode = EditorMode::Edit;
            DispatchResult::changed()
        }
        Action::QuitRequest => {
            if state.dirty {
                state.mode = EditorMode::ConfirmQuit;
            } else {
                state.should_quit = true;
            }
            DispatchResult::changed()
        }
        Action::QuitCancel => {
            state.mode = EditorMode::Edit;
            DispatchResult::changed()
        }
        Action::QuitConfirm => {
            state.should_quit = true;
            DispatchResult::changed()
        }
    }
}

fn move_cursor(state: &mut AppState, movement: CursorMove) -> DispatchResult<Effect> {
    let max_column = state.maze.text_width().saturating_sub(1);
    let max_row = state.maze.text_height().saturating_sub(1);
    let (column, row) = state.cursor;
    let next = match movement {
        CursorMove::Up => (column, row.saturating_sub(1)),
        CursorMove::Down => (column, (row + 1).min(max_row)),
        CursorMove::Left => (column.saturating_sub(1), row),
        CursorMove::Right => ((column + 1).min(max_column), row),
    };
    if next == state.cursor {
        return DispatchResult::unchanged();
    }
    state.cursor = next;
    DispatchResult::changed()
}

fn toggle_wall(state: &mut AppState) -> DispatchResult<Effect> {
    let mut grid = state.maze.to_grid();
    let Some(wall) = locate(&grid, state.cursor_offset()) else {
        state.last_status = Some("Nothing to toggle here.".to_string());
        return DispatchResult::changed();
    };
    if !grid.contains_wall(WallKey::canonical(wall.x, wall.y, wall.direction)) {
        state.last_status = Some("The outer boundary cannot be edited.".to_string());
        return DispatchResult::changed();
    }
    let present = !grid.is_wall(wall.x, wall.y, wall.direction);
    grid.update_wall(wall.x, wall.y, wall.direction, present);
    state.maze = MazeState::from_grid(&grid);
    state.dirty = true;
    state.last_status = Some(format!(
        "{:?} wall of ({}, {}) set {}.",
        wall.direction,
        wall.x,
        wall.y,
        if present { "present" } else { "absent" }
    ));
    DispatchResult::changed()
}

fn clear_wall(state: &mut AppState) -> DispatchResult<Effect> {
    let mut grid = state.maze.to_grid();
    let Some(wall) = locate(&grid, state.cursor_offset()) else {
        state.last_status = Some("Nothing to clear here.".to_string());
        return DispatchResult::changed();
    };
    if !grid.contains_wall(WallKey::canonical(wall.x, wall.y, wall.direction)) {
        state.last_status = Some("The outer boundary cannot be edited.".to_string());
        return DispatchResult::changed();
    }
    grid.set_known(wall.x, wall.y, wall.direction, false);
    state.maze = MazeState::from_grid(&grid);
    state.dirty = true;
    state.last_status = Some(format!(
        "{:?} wall of ({}, {}) marked unknown.",
        wall.direction, wall.x, wall.y
    ));
    DispatchResult::changed()
}

fn place_start(state: &mut AppState) -> DispatchResult<Effect> {
    let Some(cell) = state.maze.cell_at_text(state.cursor.0, state.cursor.1) else {
        state.last_status = Some("Move the cursor onto a cell first.".to_string());
        return DispatchResult::changed();
    };
    state.maze.start = cell;
    state.dirty = true;
    state.last_status = Some(format!("Start moved to ({}, {}).", cell.0, cell.1));
    DispatchResult::changed()
}

fn toggle_goal(state: &mut AppState) -> DispatchResult<Effect> {
    let Some(cell) = state.maze.cell_at_text(state.cursor.0, state.cursor.1) else {
        state.last_status = Some("Move the cursor onto a cell first.".to_string());
        return DispatchResult::changed();
    };
    if state.maze.goals.contains(&cell) {
        state.maze.goals.retain(|&goal| goal != cell);
        state.last_status = Some(format!("Goal removed from ({}, {}).", cell.0, cell.1));
    } else {
        state.maze.goals.push(cell);
        state.last_status = Some(format!("Goal added at ({}, {}).", cell.0, cell.1));
    }
    state.dirty = true;
    DispatchResult::changed()
}

fn export_path(file: Option<&str>) -> String {
    match file {
        Some(path) => Path::new(path)
            .with_extension("h")
            .to_string_lossy()
            .into_owned(),
        None => "maze_table.h".to_string(),
    }
}
