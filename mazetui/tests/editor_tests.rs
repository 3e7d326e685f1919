//! Reducer integration tests driven through an EffectStore.

use maze_grid::core::{Direction, MazeGrid};
use pretty_assertions::assert_eq;
use tui_dispatch::EffectStore;

use mazetui::{
    action::Action,
    effect::Effect,
    reducer::reducer,
    state::{AppState, CursorMove, EditorMode, MazeState, TableConfig},
};

fn store_with_file(size: usize, file: Option<&str>) -> EffectStore<AppState, Action, Effect> {
    let state = AppState::new(
        MazeState::from_grid(&MazeGrid::new(size)),
        file.map(|f| f.to_string()),
        TableConfig::default(),
    );
    EffectStore::new(state, reducer)
}

#[test]
fn edit_flow_marks_walls_known_and_sets_the_dirty_flag() {
    let mut store = store_with_file(2, None);
    store.dispatch(Action::Init);
    assert!(!store.state().dirty);

    // Walk the cursor from the start cell (2, 3) onto its east marker.
    store.dispatch(Action::MoveCursor(CursorMove::Right));
    store.dispatch(Action::MoveCursor(CursorMove::Right));
    assert_eq!(store.state().cursor, (4, 3));

    let result = store.dispatch(Action::ToggleWall);
    assert!(result.changed, "toggling a wall should change state");
    assert!(result.effects.is_empty());
    assert!(store.state().dirty);

    let grid = store.state().maze.to_grid();
    assert!(grid.is_wall(0, 0, Direction::East));
    assert!(grid.is_known(0, 0, Direction::East));
    // The shared-wall alias reads the same.
    assert!(grid.is_wall(1, 0, Direction::West));
}

#[test]
fn clicking_a_structural_character_leaves_the_maze_alone() {
    let mut store = store_with_file(2, None);
    let before = store.state().maze.clone();

    // The top-left corner pillar.
    store.dispatch(Action::ClickAt { column: 0, row: 0 });

    assert_eq!(store.state().maze, before);
    assert!(!store.state().dirty);
}

#[test]
fn save_emits_the_rendered_text_for_the_configured_file() {
    let mut store = store_with_file(2, Some("demo.maze"));
    store.dispatch(Action::ClickAt { column: 4, row: 3 });

    let result = store.dispatch(Action::Save);
    assert_eq!(
        result.effects,
        vec![Effect::WriteText {
            path: "demo.maze".to_string(),
            contents: store.state().maze.text(),
        }]
    );

    store.dispatch(Action::SaveDone("demo.maze".to_string()));
    assert!(!store.state().dirty);
    assert_eq!(store.state().last_status.as_deref(), Some("Saved demo.maze."));
}

#[test]
fn export_reflects_the_current_bit_order() {
    let mut store = store_with_file(2, Some("demo.maze"));
    // Put a known wall east of the start cell so the masks are asymmetric.
    store.dispatch(Action::ClickAt { column: 4, row: 3 });

    let result = store.dispatch(Action::Export);
    let Some(Effect::WriteTable { path, contents }) = result.effects.first().cloned() else {
        panic!("expected a table write effect");
    };
    assert_eq!(path, "demo.h");
    assert!(contents.contains("0xd"), "identity bit order masks: {contents}");

    store.dispatch(Action::CycleBitOrder);
    let result = store.dispatch(Action::Export);
    let Some(Effect::WriteTable { contents, .. }) = result.effects.first().cloned() else {
        panic!("expected a table write effect");
    };
    assert!(contents.contains("0xe"), "swapped bit order masks: {contents}");
}

#[test]
fn export_failure_surfaces_in_the_status_line() {
    let mut store = store_with_file(2, None);
    store.dispatch(Action::ExportFailed("permission denied".to_string()));
    assert_eq!(
        store.state().last_status.as_deref(),
        Some("Export failed: permission denied")
    );
}

#[test]
fn quitting_with_unsaved_changes_needs_confirmation() {
    let mut store = store_with_file(2, None);
    store.dispatch(Action::ClickAt { column: 4, row: 3 });
    assert!(store.state().dirty);

    store.dispatch(Action::QuitRequest);
    assert_eq!(store.state().mode, EditorMode::ConfirmQuit);
    assert!(!store.state().should_quit);

    store.dispatch(Action::QuitCancel);
    assert_eq!(store.state().mode, EditorMode::Edit);

    store.dispatch(Action::QuitRequest);
    store.dispatch(Action::QuitConfirm);
    assert!(store.state().should_quit);
}

#[test]
fn a_clean_editor_quits_immediately() {
    let mut store = store_with_file(2, None);
    store.dispatch(Action::QuitRequest);
    assert!(store.state().should_quit);
}

#[test]
fn edited_maze_round_trips_through_its_own_save_payload() {
    let mut store = store_with_file(3, Some("demo.maze"));

    // Toggle a few interior walls.
    for (column, row) in [(4, 5), (2, 4), (8, 3)] {
        store.dispatch(Action::ClickAt { column, row });
    }
    // Park the cursor on the body of cell (1, 1); the click itself lands on
    // a structural character and toggles nothing.
    store.dispatch(Action::ClickAt { column: 6, row: 3 });
    store.dispatch(Action::ToggleGoal);
    assert_eq!(store.state().maze.goals, vec![(1, 1)]);

    let result = store.dispatch(Action::Save);
    let Some(Effect::WriteText { contents, .. }) = result.effects.first().cloned() else {
        panic!("expected a save effect");
    };

    let reparsed = MazeState::from_grid(&maze_grid::parse::parse_maze_string(&contents));
    assert_eq!(reparsed, store.state().maze);
}
