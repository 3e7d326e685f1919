use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tui_dispatch::EffectStore;

use maze_grid::core::MazeGrid;
use maze_grid::parse::parse_maze_string;
use maze_grid::table::{sanitize_identifier, table_string};

use mazetui::action::Action;
use mazetui::effect::Effect;
use mazetui::reducer::reducer;
use mazetui::state::{AppState, CursorMove, EditorMode, MazeState, TableConfig};
use mazetui::ui;

#[derive(Parser, Debug)]
#[command(name = "mazetui")]
#[command(about = "Terminal micromouse maze editor")]
struct Args {
    /// Maze file to edit (created on first save if missing)
    file: Option<PathBuf>,

    /// Grid size when starting without an existing file
    #[arg(long, default_value_t = 16)]
    size: u16,

    /// Print the C lookup table and exit instead of opening the editor
    #[arg(long)]
    export: bool,

    /// Write the exported table here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Identifier for the generated array (default: the sanitized file stem)
    #[arg(long)]
    table_name: Option<String>,

    /// Element type for the generated array
    #[arg(long, default_value = "const uint8_t")]
    table_type: String,

    /// Bit positions of the east, north, west, and south walls
    #[arg(long, default_value = "0,1,2,3", value_parser = parse_bit_order)]
    bit_order: [u8; 4],

    /// Emit table rows top to bottom (y origin at the top)
    #[arg(long)]
    y_origin_top: bool,
}

fn parse_bit_order(raw: &str) -> Result<[u8; 4], String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated bit positions".to_string());
    }
    let mut order = [0u8; 4];
    let mut seen = [false; 4];
    for (slot, part) in order.iter_mut().zip(parts) {
        let bit: u8 = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid bit position: {}", part.trim()))?;
        if bit > 3 {
            return Err(format!("bit position out of range: {}", bit));
        }
        if seen[bit as usize] {
            return Err(format!("duplicate bit position: {}", bit));
        }
        seen[bit as usize] = true;
        *slot = bit;
    }
    Ok(order)
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let maze = load_maze(&args)?;
    let table = table_config(&args);

    if args.export {
        let contents = table_string(&maze.to_grid(), &table.to_options());
        return match &args.output {
            Some(path) => fs::write(path, contents),
            None => {
                print!("{}", contents);
                Ok(())
            }
        };
    }

    let file = args
        .file
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());
    let state = AppState::new(maze, file, table);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn load_maze(args: &Args) -> io::Result<MazeState> {
    if let Some(path) = &args.file {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            return Ok(MazeState::from_grid(&parse_maze_string(&text)));
        }
    }
    Ok(MazeState::from_grid(&MazeGrid::new(args.size as usize)))
}

fn table_config(args: &Args) -> TableConfig {
    let name = match &args.table_name {
        Some(name) => name.clone(),
        None => args
            .file
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| sanitize_identifier(&stem.to_string_lossy()))
            .unwrap_or_else(|| "maze_data".to_string()),
    };
    TableConfig {
        name,
        elem_type: args.table_type.clone(),
        bit_order: args.bit_order,
        y_origin_is_top: args.y_origin_top,
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
) -> io::Result<()> {
    let mut store = EffectStore::new(state, reducer);
    dispatch_action(&mut store, Action::Init);

    loop {
        terminal.draw(|frame| ui::render(frame, frame.area(), store.state()))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    handle_key(key.code, &mut store);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    handle_mouse(mouse, Rect::new(0, 0, size.width, size.height), &mut store);
                }
                _ => {}
            }
        }

        if store.state().should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(code: KeyCode, store: &mut EffectStore<AppState, Action, Effect>) {
    match store.state().mode {
        EditorMode::Help => {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                dispatch_action(store, Action::HelpClose);
            }
        }
        EditorMode::ConfirmQuit => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                dispatch_action(store, Action::QuitConfirm);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                dispatch_action(store, Action::QuitCancel);
            }
            _ => {}
        },
        EditorMode::Edit => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => dispatch_action(store, Action::QuitRequest),
            KeyCode::Up | KeyCode::Char('k') => {
                dispatch_action(store, Action::MoveCursor(CursorMove::Up));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                dispatch_action(store, Action::MoveCursor(CursorMove::Down));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                dispatch_action(store, Action::MoveCursor(CursorMove::Left));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                dispatch_action(store, Action::MoveCursor(CursorMove::Right));
            }
            KeyCode::Enter | KeyCode::Char(' ') => dispatch_action(store, Action::ToggleWall),
            KeyCode::Char('u') => dispatch_action(store, Action::ClearWall),
            KeyCode::Char('s') => dispatch_action(store, Action::PlaceStart),
            KeyCode::Char('g') => dispatch_action(store, Action::ToggleGoal),
            KeyCode::Char('w') => dispatch_action(store, Action::Save),
            KeyCode::Char('e') => dispatch_action(store, Action::Export),
            KeyCode::Char('b') => dispatch_action(store, Action::CycleBitOrder),
            KeyCode::Char('y') => dispatch_action(store, Action::ToggleYOrigin),
            KeyCode::Char('?') => dispatch_action(store, Action::HelpOpen),
            _ => {}
        },
    }
}

fn handle_mouse(mouse: MouseEvent, full: Rect, store: &mut EffectStore<AppState, Action, Effect>) {
    if store.state().mode != EditorMode::Edit {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let inner = ui::maze_text_area(full);
    if mouse.column < inner.x
        || mouse.row < inner.y
        || mouse.column >= inner.x + inner.width
        || mouse.row >= inner.y + inner.height
    {
        return;
    }

    let (scroll_x, scroll_y) = ui::maze_scroll(store.state(), inner);
    let column = mouse.column - inner.x + scroll_x;
    let row = mouse.row - inner.y + scroll_y;
    dispatch_action(store, Action::ClickAt { column, row });
}

fn dispatch_action(store: &mut EffectStore<AppState, Action, Effect>, action: Action) {
    let mut queue = VecDeque::from([action]);

    while let Some(next_action) = queue.pop_front() {
        let result = store.dispatch(next_action);
        for effect in result.effects {
            handle_effect(effect, &mut queue);
        }
    }
}

fn handle_effect(effect: Effect, queue: &mut VecDeque<Action>) {
    match effect {
        Effect::WriteText { path, contents } => match fs::write(&path, contents) {
            Ok(()) => queue.push_back(Action::SaveDone(path)),
            Err(err) => queue.push_back(Action::SaveFailed(err.to_string())),
        },
        Effect::WriteTable { path, contents } => match fs::write(&path, contents) {
            Ok(()) => queue.push_back(Action::ExportDone(path)),
            Err(err) => queue.push_back(Action::ExportFailed(err.to_string())),
        },
    }
}
