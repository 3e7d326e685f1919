use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::CursorMove;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    Init,

    MoveCursor(CursorMove),
    ClickAt { column: u16, row: u16 },
    ToggleWall,
    ClearWall,
    PlaceStart,
    ToggleGoal,

    Save,
    SaveDone(String),
    SaveFailed(String),
    Export,
    ExportDone(String),
    ExportFailed(String),

    CycleBitOrder,
    ToggleYOrigin,

    HelpOpen,
    HelpClose,
    QuitRequest,
    QuitCancel,
    QuitConfirm,
}
