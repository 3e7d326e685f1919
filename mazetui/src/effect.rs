#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    WriteText { path: String, contents: String },
    WriteTable { path: String, contents: String },
}
