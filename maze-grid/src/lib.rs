pub mod core;
pub mod parse;
pub mod prelude;
pub mod render;
pub mod table;

#[cfg(feature = "ratatui")]
pub mod view;
