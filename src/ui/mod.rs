//! Terminal UI for the Boxpick binary.
//!
//! Layering follows theme -> primitives -> widgets -> blocks -> views;
//! every icon, color, and border character comes from `theme`.

pub mod blocks;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
