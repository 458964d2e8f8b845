pub mod aitool;
pub mod git;
pub mod outcome;
pub mod paths;
pub mod project;
pub mod statusline;
pub mod terminal;
pub mod theme;
pub mod tui;
