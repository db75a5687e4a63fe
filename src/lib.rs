pub mod assets;
pub mod grid;
pub mod listfile;
pub mod loader;
pub mod prefs;
pub mod shuffle;
pub mod ui;
pub mod upload;
