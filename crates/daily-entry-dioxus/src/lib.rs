pub mod io;
pub mod ui;
