pub mod commands;
pub mod entries;
pub mod sheet;
pub mod http;
pub mod state;
