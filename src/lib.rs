pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
