pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod store;
