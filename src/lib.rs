pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
