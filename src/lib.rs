pub mod commands;
pub mod config;
pub mod constants;
pub mod gate;
pub mod journal;
pub mod validation_output;
