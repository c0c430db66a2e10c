// Library root for the welcome API service

pub mod config;
pub mod controllers;
pub mod core;
pub mod middlewares;
pub mod routes;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
