pub mod api;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod money;
pub mod services;
pub mod state;
