pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod models;
pub mod polling;
pub mod services;
pub mod store;
pub mod utils;
