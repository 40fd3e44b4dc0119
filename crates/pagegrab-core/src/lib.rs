pub mod config;
pub mod logging;

pub mod control;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod mirror;
pub mod progress;
pub mod storage;
pub mod url_model;
