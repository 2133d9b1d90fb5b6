//! Bookshelf personal library server
//!
//! A REST JSON API over a small personal book library. Books are looked up in Google
//! Books and stored locally.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
