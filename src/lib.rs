//! Folio - the data core of a personal portfolio and blog site.
//!
//! This library provides the functionality behind the `folio` CLI tool:
//! the entity store (projects, blog posts, services, skills, testimonials,
//! contact messages), the page-oriented query layer, contact-form intake,
//! and the best-effort email notifier.
//!
//! Rendering, routing, and the admin UI are external collaborators: they
//! call into [`query`] and [`contact`] and consume the serializable view
//! models those modules return.

pub mod cli;
pub mod commands;
pub mod config;
pub mod contact;
pub mod models;
pub mod notify;
pub mod query;
pub mod storage;


/// Library-level error type for Folio operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Not initialized: run `folio init` first")]
    NotInitialized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Mail delivery failed: {0}")]
    Mail(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;
