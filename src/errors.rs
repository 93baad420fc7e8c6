//! Unified application error type.
//! All modules (db, report, server, cli) return AppError to keep the error
//! handling consistent; heterogeneous causes are flattened into the
//! client-facing failure envelope at the report service boundary.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Filter / request errors
    // ---------------------------
    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Server / runtime errors
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),
}

pub type AppResult<T> = Result<T, AppError>;
