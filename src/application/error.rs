// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt::Display;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by the command and query services. Each variant maps to
/// exactly one HTTP status in the presentation layer.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not authenticated: {0}")]
    Unauthorized(String),

    #[error("not allowed: {0}")]
    Forbidden(String),

    #[error("backend failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn article_not_found() -> Self {
        Self::NotFound("article not found".into())
    }

    pub fn user_not_found() -> Self {
        Self::NotFound("user not found".into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Same answer for an unknown email and a wrong password.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("invalid credentials".into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(err: impl Display) -> Self {
        Self::Infrastructure(err.to_string())
    }
}
