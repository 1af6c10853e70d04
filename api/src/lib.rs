//! Client for the Homewatch REST backend: wire models and a thin HTTP wrapper.
//!
//! The backend is an external collaborator. This crate only encodes its
//! contract (endpoints, JSON bodies, bearer auth) so the UI crate never
//! touches raw requests.

pub mod client;
pub mod error;
pub mod models;

pub use client::Client;
pub use error::{Error, Result};
pub use models::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RecoverPasswordRequest, RegisterRequest,
    SensorKind, SensorReading,
};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
