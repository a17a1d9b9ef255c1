//! Types for account creation and sign-in

use serde::{Deserialize, Serialize};

/// Body of `POST /signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpPayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub token: String,
}
