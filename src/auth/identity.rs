// src/auth/identity.rs
//
// Client for the external identity provider. Credential validation lives
// entirely on the provider's side; we send form fields and report back
// whatever it says. One shot per call: no retry, no automatic re-auth.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum IdentityError {
    /// The provider was unreachable or returned garbage.
    RequestFailed(String),
    /// The provider answered and said no. Message is shown to the user verbatim.
    Rejected(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::RequestFailed(msg) => write!(f, "Could not reach sign-in service: {msg}"),
            IdentityError::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for IdentityError {}

pub struct IdentityClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    /// Where the provider sends the user after email confirmation.
    redirect_to: &'a str,
}

/// Session object returned on a successful sign-in.
#[derive(Debug, Deserialize)]
pub struct IdentitySession {
    pub access_token: String,
    pub expires_at: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Validate email/password with the provider.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError> {
        let url = format!("{}/sign-in", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .map_err(|e| IdentityError::RequestFailed(e.to_string()))?;

        if resp.status().is_success() {
            resp.json::<IdentitySession>()
                .map_err(|e| IdentityError::RequestFailed(format!("bad session payload: {e}")))
        } else {
            Err(IdentityError::Rejected(read_error_message(resp)))
        }
    }

    /// Register a new account. The provider emails a confirmation link that
    /// lands on `redirect_to`; no session exists until then.
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        let url = format!("{}/sign-up", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&SignUpRequest {
                email,
                password,
                redirect_to,
            })
            .send()
            .map_err(|e| IdentityError::RequestFailed(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(IdentityError::Rejected(read_error_message(resp)))
        }
    }
}

fn read_error_message(resp: reqwest::blocking::Response) -> String {
    let status = resp.status();
    match resp.bytes() {
        Ok(body) => error_message_from(&body, status),
        Err(_) => format!("sign-in service returned {status}"),
    }
}

/// Pull the provider's `{"message": ...}` out of an error body, falling back
/// to the HTTP status when the body is some other shape.
fn error_message_from(body: &[u8], status: reqwest::StatusCode) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("sign-in service returned {status}"))
}
