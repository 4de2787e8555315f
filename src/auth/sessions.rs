// src/auth/sessions.rs
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::domain::listing::Role;
use crate::errors::ServerError;

const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// The signed-in user attached to a request. Role is resolved here, once,
/// when the session row is loaded.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

/// Open a session for a user and return the raw bearer token.
/// Only the SHA-256 of the token is stored.
pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);

    let raw_token = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw);

    let hash = Sha256::digest(raw_token.as_bytes());
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Resolve a session cookie to its user, or None if the token is unknown,
/// expired, or revoked.
pub fn load_session_user(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = Sha256::digest(raw_token.as_bytes());

    let row: Option<(i64, String, String)> = conn
        .query_row(
            r#"
            select u.id, u.email, u.role
            from sessions s
            join users u on u.id = s.user_id
            where s.token_hash = ?
              and s.expires_at > ?
              and s.revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    match row {
        None => Ok(None),
        Some((user_id, email, role_raw)) => {
            let role = Role::parse(&role_raw)
                .ok_or_else(|| ServerError::DbError(format!("unknown role: {role_raw}")))?;
            Ok(Some(SessionUser {
                user_id,
                email,
                role,
            }))
        }
    }
}

/// Revoke a session by its raw token (sign-out).
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = Sha256::digest(raw_token.as_bytes());

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
