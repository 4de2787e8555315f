// src/db/users.rs
use rusqlite::{params, Connection};

use crate::domain::listing::Role;
use crate::errors::ServerError;

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
/// The role only applies on first creation; an existing user keeps theirs.
pub fn get_or_create_user(
    conn: &Connection,
    email: &str,
    role: Role,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, role, created_at) values (?, ?, ?)",
        params![email, role.as_str(), now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    let id: i64 = conn
        .query_row(
            "select id from users where email = ?",
            params![email],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))?;

    Ok(id)
}

pub fn record_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last login failed: {e}")))?;
    Ok(())
}

/// How many users hold each role, for the admin distribution card.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleCounts {
    pub donors: i64,
    pub recipients: i64,
    pub admins: i64,
}

impl RoleCounts {
    pub fn total(&self) -> i64 {
        self.donors + self.recipients + self.admins
    }
}

pub fn role_counts(conn: &Connection) -> Result<RoleCounts, ServerError> {
    conn.query_row(
        r#"
        select
            sum(role = 'donor'),
            sum(role = 'recipient'),
            sum(role = 'admin')
        from users
        "#,
        [],
        |row| {
            Ok(RoleCounts {
                donors: row.get::<_, Option<i64>>(0)?.unwrap_or(0),
                recipients: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                admins: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("role counts failed: {e}")))
}
