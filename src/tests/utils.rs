use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::identity::IdentityClient;
use crate::auth::sessions;
use crate::db::connection::{init_db, Database};
use crate::db::users::get_or_create_user;
use crate::domain::listing::Role;

/// Initialize a fresh test DB using the production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "share_n_serve_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());

    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Identity client pointed at nothing. Tests never drive the routes that
/// actually call out to the provider.
pub fn dummy_identity() -> IdentityClient {
    IdentityClient::new("http://127.0.0.1:1/auth")
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Create a user with the given role and an open session, bypassing the
/// external provider, and return (user_id, session_token).
pub fn create_signed_in_user(db: &Database, email: &str, role: Role) -> (i64, String) {
    let now = now_unix();
    let user_id = db
        .with_conn(|conn| get_or_create_user(conn, email, role, now))
        .expect("Failed to create user");
    let token = db
        .with_conn(|conn| sessions::create_session(conn, user_id, now))
        .expect("Failed to create session");
    (user_id, token)
}
