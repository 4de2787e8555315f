use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::{NaiveDateTime, Utc};

use crate::auth::identity::IdentityClient;
use crate::auth::normalize_email;
use crate::auth::sessions::{self, SessionUser};
use crate::db::{listings, users, Database};
use crate::domain::filter::filter_listings;
use crate::domain::listing::{NewListing, Role};
use crate::errors::ServerError;
use crate::responses::{
    clear_session_cookie, html_response, html_response_with_status, redirect_response,
    session_cookie, ResultResp,
};
use crate::templates::components::Notice;
use crate::templates::pages::{self, AdminVm, BrowseVm, DonorVm};

pub fn handle(req: Request, db: &Database, identity: &IdentityClient) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let session_token = session_token_from(&req);
    let now = Utc::now().timestamp();

    // Resolve the session once per request; role rides along with it.
    let user = match session_token.as_deref() {
        Some(token) => db.with_conn(|conn| sessions::load_session_user(conn, token, now))?,
        None => None,
    };

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => match user {
            // Signed-in users land on their own dashboard.
            Some(u) => redirect_response(u.role.dashboard_path(), None),
            None => html_response(pages::home_page()),
        },

        ("GET", "/auth") => match user {
            Some(_) => redirect_response("/", None),
            None => html_response(pages::auth_page(None)),
        },
        ("POST", "/auth/sign-in") => sign_in(req, db, identity, now),
        ("POST", "/auth/sign-up") => sign_up(req, db, identity, now),
        ("POST", "/auth/sign-out") => sign_out(db, session_token.as_deref(), now),

        ("GET", "/donor") => {
            let u = match gate(user, Role::Donor) {
                Ok(u) => u,
                Err(resp) => return resp,
            };
            donor_dashboard(db, u, None, now)
        }
        ("POST", "/donor/listings") => {
            let u = match gate(user, Role::Donor) {
                Ok(u) => u,
                Err(resp) => return resp,
            };
            create_listing(req, db, u, now)
        }

        ("GET", "/browse") => {
            let u = match gate(user, Role::Recipient) {
                Ok(u) => u,
                Err(resp) => return resp,
            };
            browse(db, u, query.as_deref(), now)
        }
        ("POST", p) if p.starts_with("/listings/") && p.ends_with("/claim") => {
            let u = match gate(user, Role::Recipient) {
                Ok(u) => u,
                Err(resp) => return resp,
            };
            let id = p
                .trim_start_matches("/listings/")
                .trim_end_matches("/claim")
                .parse::<i64>()
                .map_err(|_| ServerError::BadRequest("invalid listing id".into()))?;
            db.with_conn(|conn| listings::claim_listing(conn, id, &u.email))?;
            redirect_response("/browse", None)
        }

        ("GET", "/admin") => {
            let u = match gate(user, Role::Admin) {
                Ok(u) => u,
                Err(resp) => return resp,
            };
            admin_dashboard(db, u, now)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// No session: off to the sign-in page. Wrong role: off to your own dashboard.
fn gate(user: Option<SessionUser>, wanted: Role) -> Result<SessionUser, ResultResp> {
    match user {
        None => Err(redirect_response("/auth", None)),
        Some(u) if u.role != wanted => Err(redirect_response(u.role.dashboard_path(), None)),
        Some(u) => Ok(u),
    }
}

fn sign_in(req: Request, db: &Database, identity: &IdentityClient, now: i64) -> ResultResp {
    let form = parse_form(req)?;
    let email_raw = field(&form, "email");
    let password = field(&form, "password");

    if email_raw.is_empty() || password.is_empty() {
        return auth_error("Please enter your email and password.");
    }
    let email = match normalize_email(email_raw) {
        Ok(e) => e,
        Err(_) => return auth_error("Please enter a valid email address."),
    };

    // Credential validation is the provider's job. One attempt, no retry.
    if let Err(e) = identity.sign_in(&email, password) {
        return auth_error(&e.to_string());
    }

    let token = db.with_conn(|conn| {
        // Default role for accounts the provider knows but we don't.
        let user_id = users::get_or_create_user(conn, &email, Role::Recipient, now)?;
        users::record_login(conn, user_id, now)?;
        sessions::create_session(conn, user_id, now)
    })?;

    redirect_response("/", Some(&session_cookie(&token)))
}

fn sign_up(req: Request, db: &Database, identity: &IdentityClient, now: i64) -> ResultResp {
    let form = parse_form(req)?;
    let email_raw = field(&form, "email");
    let password = field(&form, "password");
    let role = Role::parse(field(&form, "role")).unwrap_or(Role::Recipient);

    if email_raw.is_empty() || password.is_empty() {
        return auth_error("Please enter your email and password.");
    }
    let email = match normalize_email(email_raw) {
        Ok(e) => e,
        Err(_) => return auth_error("Please enter a valid email address."),
    };

    // The provider emails a confirmation link that lands back on "/".
    if let Err(e) = identity.sign_up(&email, password, "/") {
        return auth_error(&e.to_string());
    }

    // Record the chosen role now so it is resolved when the first session opens.
    db.with_conn(|conn| users::get_or_create_user(conn, &email, role, now).map(|_| ()))?;

    html_response(pages::auth_page(Some(&Notice::Info(
        "Check your email to confirm your account.".into(),
    ))))
}

fn sign_out(db: &Database, session_token: Option<&str>, now: i64) -> ResultResp {
    if let Some(token) = session_token {
        db.with_conn(|conn| sessions::revoke_session(conn, token, now))?;
    }
    redirect_response("/", Some(&clear_session_cookie()))
}

fn donor_dashboard(
    db: &Database,
    user: SessionUser,
    form_error: Option<String>,
    now: i64,
) -> ResultResp {
    let (stats, rows) = db.with_conn(|conn| {
        let stats = listings::donor_stats(conn, user.user_id, now)?;
        let rows = listings::listings_for_donor(conn, user.user_id)?;
        Ok((stats, rows))
    })?;

    let vm = DonorVm {
        user,
        stats,
        listings: rows,
        form_error,
        now,
    };

    if vm.form_error.is_some() {
        // Blocked submission renders the same page with the inline message.
        html_response_with_status(400, pages::donor_page(&vm))
    } else {
        html_response(pages::donor_page(&vm))
    }
}

fn create_listing(req: Request, db: &Database, user: SessionUser, now: i64) -> ResultResp {
    let form = parse_form(req)?;

    let new = NewListing {
        food_name: field(&form, "food_name").to_string(),
        quantity: field(&form, "quantity").to_string(),
        description: field(&form, "description").to_string(),
        category: field(&form, "category").to_string(),
        expires_at: parse_datetime_local(field(&form, "expires_at")),
        pickup_window: field(&form, "pickup_window").to_string(),
        location: field(&form, "location").to_string(),
        distance: String::new(),
    };

    if let Err(msg) = new.validate() {
        return donor_dashboard(db, user, Some(msg), now);
    }

    db.with_conn(|conn| listings::insert_listing(conn, user.user_id, &new, now))?;
    redirect_response("/donor", None)
}

fn browse(db: &Database, user: SessionUser, query: Option<&str>, now: i64) -> ResultResp {
    let params = parse_query(query);
    let search = params.get("q").map(|s| s.trim().to_string()).unwrap_or_default();
    let filter = params
        .get("filter")
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("all")
        .to_string();

    let (available, claims) = db.with_conn(|conn| {
        let available = listings::available_listings(conn)?;
        let claims = listings::listings_claimed_by(conn, &user.email)?;
        Ok((available, claims))
    })?;

    let visible = filter_listings(&available, &search, &filter)
        .into_iter()
        .cloned()
        .collect();

    let vm = BrowseVm {
        user,
        search,
        filter,
        available: visible,
        claims,
        now,
    };

    html_response(pages::browse_page(&vm))
}

fn admin_dashboard(db: &Database, user: SessionUser, now: i64) -> ResultResp {
    let (listing_stats, roles, recent) = db.with_conn(|conn| {
        let stats = listings::listing_stats(conn, now)?;
        let roles = users::role_counts(conn)?;
        let recent = listings::recent_listings(conn, 10)?;
        Ok((stats, roles, recent))
    })?;

    let vm = AdminVm {
        user,
        listings: listing_stats,
        roles,
        recent,
        now,
    };

    html_response(pages::admin_page(&vm))
}

fn auth_error(message: &str) -> ResultResp {
    html_response_with_status(400, pages::auth_page(Some(&Notice::Error(message.into()))))
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or("").trim()
}

/// Expiry comes from a datetime-local input: "2024-01-20T18:00", sometimes
/// with seconds. Interpreted as UTC.
fn parse_datetime_local(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|dt| dt.and_utc().timestamp())
}

fn session_token_from(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some("session"), Some(v)) = (parts.next(), parts.next()) {
            return Some(v.to_string());
        }
    }
    None
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
