use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::lifecycle::is_expired;
use crate::domain::listing::{Listing, ListingStatus, NewListing};
use crate::errors::ServerError;

fn listing_from_row(row: &Row) -> rusqlite::Result<(Listing, String)> {
    let status_raw: String = row.get(10)?;
    let listing = Listing {
        id: row.get(0)?,
        donor_id: row.get(1)?,
        food_name: row.get(2)?,
        quantity: row.get(3)?,
        description: row.get(4)?,
        category: row.get(5)?,
        expires_at: row.get(6)?,
        pickup_window: row.get(7)?,
        location: row.get(8)?,
        distance: row.get(9)?,
        status: ListingStatus::Available, // fixed up by caller
        claimed_by: row.get(11)?,
        created_at: row.get(12)?,
    };
    Ok((listing, status_raw))
}

const LISTING_COLUMNS: &str = "id, donor_id, food_name, quantity, description, category, \
     expires_at, pickup_window, location, distance, status, claimed_by, created_at";

fn query_listings(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(format!("prepare listings query failed: {e}")))?;

    let rows = stmt
        .query_map(args, listing_from_row)
        .map_err(|e| ServerError::DbError(format!("listings query failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        let (mut listing, status_raw) =
            r.map_err(|e| ServerError::DbError(format!("listing row failed: {e}")))?;
        listing.status = ListingStatus::parse(&status_raw)?;
        out.push(listing);
    }
    Ok(out)
}

/// Insert a donor's new listing. Status is forced to 'available' and the
/// claimant left null regardless of input; the store generates the id.
/// Callers are expected to have run `NewListing::validate` first.
pub fn insert_listing(
    conn: &Connection,
    donor_id: i64,
    new: &NewListing,
    now: i64,
) -> Result<i64, ServerError> {
    let expires_at = new
        .expires_at
        .ok_or_else(|| ServerError::BadRequest("missing expiry time".into()))?;

    conn.execute(
        r#"
        insert into listings
          (donor_id, food_name, quantity, description, category,
           expires_at, pickup_window, location, distance, status, claimed_by, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?, ?, 'available', null, ?)
        "#,
        params![
            donor_id,
            new.food_name.trim(),
            new.quantity.trim(),
            new.description.trim(),
            new.category.trim(),
            expires_at,
            new.pickup_window.trim(),
            new.location.trim(),
            new.distance.trim(),
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// A donor's own listings, newest first.
pub fn listings_for_donor(conn: &Connection, donor_id: i64) -> Result<Vec<Listing>, ServerError> {
    query_listings(
        conn,
        &format!(
            "select {LISTING_COLUMNS} from listings where donor_id = ? \
             order by created_at desc, id desc"
        ),
        params![donor_id],
    )
}

/// Everything still claimable, newest first.
pub fn available_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    query_listings(
        conn,
        &format!(
            "select {LISTING_COLUMNS} from listings where status = 'available' \
             order by created_at desc, id desc"
        ),
        params![],
    )
}

/// Listings claimed under the given display name, newest first.
pub fn listings_claimed_by(conn: &Connection, claimant: &str) -> Result<Vec<Listing>, ServerError> {
    query_listings(
        conn,
        &format!(
            "select {LISTING_COLUMNS} from listings where claimed_by = ? \
             order by created_at desc, id desc"
        ),
        params![claimant],
    )
}

/// Most recent listings across the platform, for the admin activity view.
pub fn recent_listings(conn: &Connection, limit: i64) -> Result<Vec<Listing>, ServerError> {
    query_listings(
        conn,
        &format!(
            "select {LISTING_COLUMNS} from listings \
             order by created_at desc, id desc limit ?"
        ),
        params![limit],
    )
}

/// Claim one listing for one recipient.
///
/// Conditional update: only an 'available' row can flip to 'claimed', so a
/// second claim on the same listing loses and the first claimant stands.
pub fn claim_listing(conn: &Connection, id: i64, claimant: &str) -> Result<(), ServerError> {
    let updated = conn
        .execute(
            "update listings set status = 'claimed', claimed_by = ? \
             where id = ? and status = 'available'",
            params![claimant, id],
        )
        .map_err(|e| ServerError::DbError(format!("claim update failed: {e}")))?;

    if updated == 1 {
        return Ok(());
    }

    // Nothing updated: distinguish a missing listing from a lost race.
    let exists: Option<i64> = conn
        .query_row("select id from listings where id = ?", params![id], |r| {
            r.get(0)
        })
        .optional()
        .map_err(|e| ServerError::DbError(format!("claim lookup failed: {e}")))?;

    match exists {
        None => Err(ServerError::NotFound),
        Some(_) => Err(ServerError::Conflict(
            "This food has already been claimed.".into(),
        )),
    }
}

/// Platform-wide listing counts for the admin dashboard. "Expired" is
/// derived from the clock, matching what the cards display.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingStats {
    pub total: i64,
    pub available: i64,
    pub claimed: i64,
    pub expired: i64,
}

pub fn listing_stats(conn: &Connection, now: i64) -> Result<ListingStats, ServerError> {
    conn.query_row(
        r#"
        select
            count(*),
            sum(status = 'available' and expires_at >= ?1),
            sum(status = 'claimed'),
            sum(status = 'available' and expires_at < ?1)
        from listings
        "#,
        params![now],
        |row| {
            Ok(ListingStats {
                total: row.get(0)?,
                available: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                claimed: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                expired: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("listing stats failed: {e}")))
}

/// Donor-facing counts for the dashboard stat cards.
#[derive(Debug, Default, Clone, Copy)]
pub struct DonorStats {
    pub total: i64,
    pub active: i64,
    pub claimed: i64,
}

pub fn donor_stats(conn: &Connection, donor_id: i64, now: i64) -> Result<DonorStats, ServerError> {
    conn.query_row(
        r#"
        select
            count(*),
            sum(status = 'available' and expires_at >= ?2),
            sum(status = 'claimed')
        from listings
        where donor_id = ?1
        "#,
        params![donor_id, now],
        |row| {
            Ok(DonorStats {
                total: row.get(0)?,
                active: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                claimed: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        },
    )
    .map_err(|e| ServerError::DbError(format!("donor stats failed: {e}")))
}

/// Sanity helper used by views: a stored-available listing whose expiry has
/// lapsed should read as expired even though the row still says 'available'.
pub fn display_expired(listing: &Listing, now: i64) -> bool {
    listing.status == ListingStatus::Available && is_expired(listing.expires_at, now)
}
