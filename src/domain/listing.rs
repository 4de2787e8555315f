use crate::errors::ServerError;

/// One donated-food record, as stored.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: i64,
    pub donor_id: i64,
    pub food_name: String,
    pub quantity: String,
    pub description: String,
    pub category: String,
    /// Absolute expiry, unix seconds.
    pub expires_at: i64,
    pub pickup_window: String,
    pub location: String,
    pub distance: String,
    pub status: ListingStatus,
    /// Claimant display name. Set exactly when status is Claimed.
    pub claimed_by: Option<String>,
    pub created_at: i64,
}

/// Stored lifecycle state of a listing. "Expired" is never stored; it is
/// derived from `expires_at` at render time (see domain::lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    Claimed,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Claimed => "claimed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ServerError> {
        match s {
            "available" => Ok(ListingStatus::Available),
            "claimed" => Ok(ListingStatus::Claimed),
            other => Err(ServerError::DbError(format!(
                "unknown listing status: {other}"
            ))),
        }
    }
}

/// Who a signed-in user is on the platform. Resolved once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Donor,
    Recipient,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Recipient => "recipient",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "donor" => Some(Role::Donor),
            "recipient" => Some(Role::Recipient),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Where this role lands after sign-in.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Donor => "/donor",
            Role::Recipient => "/browse",
            Role::Admin => "/admin",
        }
    }
}

/// Donor-submitted fields for a new listing, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub food_name: String,
    pub quantity: String,
    pub description: String,
    pub category: String,
    pub expires_at: Option<i64>,
    pub pickup_window: String,
    pub location: String,
    pub distance: String,
}

impl NewListing {
    /// Presence checks on the required fields, nothing more. Whitespace-only
    /// values count as missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.food_name.trim().is_empty() {
            return Err("Food item name is required.".into());
        }
        if self.quantity.trim().is_empty() {
            return Err("Quantity is required.".into());
        }
        if self.expires_at.is_none() {
            return Err("Expiry time is required.".into());
        }
        if self.pickup_window.trim().is_empty() {
            return Err("Pickup window is required.".into());
        }
        Ok(())
    }
}
