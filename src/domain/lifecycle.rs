// src/domain/lifecycle.rs

/// How pressing a listing's expiry is, for display.
///
/// The tier drives the color of the countdown text and whether a card gets
/// the urgent highlight. Anything short of Normal counts as highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Urgent,
    Warning,
    Normal,
}

impl UrgencyTier {
    /// CSS class hint for the countdown text.
    pub fn color_class(self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "text-urgent",
            UrgencyTier::Warning => "text-warning",
            UrgencyTier::Normal => "text-normal",
        }
    }

    pub fn is_highlighted(self) -> bool {
        !matches!(self, UrgencyTier::Normal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryDisplay {
    pub label: String,
    pub tier: UrgencyTier,
}

/// Derives the countdown label and urgency tier for a listing.
///
/// Both arguments are unix seconds. Whole hours remaining are floored, so a
/// listing 90 minutes from expiry reads "1h remaining". Thresholds are
/// deliberately strict: exactly 2h lands in Warning, exactly 6h in Normal.
///
/// Pure function of its inputs; callers re-evaluate on every render.
pub fn expiry_display(expires_at: i64, now: i64) -> ExpiryDisplay {
    let hours = (expires_at - now).div_euclid(3600);

    if hours < 0 {
        return ExpiryDisplay {
            label: "Expired".to_string(),
            tier: UrgencyTier::Urgent,
        };
    }

    let label = format!("{hours}h remaining");
    let tier = if hours < 2 {
        UrgencyTier::Urgent
    } else if hours < 6 {
        UrgencyTier::Warning
    } else {
        UrgencyTier::Normal
    };

    ExpiryDisplay { label, tier }
}

/// Whether a listing's expiry has lapsed. Consistent with `expiry_display`:
/// true exactly when the label would read "Expired".
pub fn is_expired(expires_at: i64, now: i64) -> bool {
    expires_at < now
}
