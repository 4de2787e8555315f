use chrono::DateTime;
use maud::{html, Markup};

use crate::domain::lifecycle::{expiry_display, is_expired};
use crate::domain::listing::{Listing, ListingStatus};

/// What the viewer is allowed to do with a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardViewer<'a> {
    Donor,
    /// Recipient cards show claim actions; email identifies "claimed by you".
    Recipient { email: &'a str },
    Admin,
}

fn status_badge(listing: &Listing, now: i64) -> Markup {
    // A stored-available listing past its expiry shows the derived badge.
    if listing.status == ListingStatus::Available && is_expired(listing.expires_at, now) {
        return html! { span class="badge badge-expired" { "Expired" } };
    }
    match listing.status {
        ListingStatus::Available => html! { span class="badge badge-available" { "Available" } },
        ListingStatus::Claimed => html! { span class="badge badge-claimed" { "Claimed" } },
    }
}

fn posted_at(created_at: i64) -> String {
    match DateTime::from_timestamp(created_at, 0) {
        Some(dt) => format!("Posted {}", dt.format("%b %-d, %H:%M UTC")),
        None => String::new(),
    }
}

pub fn listing_card(listing: &Listing, viewer: CardViewer, now: i64) -> Markup {
    let countdown = expiry_display(listing.expires_at, now);
    let highlight = countdown.tier.is_highlighted() && listing.status == ListingStatus::Available;

    html! {
        div class=(if highlight { "card urgent" } else { "card" }) {
            div style="display: flex; align-items: center; gap: 8px; margin-bottom: 0.5rem;" {
                h3 style="margin: 0;" { (listing.food_name) }
                (status_badge(listing, now))
            }

            @if !listing.category.is_empty() {
                span class="badge badge-category" { (listing.category) }
            }

            p style="font-weight: 500; margin-bottom: 0.25rem;" { (listing.quantity) }

            @if !listing.description.is_empty() {
                p class="muted" { (listing.description) }
            }

            @if !listing.location.is_empty() {
                p class="muted" {
                    (listing.location)
                    @if !listing.distance.is_empty() {
                        " · " (listing.distance)
                    }
                }
            }

            p class="muted" { "Pickup: " (listing.pickup_window) }

            div style="display: flex; justify-content: space-between; align-items: center;" {
                span class=(countdown.tier.color_class()) { (countdown.label) }
                span class="muted" { (posted_at(listing.created_at)) }
            }

            @if let (ListingStatus::Claimed, Some(claimant)) = (listing.status, listing.claimed_by.as_deref()) {
                p class="muted" {
                    @match viewer {
                        CardViewer::Recipient { email } if email == claimant => { "Claimed by you" }
                        _ => { "Claimed by " (claimant) }
                    }
                }
            }

            @if let (CardViewer::Recipient { .. }) = viewer {
                @if listing.status == ListingStatus::Available {
                    form action=(format!("/listings/{}/claim", listing.id)) method="post" style="margin-top: 0.75rem;" {
                        button type="submit" class="primary" { "Claim Food" }
                    }
                }
            }
        }
    }
}
