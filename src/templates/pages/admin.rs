use chrono::DateTime;
use maud::{html, Markup};

use crate::auth::sessions::SessionUser;
use crate::db::listings::{display_expired, ListingStats};
use crate::db::users::RoleCounts;
use crate::domain::listing::{Listing, ListingStatus};
use crate::templates::components::stat_card;
use crate::templates::desktop_layout;

pub struct AdminVm {
    pub user: SessionUser,
    pub listings: ListingStats,
    pub roles: RoleCounts,
    /// Most recent listings across the platform.
    pub recent: Vec<Listing>,
    pub now: i64,
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    desktop_layout(
        "Platform Analytics",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Platform Analytics" }
                p class="muted" { "Monitor platform performance and community impact" }

                div class="stat-grid" style="margin-bottom: 1.5rem;" {
                    (stat_card("Total Users", &vm.roles.total().to_string()))
                    (stat_card("Food Listings", &vm.listings.total.to_string()))
                    (stat_card("Successful Claims", &vm.listings.claimed.to_string()))
                    (stat_card("Active Listings", &vm.listings.available.to_string()))
                }

                div class="card" {
                    h3 { "Listing Analytics" }
                    div class="stat-grid" {
                        (stat_card("Total", &vm.listings.total.to_string()))
                        (stat_card("Claimed", &vm.listings.claimed.to_string()))
                        (stat_card("Active", &vm.listings.available.to_string()))
                        (stat_card("Expired", &vm.listings.expired.to_string()))
                    }
                }

                div class="card" {
                    h3 { "User Distribution" }
                    (role_distribution(&vm.roles))
                }

                div class="card" {
                    h3 { "Recent Listings" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "ID" }
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Food" }
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Category" }
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Status" }
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Claimed By" }
                                    th style="padding: 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Created" }
                                }
                            }
                            tbody {
                                @for listing in &vm.recent {
                                    tr {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.id) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.food_name) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (listing.category) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            @if display_expired(listing, vm.now) {
                                                span style="color: #dc2626;" { "Expired" }
                                            } @else if listing.status == ListingStatus::Claimed {
                                                span style="color: #1e40af;" { "Claimed" }
                                            } @else {
                                                span style="color: #16a34a;" { "Available" }
                                            }
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            (listing.claimed_by.as_deref().unwrap_or("—"))
                                        }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6; color: #6b7280;" {
                                            (format_ts(listing.created_at))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn role_distribution(roles: &RoleCounts) -> Markup {
    let total = roles.total().max(1);
    let rows = [
        ("Donors", roles.donors),
        ("Recipients", roles.recipients),
        ("Admins", roles.admins),
    ];

    html! {
        div class="stat-grid" style="grid-template-columns: repeat(3, 1fr);" {
            @for (label, count) in rows {
                div style="text-align: center;" {
                    div style="height: 6px; background: #f3f4f6; border-radius: 9999px; margin-bottom: 8px;" {
                        div style=(format!(
                            "height: 100%; width: {}%; background: #16a34a; border-radius: 9999px;",
                            count * 100 / total
                        )) {}
                    }
                    div style="font-size: 1.5rem; font-weight: bold;" { (count) }
                    div class="muted" { (label) }
                }
            }
        }
    }
}

fn format_ts(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
