use maud::{html, Markup};

use crate::auth::sessions::SessionUser;
use crate::db::listings::DonorStats;
use crate::domain::listing::Listing;
use crate::templates::components::listing_card::CardViewer;
use crate::templates::components::{listing_card, stat_card};
use crate::templates::desktop_layout;

pub struct DonorVm {
    pub user: SessionUser,
    pub stats: DonorStats,
    /// The donor's own listings, newest first.
    pub listings: Vec<Listing>,
    /// Inline message from a failed create submission.
    pub form_error: Option<String>,
    pub now: i64,
}

const CATEGORIES: [&str; 6] = [
    "Fresh Produce",
    "Prepared Meals",
    "Bakery",
    "Dairy",
    "Packaged",
    "Other",
];

pub fn donor_page(vm: &DonorVm) -> Markup {
    desktop_layout(
        "Donor Dashboard",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Donor Dashboard" }
                p class="muted" { "Manage your food donations and track your impact" }

                div class="stat-grid" style="grid-template-columns: repeat(3, 1fr); margin-bottom: 1.5rem;" {
                    (stat_card("Total Donations", &vm.stats.total.to_string()))
                    (stat_card("Active Listings", &vm.stats.active.to_string()))
                    (stat_card("Claimed", &vm.stats.claimed.to_string()))
                }

                (create_listing_form(vm.form_error.as_deref()))

                h2 { "My Food Listings" }
                @if vm.listings.is_empty() {
                    div class="card" style="text-align: center; padding: 3rem;" {
                        h3 { "No listings yet" }
                        p class="muted" { "Create your first food donation listing to get started" }
                    }
                } @else {
                    @for listing in &vm.listings {
                        (listing_card(listing, CardViewer::Donor, vm.now))
                    }
                }
            }
        },
    )
}

pub fn create_listing_form(error: Option<&str>) -> Markup {
    html! {
        div class="card" {
            h2 { "Create New Food Listing" }

            @if let Some(msg) = error {
                div class="notice-error" { (msg) }
            }

            form action="/donor/listings" method="post" class="stacked" {
                label for="food_name" { "Food Item Name *" }
                input id="food_name" name="food_name"
                    placeholder="e.g., Fresh Vegetables, Cooked Rice";

                label for="quantity" { "Quantity *" }
                input id="quantity" name="quantity"
                    placeholder="e.g., 10 servings, 5 kg, 20 pieces";

                label for="description" { "Description" }
                textarea id="description" name="description" rows="3"
                    placeholder="Additional details about the food, preparation method, storage conditions..." {}

                label for="category" { "Category" }
                select id="category" name="category" {
                    option value="" { "Select category" }
                    @for c in CATEGORIES {
                        option value=(c) { (c) }
                    }
                }

                label for="expires_at" { "Expiry Time *" }
                input id="expires_at" name="expires_at" type="datetime-local";

                label for="pickup_window" { "Pickup Window *" }
                input id="pickup_window" name="pickup_window"
                    placeholder="e.g., Today 2:00 PM - 6:00 PM";

                label for="location" { "Pickup Location" }
                input id="location" name="location" placeholder="e.g., Downtown Bakery, Main St";

                button type="submit" class="primary" style="margin-top: 1rem;" { "Create Listing" }
            }
        }
    }
}
