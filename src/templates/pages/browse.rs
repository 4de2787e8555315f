use maud::{html, Markup};

use crate::auth::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::templates::components::listing_card::CardViewer;
use crate::templates::components::{listing_card, stat_card};
use crate::templates::desktop_layout;

pub struct BrowseVm {
    pub user: SessionUser,
    /// Current search term ("" when unset).
    pub search: String,
    /// Current category filter key ("all" when unset).
    pub filter: String,
    /// Available listings after search + filter, newest first.
    pub available: Vec<Listing>,
    /// This recipient's claims, newest first.
    pub claims: Vec<Listing>,
    pub now: i64,
}

const FILTER_CHIPS: [(&str, &str); 4] = [
    ("all", "All"),
    ("fresh-produce", "Produce"),
    ("prepared-meals", "Meals"),
    ("bakery", "Bakery"),
];

pub fn browse_page(vm: &BrowseVm) -> Markup {
    let viewer = CardViewer::Recipient {
        email: &vm.user.email,
    };

    desktop_layout(
        "Find Food",
        Some(&vm.user),
        html! {
            main class="container" {
                h1 { "Find Food Near You" }
                p class="muted" { "Discover and claim available food donations in your area" }

                div class="stat-grid" style="grid-template-columns: repeat(2, 1fr); margin-bottom: 1.5rem;" {
                    (stat_card("Available Food", &vm.available.len().to_string()))
                    (stat_card("My Claims", &vm.claims.len().to_string()))
                }

                div class="card" {
                    form action="/browse" method="get" style="display: flex; gap: 8px;" {
                        input type="hidden" name="filter" value=(vm.filter);
                        input name="q" value=(vm.search) placeholder="Search for food items..."
                            style="flex: 1; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px;";
                        button type="submit" class="primary" { "Search" }
                    }

                    div style="display: flex; gap: 8px; margin-top: 0.75rem;" {
                        @for (key, label) in FILTER_CHIPS {
                            a
                                class=(if vm.filter == key { "chip active" } else { "chip" })
                                href=(chip_href(key, &vm.search))
                            { (label) }
                        }
                    }
                }

                h2 { "Available Food (" (vm.available.len()) ")" }
                @if vm.available.is_empty() {
                    div class="card" style="text-align: center; padding: 3rem;" {
                        h3 { "No food available" }
                        @if vm.search.is_empty() {
                            p class="muted" { "Check back later for new donations." }
                        } @else {
                            p class="muted" { "No food matches your search." }
                            a href="/browse" { "Clear Search" }
                        }
                    }
                } @else {
                    @for listing in &vm.available {
                        (listing_card(listing, viewer, vm.now))
                    }
                }

                h2 { "My Claims (" (vm.claims.len()) ")" }
                @if vm.claims.is_empty() {
                    div class="card" style="text-align: center; padding: 3rem;" {
                        h3 { "No claimed food yet" }
                        p class="muted" { "When you claim food donations, they'll appear here" }
                    }
                } @else {
                    @for listing in &vm.claims {
                        (listing_card(listing, viewer, vm.now))
                    }
                }
            }
        },
    )
}

fn chip_href(filter_key: &str, search: &str) -> String {
    if search.is_empty() {
        format!("/browse?filter={filter_key}")
    } else {
        let q: String = url::form_urlencoded::byte_serialize(search.as_bytes()).collect();
        format!("/browse?filter={filter_key}&q={q}")
    }
}
