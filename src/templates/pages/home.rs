// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

const STATS: [(&str, &str); 4] = [
    ("10K+", "Meals Shared"),
    ("2.5K", "Active Donors"),
    ("15K", "Families Helped"),
    ("50+", "Partner NGOs"),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Expiry Tracking",
        "Listings show time remaining so food moves before it goes to waste.",
    ),
    (
        "Claim in One Click",
        "Recipients browse nearby donations and reserve them instantly.",
    ),
    (
        "Community Impact",
        "Administrators track donations, claims, and platform growth.",
    ),
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        None,
        html! {
            main class="container" {
                section style="text-align: center; padding: 3rem 0;" {
                    h1 style="font-size: 2.5rem; margin-bottom: 0.5rem;" { "Share-n-Serve" }
                    p class="muted" style="font-size: 1.2rem; max-width: 36rem; margin: 0 auto 2rem;" {
                        "Connect surplus food with those in need. Real-time listings and community impact tracking."
                    }

                    a href="/auth" {
                        button class="primary" style="font-size: 1.1rem; padding: 12px 24px;" {
                            "Sign in or create an account"
                        }
                    }

                    div class="stat-grid" style="max-width: 40rem; margin: 3rem auto 0;" {
                        @for (number, label) in STATS {
                            div class="stat-card" {
                                div class="value" { (number) }
                                div class="label" { (label) }
                            }
                        }
                    }
                }

                section {
                    h2 style="text-align: center;" { "How It Works" }
                    div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem;" {
                        @for (title, description) in FEATURES {
                            div class="card" style="text-align: center;" {
                                h3 { (title) }
                                p class="muted" { (description) }
                            }
                        }
                    }
                }

                section {
                    h2 style="text-align: center;" { "Choose Your Role" }
                    div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem;" {
                        div class="card" style="text-align: center;" {
                            h3 { "Food Donor" }
                            p class="muted" { "Share surplus food from restaurants, events, or households" }
                            a href="/auth" { "Get Started" }
                        }
                        div class="card" style="text-align: center;" {
                            h3 { "Food Recipient" }
                            p class="muted" { "Find and claim available food donations near you" }
                            a href="/auth" { "Browse Food" }
                        }
                        div class="card" style="text-align: center;" {
                            h3 { "Platform Admin" }
                            p class="muted" { "Track donations and manage community impact" }
                            a href="/auth" { "View Dashboard" }
                        }
                    }
                }

                footer style="text-align: center; padding: 2rem 0; border-top: 1px solid #e5e7eb;" {
                    p class="muted" { "Fighting food waste, feeding communities." }
                }
            }
        },
    )
}
