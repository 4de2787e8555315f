use maud::{html, Markup};

pub mod listing_card;

pub use listing_card::listing_card;

pub fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="stat-card" {
            div class="value" { (value) }
            div class="label" { (label) }
        }
    }
}

/// One-shot user-visible message: validation failures and identity-provider
/// rejections render as `Error`, everything else as `Info`.
pub enum Notice {
    Error(String),
    Info(String),
}

pub fn notice(n: &Notice) -> Markup {
    match n {
        Notice::Error(msg) => html! { div class="notice-error" { (msg) } },
        Notice::Info(msg) => html! { div class="notice-info" { (msg) } },
    }
}
