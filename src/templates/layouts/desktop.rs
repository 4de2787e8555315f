use maud::{html, Markup, DOCTYPE};

use crate::auth::sessions::SessionUser;
use crate::domain::listing::Role;

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header.site { display: flex; align-items: center; justify-content: space-between;
  padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header.site nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1.25rem; margin-bottom: 1.5rem; }
.card.urgent { border-left: 4px solid #f59e0b; background: #fffbeb; }
.stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.stat-card { text-align: center; padding: 1rem; border: 1px solid #e5e7eb; border-radius: 8px; }
.stat-card .value { font-size: 1.75rem; font-weight: bold; }
.stat-card .label { font-size: 0.85rem; color: #6b7280; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 9999px; font-size: 0.8rem; }
.badge-available { background: #dcfce7; color: #166534; }
.badge-claimed { background: #dbeafe; color: #1e40af; }
.badge-expired { background: #fee2e2; color: #991b1b; }
.badge-category { background: #f3f4f6; color: #374151; }
.text-urgent { color: #dc2626; font-weight: 600; }
.text-warning { color: #d97706; font-weight: 600; }
.text-normal { color: #16a34a; font-weight: 600; }
.notice-error { background: #fee2e2; color: #991b1b; padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.notice-info { background: #dbeafe; color: #1e40af; padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.muted { color: #6b7280; font-size: 0.9rem; }
button.primary { background: #16a34a; color: white; border: none; border-radius: 6px;
  padding: 8px 16px; font-size: 1rem; cursor: pointer; }
.chip { display: inline-block; padding: 4px 12px; border: 1px solid #d1d5db; border-radius: 9999px;
  text-decoration: none; color: #374151; font-size: 0.9rem; }
.chip.active { background: #16a34a; border-color: #16a34a; color: white; }
form.stacked label { display: block; margin: 0.75rem 0 0.25rem; font-weight: 500; }
form.stacked input, form.stacked select, form.stacked textarea {
  width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box; }
"#;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Donor => "Donor",
        Role::Recipient => "Recipient",
        Role::Admin => "Platform Admin",
    }
}

pub fn desktop_layout(title: &str, user: Option<&SessionUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Share-n-Serve" }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                header class="site" {
                    a href="/" style="display: flex; align-items: center; gap: 8px; text-decoration: none; color: inherit;" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#16a34a"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="M19 14c1.49 -1.46 3 -3.21 3 -5.5a5.5 5.5 0 0 0 -11 0a5.5 5.5 0 0 0 -11 0c0 2.29 1.51 4.04 3 5.5l8 8z" {}
                        }
                        h3 style="margin: 0;" { "Share-n-Serve" }
                    }

                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            @if let Some(u) = user {
                                li { a href=(u.role.dashboard_path()) { "Dashboard" } }
                            }
                        }
                    }

                    @match user {
                        Some(u) => {
                            div style="display: flex; align-items: center; gap: 12px;" {
                                span class="badge badge-category" { (role_label(u.role)) }
                                span class="muted" { (u.email) }
                                form action="/auth/sign-out" method="post" style="margin: 0;" {
                                    button type="submit" style="background: none; border: 1px solid #d1d5db; border-radius: 6px; padding: 4px 10px; cursor: pointer;" {
                                        "Sign out"
                                    }
                                }
                            }
                        }
                        None => {
                            a href="/auth" { "Sign in" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
