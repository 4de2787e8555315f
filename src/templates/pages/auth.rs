use crate::templates::components::{notice, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Login / sign-up page. `message` is the one-shot notice from the last
/// submission attempt, if any.
pub fn auth_page(message: Option<&Notice>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container" style="max-width: 28rem;" {
                header style="text-align: center; margin-bottom: 1.5rem;" {
                    h1 { "Account Access" }
                    p class="muted" { "Sign in or create a new account to get started." }
                }

                @if let Some(n) = message {
                    (notice(n))
                }

                div class="card" {
                    h2 { "Sign in" }
                    form action="/auth/sign-in" method="post" class="stacked" {
                        label for="signin-email" { "Email" }
                        input id="signin-email" name="email" type="email"
                            placeholder="you@example.com" autocomplete="email";

                        label for="signin-password" { "Password" }
                        input id="signin-password" name="password" type="password"
                            autocomplete="current-password";

                        button type="submit" class="primary" style="margin-top: 1rem; width: 100%;" {
                            "Sign in"
                        }
                    }
                }

                div class="card" {
                    h2 { "Create an account" }
                    form action="/auth/sign-up" method="post" class="stacked" {
                        label for="signup-email" { "Email" }
                        input id="signup-email" name="email" type="email"
                            placeholder="you@example.com" autocomplete="email";

                        label for="signup-password" { "Password" }
                        input id="signup-password" name="password" type="password"
                            placeholder="At least 6 characters" autocomplete="new-password";

                        label for="signup-role" { "I am a..." }
                        select id="signup-role" name="role" {
                            option value="donor" { "Food Donor" }
                            option value="recipient" selected { "Food Recipient" }
                        }

                        button type="submit" class="primary" style="margin-top: 1rem; width: 100%;" {
                            "Create account"
                        }
                    }
                }
            }
        },
    )
}
