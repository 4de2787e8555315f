pub mod admin;
pub mod auth;
pub mod browse;
pub mod donor;
pub mod home;

pub use admin::{admin_page, AdminVm};
pub use auth::auth_page;
pub use browse::{browse_page, BrowseVm};
pub use donor::{donor_page, DonorVm};
pub use home::home_page;
