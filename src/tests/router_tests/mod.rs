mod admin_tests;
mod auth_tests;
mod browse_tests;
