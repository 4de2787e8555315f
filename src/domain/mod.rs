pub mod filter;
pub mod lifecycle;
pub mod listing;
