// src/config.rs
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

/// Runtime configuration, read once at startup.
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    /// Base URL of the external identity provider.
    pub identity_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: parse_or("BIND_ADDR", "127.0.0.1:3000"),
            db_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "sharenserve.sqlite3".into()),
            identity_url: env::var("IDENTITY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9000/auth".into()),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    match raw.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid {key} value {raw:?} ({e}), using default {default}");
            default
                .parse()
                .unwrap_or_else(|_| panic!("default for {key} must parse"))
        }
    }
}
