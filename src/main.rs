use astra::Server;

use crate::auth::identity::IdentityClient;
use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::router::handle;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::from_env();

    let db = Database::new(config.db_path.clone());

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }
    println!("✅ Database ready at {}", config.db_path);

    let identity = IdentityClient::new(config.identity_url.clone());

    println!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db, &identity) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
