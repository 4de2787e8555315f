use astra::Body;
use http::{Method, Request};
use std::io::Read;

use crate::db::listings::{claim_listing, insert_listing};
use crate::domain::listing::{NewListing, Role};
use crate::router::handle;
use crate::tests::utils::{create_signed_in_user, dummy_identity, init_test_db, now_unix};

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn get_admin(token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap()
}

#[test]
fn admin_page_requires_admin_role() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (_, token) = create_signed_in_user(&db, "d@example.com", Role::Donor);

    let resp = handle(get_admin(&token), &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/donor");
}

#[test]
fn admin_page_reports_platform_metrics() {
    let db = init_test_db();
    let identity = dummy_identity();
    let now = now_unix();

    let (donor_id, _) = create_signed_in_user(&db, "donor@example.com", Role::Donor);
    create_signed_in_user(&db, "r@example.com", Role::Recipient);
    let (_, token) = create_signed_in_user(&db, "admin@example.com", Role::Admin);

    let seed = |name: &str, expires_at: i64| {
        let new = NewListing {
            food_name: name.into(),
            quantity: "some".into(),
            expires_at: Some(expires_at),
            pickup_window: "Today".into(),
            ..NewListing::default()
        };
        db.with_conn(|conn| insert_listing(conn, donor_id, &new, now))
            .unwrap()
    };

    seed("Active Listing", now + 24 * 3600);
    seed("Stale Listing", now - 3600);
    let claimed = seed("Claimed Listing", now + 24 * 3600);
    db.with_conn(|conn| claim_listing(conn, claimed, "r@example.com"))
        .unwrap();

    let resp = handle(get_admin(&token), &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Platform Analytics"));
    assert!(body.contains("Listing Analytics"));
    assert!(body.contains("User Distribution"));

    // Recent-listings table carries all three rows and the claimant.
    assert!(body.contains("Active Listing"));
    assert!(body.contains("Stale Listing"));
    assert!(body.contains("Claimed Listing"));
    assert!(body.contains("r@example.com"));
}
