use astra::Body;
use http::{Method, Request};
use std::io::Read;

use crate::db::listings::{insert_listing, listings_claimed_by};
use crate::domain::listing::{NewListing, Role};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{create_signed_in_user, dummy_identity, init_test_db, now_unix};

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn seed_listing(db: &crate::db::Database, donor_id: i64, name: &str, category: &str) -> i64 {
    let now = now_unix();
    let new = NewListing {
        food_name: name.into(),
        quantity: "plenty".into(),
        description: format!("{name} from a local kitchen"),
        category: category.into(),
        expires_at: Some(now + 12 * 3600),
        pickup_window: "Today 4:00 PM - 7:00 PM".into(),
        ..NewListing::default()
    };
    db.with_conn(|conn| insert_listing(conn, donor_id, &new, now))
        .expect("Failed to seed listing")
}

fn get_browse(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap()
}

#[test]
fn browse_requires_login() {
    let db = init_test_db();
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/browse")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/auth");
}

#[test]
fn search_narrows_by_name() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (donor_id, _) = create_signed_in_user(&db, "donor@example.com", Role::Donor);
    let (_, token) = create_signed_in_user(&db, "r@example.com", Role::Recipient);

    seed_listing(&db, donor_id, "Fresh Bread", "Bakery");
    seed_listing(&db, donor_id, "Fresh Vegetables", "Fresh Produce");

    let resp = handle(get_browse("/browse?q=bread", &token), &db, &identity).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Fresh Bread"));
    assert!(!body.contains("Fresh Vegetables"));
}

#[test]
fn category_filter_narrows_by_slug() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (donor_id, _) = create_signed_in_user(&db, "donor@example.com", Role::Donor);
    let (_, token) = create_signed_in_user(&db, "r@example.com", Role::Recipient);

    seed_listing(&db, donor_id, "Bread", "Bakery");
    seed_listing(&db, donor_id, "Vegetables", "Fresh Produce");

    let resp = handle(get_browse("/browse?filter=bakery", &token), &db, &identity).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Bread"));
    assert!(!body.contains("Vegetables"));
}

#[test]
fn claim_marks_listing_and_shows_under_my_claims() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (donor_id, _) = create_signed_in_user(&db, "donor@example.com", Role::Donor);
    let (_, token) = create_signed_in_user(&db, "r@example.com", Role::Recipient);

    let id = seed_listing(&db, donor_id, "Cooked Rice", "Prepared Meals");

    let req = Request::builder()
        .method(Method::POST)
        .uri(format!("/listings/{id}/claim"))
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/browse");

    let claims = db
        .with_conn(|conn| listings_claimed_by(conn, "r@example.com"))
        .unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].id, id);

    // The browse page now shows it claimed by the signed-in recipient.
    let body = body_string(handle(get_browse("/browse", &token), &db, &identity).unwrap());
    assert!(body.contains("Claimed by you"));
}

#[test]
fn second_claim_conflicts() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (donor_id, _) = create_signed_in_user(&db, "donor@example.com", Role::Donor);
    let (_, first) = create_signed_in_user(&db, "first@example.com", Role::Recipient);
    let (_, second) = create_signed_in_user(&db, "second@example.com", Role::Recipient);

    let id = seed_listing(&db, donor_id, "Sandwiches", "Prepared Meals");

    let claim = |token: &str| {
        Request::builder()
            .method(Method::POST)
            .uri(format!("/listings/{id}/claim"))
            .header("Cookie", format!("session={token}"))
            .body(Body::empty())
            .unwrap()
    };

    handle(claim(&first), &db, &identity).expect("First claim should succeed");

    let err = handle(claim(&second), &db, &identity).unwrap_err();
    assert!(matches!(err, ServerError::Conflict(_)));

    // First claimant stands.
    let claims = db
        .with_conn(|conn| listings_claimed_by(conn, "first@example.com"))
        .unwrap();
    assert_eq!(claims.len(), 1);
}

#[test]
fn claiming_missing_listing_is_not_found() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (_, token) = create_signed_in_user(&db, "r@example.com", Role::Recipient);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/listings/424242/claim")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &db, &identity).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
