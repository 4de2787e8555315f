use astra::Body;
use http::{Method, Request};
use std::io::Read;

use crate::domain::listing::Role;
use crate::router::handle;
use crate::tests::utils::{create_signed_in_user, dummy_identity, init_test_db};

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn auth_page_renders_both_forms() {
    let db = init_test_db();
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/auth")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Account Access"));
    assert!(body.contains("/auth/sign-in"));
    assert!(body.contains("/auth/sign-up"));
}

#[test]
fn auth_page_redirects_when_already_signed_in() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (_, token) = create_signed_in_user(&db, "r@example.com", Role::Recipient);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/auth")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}

#[test]
fn sign_in_requires_email_and_password() {
    let db = init_test_db();
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-in")
        .body(Body::from("email=&password=".to_string()))
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please enter your email and password."));
}

#[test]
fn sign_in_rejects_malformed_email() {
    let db = init_test_db();
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-in")
        .body(Body::from("email=not-an-address&password=secret".to_string()))
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("valid email address"));
}

#[test]
fn unreachable_provider_surfaces_as_notice_not_failure() {
    let db = init_test_db();
    // Port 1 is never listening; the call fails fast.
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-in")
        .body(Body::from("email=a%40example.com&password=secret".to_string()))
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Could not reach sign-in service"));
}

#[test]
fn sign_out_revokes_the_session() {
    let db = init_test_db();
    let identity = dummy_identity();
    let (_, token) = create_signed_in_user(&db, "d@example.com", Role::Donor);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-out")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert!(resp
        .headers()
        .get("Set-Cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("Max-Age=0"));

    // The old token no longer opens the dashboard.
    let req = Request::builder()
        .method(Method::GET)
        .uri("/donor")
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/auth");
}

#[test]
fn home_redirects_signed_in_users_to_their_dashboard() {
    let db = init_test_db();
    let identity = dummy_identity();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &db, &identity).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Share-n-Serve"));

    for (email, role, target) in [
        ("d@example.com", Role::Donor, "/donor"),
        ("r@example.com", Role::Recipient, "/browse"),
        ("a@example.com", Role::Admin, "/admin"),
    ] {
        let (_, token) = create_signed_in_user(&db, email, role);
        let req = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header("Cookie", format!("session={token}"))
            .body(Body::empty())
            .unwrap();
        let resp = handle(req, &db, &identity).expect("Handler failed");
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers().get("Location").unwrap(), target);
    }
}
