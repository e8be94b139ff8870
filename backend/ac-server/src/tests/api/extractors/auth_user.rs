use crate::api::extractors::auth_user::principal_from_headers;

use ac_auth::{AuthError, JwtIssuer, TokenLifetimes};
use ac_core::{Role, User};

use googletest::assert_that;
use googletest::prelude::eq;
use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes-long";

fn create_issuer() -> JwtIssuer {
    JwtIssuer::new(TEST_SECRET, TokenLifetimes::default(), 0)
}

fn create_user() -> User {
    User::invited(
        "grace@example.com".into(),
        "Grace".into(),
        "Hopper".into(),
        Role::Member,
        "$2b$04$hash".into(),
    )
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn given_valid_access_token_when_extracting_then_returns_principal() {
    // Given
    let issuer = create_issuer();
    let user = create_user();
    let tokens = issuer.issue_pair(&user).unwrap();
    let headers = headers_with(&format!("Bearer {}", tokens.access));

    // When
    let principal = principal_from_headers(&headers, issuer.validator()).unwrap();

    // Then
    assert_that!(principal.user_id, eq(user.id));
    assert_that!(principal.role, eq(Role::Member));
    assert!(principal.must_change_password);
}

#[test]
fn given_no_header_when_extracting_then_missing_header() {
    let issuer = create_issuer();

    let result = principal_from_headers(&HeaderMap::new(), issuer.validator());

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn given_basic_scheme_when_extracting_then_invalid_scheme() {
    let issuer = create_issuer();
    let headers = headers_with("Basic Z3JhY2U6cGFzcw==");

    let result = principal_from_headers(&headers, issuer.validator());

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_empty_bearer_when_extracting_then_invalid_scheme() {
    let issuer = create_issuer();
    let headers = headers_with("Bearer ");

    let result = principal_from_headers(&headers, issuer.validator());

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_refresh_token_when_extracting_then_wrong_token_type() {
    let issuer = create_issuer();
    let tokens = issuer.issue_pair(&create_user()).unwrap();
    let headers = headers_with(&format!("Bearer {}", tokens.refresh));

    let result = principal_from_headers(&headers, issuer.validator());

    assert!(matches!(result, Err(AuthError::WrongTokenType { .. })));
}

#[test]
fn given_token_signed_with_other_secret_when_extracting_then_error() {
    let issuer = create_issuer();
    let other = JwtIssuer::new(
        b"another-secret-key-also-32-bytes-long!",
        TokenLifetimes::default(),
        0,
    );
    let tokens = other.issue_pair(&create_user()).unwrap();
    let headers = headers_with(&format!("Bearer {}", tokens.access));

    let result = principal_from_headers(&headers, issuer.validator());

    assert!(result.is_err());
    assert!(result.unwrap_err().is_token_failure());
}
