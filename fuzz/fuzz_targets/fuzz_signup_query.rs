//! Fuzz target: query-string decoding of `SignupQuery`.
//!
//! Arbitrary query strings must either decode to an email or be rejected,
//! never panic. Whatever decodes must enroll exactly once.

#![no_main]

use axum::{extract::Query, http::Uri};
use libfuzzer_sys::fuzz_target;
use mergington_core::ActivityDirectory;
use mergington_gateway::routes::SignupQuery;

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(uri) = format!("/activities/Chess%20Club/signup?{query}").parse::<Uri>() else {
        return;
    };
    let Ok(Query(decoded)) = Query::<SignupQuery>::try_from_uri(&uri) else {
        return;
    };

    let dir = ActivityDirectory::seeded();
    let seeded = dir.get("Chess Club").map(|r| r.participants.len()).unwrap_or_default();
    if dir.enroll("Chess Club", decoded.email.as_str()).is_ok() {
        assert!(dir.enroll("Chess Club", decoded.email.as_str()).is_err());
        let now = dir.get("Chess Club").map(|r| r.participants.len()).unwrap_or_default();
        assert_eq!(now, seeded + 1);
    }
});
