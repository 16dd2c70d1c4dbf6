#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2024..3000).contains(&year), "unexpected year {year}");
}

#[test]
fn notify_is_noop_but_callable() {
    notify("Registration successful! Please log in.");
}
