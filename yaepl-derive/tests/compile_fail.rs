//! Compile-fail tests to verify error messages
//!
//! These tests ensure that deriving `Populate` on something that is not a
//! record produces a clear error pointing at the offending item.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
