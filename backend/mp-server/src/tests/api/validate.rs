use crate::api::validate::{in_range, optional_text, required_text, text_list};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

#[test]
fn given_padded_text_when_required_then_trimmed() {
    assert_that!(required_text("  Garlic ", "name", 20), ok(eq("Garlic")));
}

#[test]
fn given_blank_text_when_required_then_error() {
    assert_that!(required_text("   ", "name", 20), err(anything()));
}

#[test]
fn given_text_over_limit_when_required_then_error() {
    assert_that!(required_text("abcdef", "name", 5), err(anything()));
}

#[test]
fn given_blank_optional_text_when_validated_then_none() {
    assert_that!(optional_text(Some("  "), "unit", 5).unwrap(), none());
    assert_that!(optional_text(None, "unit", 5).unwrap(), none());
    assert_that!(optional_text(Some("g"), "unit", 5).unwrap(), some(eq("g")));
}

#[test]
fn given_list_with_blanks_when_validated_then_blanks_dropped() {
    let values = vec![" vegan ".to_string(), "".to_string(), "nut-free".to_string()];

    let cleaned = text_list(&values, "dietary", 20).unwrap();

    assert_eq!(cleaned, vec!["vegan".to_string(), "nut-free".to_string()]);
}

#[test]
fn given_value_outside_range_when_checked_then_error() {
    assert_that!(in_range(0, "familySize", 1, 20), err(anything()));
    assert_that!(in_range(21, "familySize", 1, 20), err(anything()));
    assert_that!(in_range(4, "familySize", 1, 20), ok(eq(&4)));
}
