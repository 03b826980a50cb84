use crate::Difficulty;

use std::str::FromStr;

#[test]
fn test_difficulty_as_str() {
    assert_eq!(Difficulty::Easy.as_str(), "Easy");
    assert_eq!(Difficulty::Medium.as_str(), "Medium");
    assert_eq!(Difficulty::Hard.as_str(), "Hard");
}

#[test]
fn test_difficulty_from_str() {
    assert_eq!(Difficulty::from_str("Easy").unwrap(), Difficulty::Easy);
    assert_eq!(Difficulty::from_str("Hard").unwrap(), Difficulty::Hard);
    assert!(Difficulty::from_str("Extreme").is_err());
}

#[test]
fn test_difficulty_coerce_falls_back_to_medium() {
    assert_eq!(Difficulty::coerce("Extreme"), Difficulty::Medium);
    assert_eq!(Difficulty::coerce(""), Difficulty::Medium);
    assert_eq!(Difficulty::coerce("Easy"), Difficulty::Easy);
}

#[test]
fn test_difficulty_serializes_capitalised() {
    let json = serde_json::to_string(&Difficulty::Hard).unwrap();
    assert_eq!(json, "\"Hard\"");
}
