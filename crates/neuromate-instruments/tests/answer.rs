use neuromate_instruments::answer::{is_affirmative, normalize};

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  YeS \n"), "yes");
    assert_eq!(normalize(""), "");
}

#[test]
fn affirmative_tokens_are_recognized() {
    for token in ["yes", "y", "true", "often", "always", "frequently"] {
        assert!(is_affirmative(token), "{token}");
    }
    assert!(is_affirmative(&normalize(" Always")));
}

#[test]
fn everything_else_counts_as_no() {
    for token in ["no", "", "n", "false", "sometimes", "yes please", "1", "yess"] {
        assert!(!is_affirmative(token), "{token}");
    }
}
