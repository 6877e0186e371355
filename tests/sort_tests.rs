//! Integration tests for the locale-aware sort helper.
//!
//! One test per behavior of the contract: alphabetical order, no input
//! mutation, empty and singleton inputs, case handling under collation,
//! accented characters, and duplicate multiplicity.

use pretty_assertions::assert_eq;

use keyfan::sorted;

#[test]
fn sorts_strings_in_alphabetical_order() {
    let input = ["banana", "apple", "cherry"];
    assert_eq!(sorted(&input), vec!["apple", "banana", "cherry"]);
}

#[test]
fn does_not_mutate_the_original_slice() {
    let input = vec!["zebra".to_string(), "apple".to_string(), "dog".to_string()];
    let original = input.clone();

    let _ = sorted(&input);

    assert_eq!(input, original);
}

#[test]
fn handles_empty_input() {
    assert_eq!(sorted::<&str>(&[]), Vec::<String>::new());
}

#[test]
fn handles_single_element() {
    assert_eq!(sorted(&["hello"]), vec!["hello"]);
}

#[test]
fn mixed_case_orders_by_letter_not_code_point() {
    // ASCII order would put "Cherry" before "banana".
    let input = ["Apple", "banana", "Cherry"];
    assert_eq!(sorted(&input), vec!["Apple", "banana", "Cherry"]);
}

#[test]
fn unicode_characters_file_under_their_base_letter() {
    let input = ["café", "apple", "naïve"];
    assert_eq!(sorted(&input), vec!["apple", "café", "naïve"]);
}

#[test]
fn duplicates_keep_their_multiplicity() {
    let input = ["apple", "banana", "apple", "cherry"];
    assert_eq!(sorted(&input), vec!["apple", "apple", "banana", "cherry"]);
}
