//! Locale-aware string sorting.
//!
//! [`sorted`] returns a stably sorted copy of a string slice, ordered by
//! Unicode collation rather than code-point value. Code-point comparison
//! gets mixed-case input wrong (`"Cherry" < "banana"` because `C` < `b` in
//! ASCII); collation orders by letter first and case only as a tiebreak, so
//! `"banana"` sorts before `"Cherry"` the way a person would file them.
//!
//! The collator is built once from the compiled collation data shipped with
//! `icu_collator` and reused for every call. Tertiary strength keeps the
//! comparison case-sensitive: `"apple"` and `"Apple"` are distinct, they
//! just sort adjacently.

use std::sync::OnceLock;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;

fn collator() -> &'static Collator {
    static COLLATOR: OnceLock<Collator> = OnceLock::new();
    COLLATOR.get_or_init(|| {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        // Compiled collation data is baked into the binary, so construction
        // cannot fail at runtime.
        Collator::try_new(&locale!("en").into(), options)
            .expect("compiled collation data is always available")
    })
}

/// Returns a locale-aware, case-sensitive, stably sorted copy of `input`.
///
/// The input is never mutated. Duplicates keep their multiplicity, and ties
/// keep their input order (stable sort). An empty slice yields an empty
/// vector.
///
/// # Examples
///
/// ```
/// use keyfan::sorted;
///
/// assert_eq!(
///     sorted(&["banana", "apple", "cherry"]),
///     vec!["apple", "banana", "cherry"]
/// );
///
/// // Collation, not code-point order: 'é' files under 'e'.
/// assert_eq!(
///     sorted(&["café", "apple", "naïve"]),
///     vec!["apple", "café", "naïve"]
/// );
///
/// // Mixed case orders by letter, not by ASCII value.
/// assert_eq!(
///     sorted(&["Apple", "banana", "Cherry"]),
///     vec!["Apple", "banana", "Cherry"]
/// );
/// ```
pub fn sorted<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut out: Vec<String> = input.iter().map(|s| s.as_ref().to_string()).collect();
    out.sort_by(|a, b| collator().compare(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_alphabetically() {
        assert_eq!(
            sorted(&["banana", "apple", "cherry"]),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn collation_beats_code_point_order_for_mixed_case() {
        // Code-point order would yield ["Apple", "Cherry", "banana"].
        assert_eq!(
            sorted(&["Cherry", "banana", "Apple"]),
            vec!["Apple", "banana", "Cherry"]
        );
    }

    #[test]
    fn accented_characters_file_under_their_base_letter() {
        assert_eq!(
            sorted(&["café", "apple", "naïve"]),
            vec!["apple", "café", "naïve"]
        );
    }

    #[test]
    fn empty_and_singleton() {
        assert_eq!(sorted::<&str>(&[]), Vec::<String>::new());
        assert_eq!(sorted(&["hello"]), vec!["hello"]);
    }
}
