use affix_name::{Filter, Name, Prefix, Suffix};
use proptest::prelude::*;

fn filters() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::prefix().clone()),
        Just(Filter::suffix().clone()),
        Just(Filter::new("[0-9]").unwrap()),
        Just(Filter::new(r"\s").unwrap()),
        Just(Filter::new("[^a-z]").unwrap()),
    ]
}

proptest! {
    #[test]
    fn nothing_disallowed_survives(raw in "\\PC*", filter in filters()) {
        let clean = Prefix::define(&raw, &filter);
        prop_assert!(!filter.matches(&clean));
    }

    #[test]
    fn define_is_idempotent(raw in "\\PC*", filter in filters()) {
        let once = Suffix::define(&raw, &filter);
        prop_assert_eq!(Suffix::define(&once, &filter), once);
    }

    #[test]
    fn composite_is_concatenation(p in "\\PC{0,12}", w in "\\PC{0,12}", s in "\\PC{0,12}") {
        let expected = format!(
            "{}{}{}",
            Prefix::sanitize(&p),
            Prefix::sanitize(&w),
            Suffix::sanitize(&s)
        );
        prop_assert_eq!(Name::define(&p, &w, &s), expected);
    }

    #[test]
    fn none_never_changes_value(raw in "[a-z$_-]{0,16}") {
        let mut suffix = Suffix::from(raw.as_str());
        let before = suffix.get().to_string();
        suffix.set(None);
        prop_assert_eq!(suffix.get(), before.as_str());
    }
}
