use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use rutils::sequence::{PopStrategy, Sequence};

proptest! {
    #[test]
    fn absent_values_are_neither_contained_nor_deleted(
        values in vec(any::<i64>(), 0..32),
        missing in any::<i64>(),
    ) {
        prop_assume!(!values.contains(&missing));

        let mut seq = Sequence::from(values.clone());
        prop_assert!(!seq.contains(&missing));
        prop_assert_eq!(seq.index(&missing), None);

        seq.delete(&missing);
        prop_assert_eq!(seq.into_vec(), values);
    }

    #[test]
    fn pop_returns_the_prior_last_element(values in hash_set(any::<i64>(), 1..32)) {
        let values: Vec<i64> = values.into_iter().collect();

        let mut positional = Sequence::from(values.clone());
        prop_assert_eq!(positional.pop(), values.last().copied());
        prop_assert_eq!(positional.len(), values.len() - 1);

        // without duplicates both strategies agree
        let mut by_value = Sequence::from(values.clone());
        prop_assert_eq!(by_value.pop_with(1, PopStrategy::ByValue), values.last().copied());
        prop_assert_eq!(by_value, positional);
    }

    #[test]
    fn uniq_is_idempotent(values in vec(0_i64..8, 0..40)) {
        let mut once = Sequence::from(values.clone());
        once.uniq();

        let mut twice = once.clone();
        twice.uniq();
        prop_assert_eq!(&twice, &once);

        for value in &values {
            prop_assert!(once.contains(value));
        }
        for (i, value) in once.iter().enumerate() {
            prop_assert_eq!(once.index(value), Some(i));
        }
    }

    #[test]
    fn identity_map_reproduces_the_sequence(values in vec(".{0,8}", 0..16)) {
        let seq = Sequence::from(values);
        prop_assert_eq!(seq.map(|s| s.clone()), seq);
    }

    #[test]
    fn integer_text_round_trip_is_exact(values in vec(any::<i64>(), 0..32)) {
        let seq = Sequence::from(values);
        let reparsed = seq.to_text_sequence().to_i64_sequence();
        prop_assert_eq!(reparsed, Ok(seq));
    }

    #[test]
    fn float_text_rendering_is_stable(values in vec(-1e12_f64..1e12, 0..32)) {
        let seq = Sequence::from(values);
        let rendered = seq.to_text_sequence();
        let reparsed = rendered.to_f64_sequence();
        prop_assert!(reparsed.is_ok());
        if let Ok(reparsed) = reparsed {
            prop_assert_eq!(reparsed.to_text_sequence(), rendered);
        }
    }

    #[test]
    fn select_never_grows(values in vec(any::<i64>(), 0..32), pivot in any::<i64>()) {
        let seq = Sequence::from(values);
        let selected = seq.select(|n| *n > pivot);
        prop_assert!(selected.len() <= seq.len());
        prop_assert!(selected.iter().all(|n| *n > pivot));
    }
}
