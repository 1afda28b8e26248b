//! Property-based tests for the padding heuristic.

use proptest::prelude::*;

use sonora_tags::{PaddingInfo, TagError};

/// Non-negative file sizes, kept well away from overflow.
fn filesize_strategy() -> impl Strategy<Value = i64> {
    0i64..=(1 << 40)
}

/// Padding left after a save: deficits and surpluses alike.
fn padding_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-100_000i64..100_000, Just(0), any::<i32>().prop_map(i64::from)]
}

proptest! {
    #[test]
    fn valid_pairs_construct(filesize in filesize_strategy(), padding in padding_strategy()) {
        match PaddingInfo::new(padding, filesize) {
            Ok(info) => {
                prop_assert!(filesize - padding >= 0);
                prop_assert_eq!(info.size, filesize - padding);
                prop_assert_eq!(info.padding, padding);
            }
            Err(TagError::InvalidPadding { .. }) => prop_assert!(filesize - padding < 0),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn unknown_size_passes_through(padding in any::<i64>()) {
        let info = PaddingInfo::new(padding, -1).unwrap();
        prop_assert_eq!(info.size, -1);
    }

    #[test]
    fn filesize_below_minus_one_is_rejected(padding in any::<i64>(), filesize in i64::MIN..-1) {
        let is_invalid_filesize = matches!(
            PaddingInfo::new(padding, filesize),
            Err(TagError::InvalidFilesize(f)) if f == filesize
        );
        prop_assert!(is_invalid_filesize);
    }

    #[test]
    fn thresholds_grow_with_size(a in 0i64..(1 << 40), b in 0i64..(1 << 40)) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let (low_s, high_s) = PaddingInfo::new(0, small).unwrap().thresholds();
        let (low_l, high_l) = PaddingInfo::new(0, large).unwrap().thresholds();
        prop_assert!(low_s <= low_l);
        prop_assert!(high_s <= high_l);
    }

    #[test]
    fn default_padding_is_kept_or_low(filesize in filesize_strategy(), padding in padding_strategy()) {
        prop_assume!(filesize - padding >= 0);
        let info = PaddingInfo::new(padding, filesize).unwrap();
        let (low, high) = info.thresholds();
        let chosen = info.default_padding();

        prop_assert!(low >= 1024);
        if (0..=high).contains(&padding) {
            prop_assert_eq!(chosen, padding);
        } else {
            prop_assert_eq!(chosen, low);
        }
    }

    #[test]
    fn policy_always_wins(filesize in filesize_strategy(), padding in padding_strategy(), answer in any::<i64>()) {
        prop_assume!(filesize - padding >= 0);
        let info = PaddingInfo::new(padding, filesize).unwrap();
        prop_assert_eq!(info.resolve(Some(&|_: &PaddingInfo| answer)), answer);
        prop_assert_eq!(info.resolve(None), info.default_padding());
    }
}

#[test]
fn documented_cases() {
    let cases = [
        // (padding, filesize, expected)
        (0, -1, 0),
        (-5, -1, 1024),
        (10_000, -1, 1024),
        (2000, 100_000, 2000),
        (8000, 100_000, 1484),
    ];

    for (padding, filesize, expected) in cases {
        let info = PaddingInfo::new(padding, filesize).unwrap();
        assert_eq!(info.default_padding(), expected, "{info}");
    }
}
