use proptest::prelude::*;

use meridian_types::{AbciParams, ContractViolation, Duration, Height, PbtsParams};

proptest! {
    /// Height::new accepts exactly the heights >= 1.
    #[test]
    fn height_bound(v in any::<i64>()) {
        match Height::new(v) {
            Ok(h) => {
                prop_assert!(v >= 1);
                prop_assert_eq!(h.value(), v);
            }
            Err(e) => {
                prop_assert!(v < 1);
                prop_assert_eq!(e, ContractViolation::HeightBelowOne { height: v });
            }
        }
    }

    /// Vote-extension predicate: false when disabled, `enable <= h` otherwise.
    #[test]
    fn vote_extension_predicate(enable in 0i64..1_000_000, h in 1i64..1_000_000) {
        let abci = AbciParams { vote_extensions_enable_height: enable };
        let expected = enable != 0 && enable <= h;
        prop_assert_eq!(abci.vote_extensions_enabled(Height::new(h).unwrap()), expected);
    }

    /// PBTS predicate follows the same rule.
    #[test]
    fn pbts_predicate(enable in 0i64..1_000_000, h in 1i64..1_000_000) {
        let pbts = PbtsParams { pbts_enable_height: enable };
        let expected = enable != 0 && enable <= h;
        prop_assert_eq!(pbts.pbts_enabled(Height::new(h).unwrap()), expected);
    }

    /// The human form parses back to the same duration.
    #[test]
    fn duration_display_parses_back(nanos in any::<i64>()) {
        prop_assume!(nanos != i64::MIN);
        let d = Duration::from_nanos(nanos);
        prop_assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
    }

    /// Splitting into protobuf seconds/nanos and joining again is lossless.
    #[test]
    fn duration_seconds_nanos_lossless(nanos in any::<i64>()) {
        let d = Duration::from_nanos(nanos);
        let (secs, sub) = d.to_seconds_nanos();
        prop_assert!(sub.unsigned_abs() < 1_000_000_000);
        prop_assert_eq!(Duration::from_seconds_nanos(secs, sub), d);
    }

    /// Ordering of durations agrees with ordering of nanoseconds.
    #[test]
    fn duration_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Duration::from_nanos(a) <= Duration::from_nanos(b), a <= b);
        prop_assert_eq!(Duration::from_nanos(a).is_positive(), a > 0);
    }
}
