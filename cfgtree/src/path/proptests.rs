//! Property-based tests for path parsing.

use super::{ConfigPath, Segment};
use crate::Options;
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = Segment> {
    "[a-z_][a-z0-9_-]{0,12}".prop_map(Segment::Field)
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![field_strategy(), (0usize..1000).prop_map(Segment::Index)]
}

fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Joining canonical segments and parsing them back is lossless
    #[test]
    fn join_then_parse_recovers_segments(segments in segments_strategy()) {
        let opts = Options::new().with_path_sep(".");
        let joined = ConfigPath::from_segments(segments.clone()).join(".");
        let parsed = ConfigPath::parse(&joined, None, &opts).unwrap();
        prop_assert_eq!(parsed.segments(), segments.as_slice());
    }

    // A trailing index behaves like one more separated segment
    #[test]
    fn trailing_index_equals_extra_segment(segments in segments_strategy(), idx in 0usize..1000) {
        let opts = Options::new().with_path_sep("/");
        let joined = ConfigPath::from_segments(segments).join("/");

        let with_idx = ConfigPath::parse(&joined, Some(idx), &opts).unwrap();
        let spelled_out = ConfigPath::parse(&format!("{joined}/{idx}"), None, &opts).unwrap();
        prop_assert_eq!(with_idx, spelled_out);
    }

    // Without a separator nothing is ever split
    #[test]
    fn unsplit_path_is_one_segment(raw in "[a-z.]{1,20}") {
        let parsed = ConfigPath::parse(&raw, None, &Options::new()).unwrap();
        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(&parsed.segments()[0], &Segment::Field(raw.clone()));
    }

    // Splitting yields one segment per separator plus one
    #[test]
    fn split_count_matches_separators(raw in "[a-z.]{0,20}") {
        prop_assume!(!raw.is_empty());
        let opts = Options::new().with_path_sep(".");
        let parsed = ConfigPath::parse(&raw, None, &opts).unwrap();
        prop_assert_eq!(parsed.len(), raw.matches('.').count() + 1);
    }
}
