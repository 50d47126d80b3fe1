//! Property-based tests for tree reads and writes.

use super::{Config, Scalar};
use crate::path::{ConfigPath, Segment};
use crate::Options;
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        any::<u64>().prop_map(Scalar::Uint),
        (-1.0e12f64..1.0e12).prop_map(Scalar::Float),
        "[a-zA-Z ]{0,16}".prop_map(Scalar::String),
    ]
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(Segment::Field),
        (0usize..6).prop_map(Segment::Index),
    ]
}

fn path_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

fn dotted() -> Options {
    Options::new().with_path_sep(".")
}

fn joined(segments: &[Segment]) -> String {
    ConfigPath::from_segments(segments.to_vec()).join(".")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // A value written at a path reads back unchanged through the matching getter
    #[test]
    fn set_then_get_roundtrip(segments in path_strategy(), scalar in scalar_strategy()) {
        let opts = dotted();
        let path = joined(&segments);
        let c = Config::new();
        c.set_scalar(&path, None, scalar.clone(), &opts).unwrap();

        match scalar {
            Scalar::Bool(b) => prop_assert_eq!(c.bool(&path, None, &opts).unwrap(), b),
            Scalar::Int(i) => prop_assert_eq!(c.int(&path, None, &opts).unwrap(), i),
            Scalar::Uint(u) => prop_assert_eq!(c.uint(&path, None, &opts).unwrap(), u),
            Scalar::Float(f) => prop_assert_eq!(c.float(&path, None, &opts).unwrap(), f),
            Scalar::String(s) => prop_assert_eq!(c.string(&path, None, &opts).unwrap(), s),
            Scalar::Nil => unreachable!("strategy never yields nil"),
        }
    }

    // Walking child by child reaches the same node as one separated path
    #[test]
    fn child_walk_matches_dotted_path(segments in path_strategy(), value in any::<i64>()) {
        let opts = dotted();
        let path = joined(&segments);
        let c = Config::new();
        c.set_int(&path, None, value, &opts).unwrap();

        let mut node = c.clone();
        for seg in &segments {
            node = match seg {
                Segment::Field(name) => node.child(name, None, &Options::new()).unwrap(),
                Segment::Index(idx) => node.child("", Some(*idx), &Options::new()).unwrap(),
            };
        }
        prop_assert!(node.ptr_eq(&c.child(&path, None, &opts).unwrap()));
        prop_assert_eq!(node.int("", None, &opts).unwrap(), value);
    }

    // A node reports the path it was written at, under any separator
    #[test]
    fn path_reconstruction(segments in path_strategy()) {
        let opts = dotted();
        let c = Config::new();
        c.set_bool(&joined(&segments), None, true, &opts).unwrap();

        let node = c.child(&joined(&segments), None, &opts).unwrap();
        let expected = ConfigPath::from_segments(segments.clone()).join("/");
        prop_assert_eq!(node.path("/"), expected);
        prop_assert!(node.root().ptr_eq(&c));
    }

    // A rejected write leaves the tree exactly as it was
    #[test]
    fn rejected_write_is_atomic(
        first in path_strategy(),
        second in path_strategy(),
        value in any::<i64>(),
    ) {
        let opts = dotted();
        let c = Config::new();
        c.set_int(&joined(&first), None, value, &opts).unwrap();
        let before = c.deep_clone();

        if c.set_int(&joined(&second), None, value, &opts).is_err() {
            prop_assert_eq!(&c, &before);
        } else {
            prop_assert_eq!(c.int(&joined(&second), None, &opts).unwrap(), value);
        }
    }

    // Arrays grow to cover the highest index written, holes included
    #[test]
    fn array_length_covers_highest_index(indices in prop::collection::vec(0usize..20, 1..8)) {
        let c = Config::new();
        for &idx in &indices {
            c.set_uint("arr", Some(idx), idx as u64, &Options::new()).unwrap();
        }

        let highest = indices.iter().copied().max().unwrap();
        prop_assert_eq!(c.count_field("arr").unwrap(), highest + 1);
        for &idx in &indices {
            prop_assert_eq!(c.uint("arr", Some(idx), &Options::new()).unwrap(), idx as u64);
        }
    }
}
