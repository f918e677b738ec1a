//! Property-based tests for the rotation methods.

use proptest::prelude::*;
use rotation::{Method, RotationError, rotate_left};

// =============================================================================
// Test helpers
// =============================================================================

fn arbitrary_method() -> impl Strategy<Value = Method> {
    return prop::sample::select(Method::ALL.to_vec());
}

fn arbitrary_sequence() -> impl Strategy<Value = Vec<i64>> {
    return prop::collection::vec(-1000i64..1000, 0..64);
}

fn rotated(input: &[i64], offset: usize, method: Method) -> Vec<i64> {
    let mut seq = input.to_vec();
    rotate_left(&mut seq, offset, method).unwrap();
    return seq;
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    return values;
}

// =============================================================================
// Rotation properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// output[i] == input[(i + offset) mod len]
    #[test]
    fn places_each_element(
        input in arbitrary_sequence(),
        offset in 0usize..200,
        method in arbitrary_method(),
    ) {
        let output = rotated(&input, offset, method);
        prop_assert_eq!(output.len(), input.len());
        for i in 0..input.len() {
            prop_assert_eq!(output[i], input[(i + offset) % input.len()]);
        }
    }

    /// Rotation permutes without adding or dropping elements
    #[test]
    fn preserves_multiset(
        input in arbitrary_sequence(),
        offset in 0usize..200,
        method in arbitrary_method(),
    ) {
        let output = rotated(&input, offset, method);
        prop_assert_eq!(sorted(output), sorted(input));
    }

    /// Rotating by a then b equals rotating by a + b
    #[test]
    fn composes(
        input in arbitrary_sequence(),
        a in 0usize..100,
        b in 0usize..100,
        method in arbitrary_method(),
    ) {
        let twice = rotated(&rotated(&input, a, method), b, method);
        let once = rotated(&input, a + b, method);
        prop_assert_eq!(twice, once);
    }

    /// Rotating by 0 or by the length is the identity
    #[test]
    fn full_cycle_is_identity(
        input in arbitrary_sequence(),
        method in arbitrary_method(),
    ) {
        prop_assert_eq!(&rotated(&input, 0, method), &input);
        prop_assert_eq!(&rotated(&input, input.len(), method), &input);
        prop_assert_eq!(&rotated(&input, 3 * input.len(), method), &input);
    }

    /// Rotating left by k then by len - k restores the input
    #[test]
    fn inverse_restores(
        input in prop::collection::vec(any::<i64>(), 1..64),
        offset in 0usize..64,
        method in arbitrary_method(),
    ) {
        let len = input.len();
        let k = offset % len;
        let back = rotated(&rotated(&input, k, method), len - k, method);
        prop_assert_eq!(back, input);
    }

    /// All four methods agree
    #[test]
    fn methods_agree(
        input in arbitrary_sequence(),
        offset in 0usize..200,
    ) {
        let reference = rotated(&input, offset, Method::Juggling);
        for method in Method::ALL {
            prop_assert_eq!(&rotated(&input, offset, method), &reference, "{}", method);
        }
    }
}

// =============================================================================
// Strict entry points
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The scratch buffer method rejects out-of-range offsets untouched
    #[test]
    fn temp_buffer_rejects_without_writing(
        input in prop::collection::vec(any::<i64>(), 2..32),
        excess in 0usize..50,
    ) {
        let offset = input.len() + excess;
        let mut seq = input.clone();
        let result = rotation::rotate::temp_buffer::rotate(&mut seq, offset);
        prop_assert_eq!(result, Err(RotationError::InvalidOffset { offset, len: input.len() }));
        prop_assert_eq!(seq, input);
    }

    /// The reversal method accepts offset == len and rejects beyond it
    #[test]
    fn reversal_bounds(
        input in prop::collection::vec(any::<i64>(), 0..32),
        excess in 1usize..50,
    ) {
        let len = input.len();

        let mut seq = input.clone();
        prop_assert!(rotation::rotate::reversal::rotate(&mut seq, len).is_ok());
        prop_assert_eq!(&seq, &input);

        let offset = len + excess;
        prop_assert_eq!(
            rotation::rotate::reversal::rotate(&mut seq, offset),
            Err(RotationError::InvalidOffset { offset, len })
        );
        prop_assert_eq!(seq, input);
    }

    /// Juggling and cyclic shift take unnormalized offsets directly
    #[test]
    fn unnormalized_offsets_wrap(
        input in prop::collection::vec(any::<i64>(), 2..32),
        offset in 0usize..200,
    ) {
        let expected = rotated(&input, offset, Method::Reversal);

        let mut seq = input.clone();
        rotation::rotate::juggling::rotate(&mut seq, offset).unwrap();
        prop_assert_eq!(&seq, &expected);

        let mut seq = input.clone();
        rotation::rotate::cyclic_shift::rotate(&mut seq, offset).unwrap();
        prop_assert_eq!(&seq, &expected);
    }
}

#[test]
fn concrete_scenarios() {
    for method in Method::ALL {
        assert_eq!(rotated(&[1, 2, 3, 4, 5, 6, 7], 2, method), vec![3, 4, 5, 6, 7, 1, 2]);
        assert_eq!(rotated(&[1, 2, 3, 4, 5], 0, method), vec![1, 2, 3, 4, 5]);
        assert_eq!(rotated(&[1, 2], 5, method), vec![2, 1]);
        assert_eq!(rotated(&[9], 4, method), vec![9]);
    }
}
