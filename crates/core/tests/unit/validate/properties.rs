//! Property tests over generated snapshots.

use mdcheck_core::common::{ErrorKind, Vec3};
use mdcheck_core::validate::comparison::force_magnitude_rmse;
use mdcheck_core::{State, Validator};
use proptest::prelude::*;

/// Any component, including NaN, infinities and large finite values.
fn component() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1e6..1e6f64,
        1 => Just(f64::NAN),
        1 => prop_oneof![Just(f64::INFINITY), Just(f64::NEG_INFINITY), Just(f64::MAX)],
    ]
}

fn vector() -> impl Strategy<Value = Vec3> {
    [component(), component(), component()]
}

/// A state whose three sequences share a generated length.
fn any_state() -> impl Strategy<Value = State> {
    (0usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec(vector(), n),
            prop::collection::vec(vector(), n),
            prop::collection::vec(vector(), n),
            -1e6..1e6f64,
            0.0..1e6f64,
        )
            .prop_map(|(p, v, f, pe, ke)| {
                State::new(p, v, f).unwrap().with_energies(pe, ke)
            })
    })
}

fn finite_forces(n: usize) -> impl Strategy<Value = Vec<Vec3>> {
    prop::collection::vec([-1e4..1e4f64, -1e4..1e4f64, -1e4..1e4f64], n)
}

fn contains_nan(values: &[Vec3]) -> bool {
    values.iter().flatten().any(|c| c.is_nan())
}

proptest! {
    #[test]
    fn nan_check_fails_iff_some_component_is_nan(state in any_state()) {
        use mdcheck_core::Snapshot;
        let expected = contains_nan(state.positions())
            || contains_nan(state.velocities())
            || contains_nan(state.forces());
        let result = Validator::default().check_for_nans(&state);
        prop_assert_eq!(result.is_err(), expected);
        if let Err(err) = result {
            prop_assert_eq!(err.kind(), ErrorKind::Corruption);
        }
    }

    #[test]
    fn energies_never_diverge_from_themselves(state in any_state(), tolerance in 0.0..1e3f64) {
        prop_assert!(Validator::default().compare_energies(&state, &state, tolerance).is_ok());
    }

    #[test]
    fn identical_forces_pass_any_tolerance(forces in (0usize..32).prop_flat_map(finite_forces), tolerance in 0.0..10.0f64) {
        let n = forces.len();
        let state = State::new(vec![[0.0; 3]; n], vec![[1.0; 3]; n], forces).unwrap();
        prop_assert_eq!(force_magnitude_rmse(&[], &[]), Ok(0.0));
        prop_assert!(Validator::default().compare_forces(&state, &state.clone(), tolerance).is_ok());
    }

    #[test]
    fn single_outlier_rmse_is_magnitude_over_root_n(
        (n, outlier) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n)),
        magnitude in 0.0..1e3f64,
    ) {
        let reference = vec![[0.0; 3]; n];
        let mut given = vec![[0.0; 3]; n];
        given[outlier] = [magnitude, 0.0, 0.0];

        let rmse = force_magnitude_rmse(&reference, &given).unwrap();
        let expected = magnitude / (n as f64).sqrt();
        prop_assert!((rmse - expected).abs() <= 1e-9 * expected.max(1.0), "rmse {} expected {}", rmse, expected);
    }

    #[test]
    fn mismatched_counts_are_invalid_input(a in 0usize..16, b in 0usize..16) {
        prop_assume!(a != b);
        let reference = State::new(vec![[0.0; 3]; a], vec![[1.0; 3]; a], vec![[1.0; 3]; a]).unwrap();
        let given = State::new(vec![[0.0; 3]; b], vec![[1.0; 3]; b], vec![[1.0; 3]; b]).unwrap();
        let err = Validator::default().compare_forces(&reference, &given, 1.0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn empty_state_passes_every_check() {
    let validator = Validator::default();
    let empty = State::empty();
    assert!(validator.check_for_nans(&empty).is_ok());
    assert!(validator.check_for_discrepancies(&empty).is_ok());
    assert!(validator.compare_energies(&empty, &empty, 0.0).is_ok());
    assert!(validator.compare_forces(&empty, &empty, 0.0).is_ok());
    assert!(validator.compare_forces_and_energies(&empty, &empty, 0.0, 0.0).is_ok());
}
