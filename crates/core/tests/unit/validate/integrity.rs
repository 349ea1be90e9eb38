//! NaN detection tests.

use mdcheck_core::common::{Axis, NanSite, Quantity, ValidationError};
use mdcheck_core::{State, Validator};
use pretty_assertions::assert_eq;

use crate::common::builder::StateBuilder;
use crate::common::harness::init_tracing;

#[test]
fn test_clean_state_passes() {
    init_tracing();
    let state = StateBuilder::new(16).build();
    assert_eq!(Validator::default().check_for_nans(&state), Ok(()));
}

#[test]
fn test_empty_state_passes() {
    assert_eq!(Validator::default().check_for_nans(&State::empty()), Ok(()));
}

#[test]
fn test_nan_in_position_reported_with_index_and_axis() {
    init_tracing();
    let state = StateBuilder::new(5)
        .position(3, [0.0, 0.0, f64::NAN])
        .build();
    assert_eq!(
        Validator::default().check_for_nans(&state),
        Err(ValidationError::Corruption(vec![NanSite {
            quantity: Quantity::Position,
            particle: 3,
            axis: Axis::Z,
        }]))
    );
}

#[test]
fn test_every_category_scanned_after_first_failure() {
    let state = StateBuilder::new(6)
        .position(1, [f64::NAN, 0.0, 0.0])
        .position(4, [f64::NAN, 0.0, 0.0])
        .velocity(5, [0.0, f64::NAN, 0.0])
        .force(2, [0.0, 0.0, f64::NAN])
        .build();
    let err = Validator::default().check_for_nans(&state).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Corruption(vec![
            NanSite {
                quantity: Quantity::Position,
                particle: 1,
                axis: Axis::X,
            },
            NanSite {
                quantity: Quantity::Velocity,
                particle: 5,
                axis: Axis::Y,
            },
            NanSite {
                quantity: Quantity::Force,
                particle: 2,
                axis: Axis::Z,
            },
        ])
    );
    assert_eq!(
        err.to_string(),
        "NaNs detected in positions: (1, 0); NaNs detected in velocities: (5, 1); NaNs detected in forces: (2, 2)"
    );
}

#[test]
fn test_only_force_nan() {
    let state = StateBuilder::new(2).force(0, [f64::NAN; 3]).build();
    let Err(ValidationError::Corruption(sites)) = Validator::default().check_for_nans(&state)
    else {
        panic!("expected corruption");
    };
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].quantity, Quantity::Force);
    assert_eq!(sites[0].axis, Axis::X);
}

#[test]
fn test_infinities_and_huge_values_are_not_nans() {
    let state = StateBuilder::new(3)
        .position(0, [f64::INFINITY, f64::NEG_INFINITY, f64::MAX])
        .velocity(1, [1e300, -1e300, f64::MIN_POSITIVE])
        .force(2, [f64::INFINITY; 3])
        .build();
    assert_eq!(Validator::default().check_for_nans(&state), Ok(()));
}
