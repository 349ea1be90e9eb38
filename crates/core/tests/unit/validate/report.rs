//! Audit report tests.

use mdcheck_core::common::{Divergence, ErrorKind, ValidationError};
use mdcheck_core::validate::{Check, Role};
use mdcheck_core::{State, Validator};
use pretty_assertions::assert_eq;

use crate::common::builder::StateBuilder;
use crate::common::harness::init_tracing;

#[test]
fn test_clean_pair_audit() {
    init_tracing();
    let state = StateBuilder::new(12).build();
    let report = Validator::default().audit_pair(&state, &state.clone());
    assert!(report.is_clean());
    assert_eq!(report.into_result(), Ok(()));
}

#[test]
fn test_empty_state_audit_is_clean() {
    assert!(Validator::default().audit(&State::empty()).is_clean());
}

#[test]
fn test_single_state_audit_collects_both_checks() {
    let state = StateBuilder::new(4)
        .position(0, [f64::NAN, 0.0, 0.0])
        .force(3, [0.0, 9e9, 0.0])
        .build();
    let report = Validator::default().audit(&state);

    assert_eq!(
        report.kinds().collect::<Vec<_>>(),
        vec![ErrorKind::Corruption, ErrorKind::Plausibility]
    );
    assert!(report.failed(Check::Nans));
    assert!(report.failed(Check::Discrepancies));
    assert!(report.failures().iter().all(|f| f.role == Role::Reference));
}

#[test]
fn test_pair_audit_does_not_stop_at_force_failure() {
    let reference = StateBuilder::new(4).all_forces([0.0; 3]).build();
    let given = StateBuilder::new(4)
        .all_forces([0.0; 3])
        .force(0, [10.0, 0.0, 0.0])
        .energies(0.0, 0.0)
        .build();
    let report = Validator::default().audit_pair(&reference, &given);

    let checks: Vec<(Check, Role)> = report.failures().iter().map(|f| (f.check, f.role)).collect();
    assert_eq!(
        checks,
        vec![(Check::Forces, Role::Pair), (Check::Energies, Role::Pair)]
    );
    assert_eq!(
        report.into_result(),
        Err(ValidationError::Divergence(Divergence::ForceRmse {
            rmse: 5.0,
            tolerance: 1.0,
        }))
    );
}

#[test]
fn test_pair_audit_attributes_single_state_failures() {
    let reference = StateBuilder::new(3).build();
    let given = StateBuilder::new(3).all_velocities([0.0; 3]).build();
    let report = Validator::default().audit_pair(&reference, &given);

    assert_eq!(report.failures().len(), 1);
    let failure = &report.failures()[0];
    assert_eq!(failure.check, Check::Discrepancies);
    assert_eq!(failure.role, Role::Given);
}

#[test]
fn test_report_serialises_for_orchestration() {
    let reference = StateBuilder::new(2).build();
    let given = StateBuilder::new(3).build();
    let report = Validator::default().audit_pair(&reference, &given);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["failures"][0]["check"], "forces");
    assert_eq!(json["failures"][0]["role"], "pair");
    assert_eq!(
        json["failures"][0]["error"]["InvalidInput"]["ParticleCountMismatch"]["given"],
        3
    );
}
