use kira_predval::predictive::{Quantity, TestCharacteristics, compute_predictive_values};
use kira_predval::PredictiveError;

#[test]
fn reference_clinical_scenario() {
    let r = compute_predictive_values(90.0, 85.0, 5.0).unwrap();
    assert!((r.ppv - 24.0).abs() < 0.5);
    assert!((r.npv - 99.4).abs() < 0.5);
}

#[test]
fn matches_formula_at_interior_point() {
    let r = compute_predictive_values(98.0, 85.0, 10.0).unwrap();
    let ppv = 100.0 * (98.0 * 10.0) / ((98.0 * 10.0) + (15.0 * 90.0));
    let npv = 100.0 * (85.0 * 90.0) / ((2.0 * 10.0) + (85.0 * 90.0));
    assert!((r.ppv - ppv).abs() < 1e-9);
    assert!((r.npv - npv).abs() < 1e-9);
}

#[test]
fn zero_sensitivity_gives_zero_ppv() {
    let r = compute_predictive_values(0.0, 85.0, 30.0).unwrap();
    assert_eq!(r.ppv, 0.0);
}

#[test]
fn perfect_specificity_gives_full_ppv() {
    let r = compute_predictive_values(70.0, 100.0, 3.0).unwrap();
    assert_eq!(r.ppv, 100.0);
}

#[test]
fn perfect_sensitivity_gives_full_npv() {
    let r = compute_predictive_values(100.0, 60.0, 40.0).unwrap();
    assert_eq!(r.npv, 100.0);
}

#[test]
fn zero_specificity_gives_zero_npv() {
    let r = compute_predictive_values(80.0, 0.0, 40.0).unwrap();
    assert_eq!(r.npv, 0.0);
}

#[test]
fn defined_boundary_prevalences_are_computed() {
    let r = compute_predictive_values(98.0, 85.0, 0.0).unwrap();
    assert_eq!(r.ppv, 0.0);
    assert_eq!(r.npv, 100.0);

    let r = compute_predictive_values(98.0, 85.0, 100.0).unwrap();
    assert_eq!(r.ppv, 100.0);
    assert_eq!(r.npv, 0.0);
}

#[test]
fn zero_prevalence_with_perfect_specificity_is_undefined() {
    let err = compute_predictive_values(98.0, 100.0, 0.0).unwrap_err();
    match err {
        PredictiveError::UndefinedValue {
            quantity,
            prevalence,
            ..
        } => {
            assert_eq!(quantity, Quantity::Ppv);
            assert_eq!(prevalence, 0.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn full_prevalence_with_perfect_sensitivity_is_undefined() {
    let err = compute_predictive_values(100.0, 85.0, 100.0).unwrap_err();
    assert!(matches!(
        err,
        PredictiveError::UndefinedValue {
            quantity: Quantity::Npv,
            ..
        }
    ));
}

#[test]
fn degenerate_tests_are_undefined_at_interior_prevalence() {
    let err = compute_predictive_values(0.0, 100.0, 20.0).unwrap_err();
    assert!(err.is_undefined());
    let err = compute_predictive_values(100.0, 0.0, 20.0).unwrap_err();
    assert!(matches!(
        err,
        PredictiveError::UndefinedValue {
            quantity: Quantity::Npv,
            ..
        }
    ));
}

#[test]
fn out_of_range_inputs_are_rejected() {
    assert!(compute_predictive_values(100.1, 85.0, 5.0).unwrap_err().is_invalid_input());
    assert!(compute_predictive_values(98.0, -1.0, 5.0).unwrap_err().is_invalid_input());
    assert!(compute_predictive_values(98.0, 85.0, -0.5).unwrap_err().is_invalid_input());
    assert!(compute_predictive_values(98.0, 85.0, 101.0).unwrap_err().is_invalid_input());
    assert!(compute_predictive_values(f64::NAN, 85.0, 5.0).unwrap_err().is_invalid_input());
    assert!(compute_predictive_values(98.0, 85.0, f64::INFINITY).unwrap_err().is_invalid_input());
}

#[test]
fn missing_inputs_are_not_computable() {
    let err = TestCharacteristics::from_inputs(None, Some(85.0)).unwrap_err();
    assert_eq!(
        err,
        PredictiveError::InvalidInput("sensitivity is missing".to_string())
    );
    let err = TestCharacteristics::from_inputs(Some(98.0), None).unwrap_err();
    assert!(err.is_invalid_input());
    let c = TestCharacteristics::from_inputs(Some(98.0), Some(85.0)).unwrap();
    assert_eq!(c.sensitivity(), 98.0);
    assert_eq!(c.specificity(), 85.0);
}

#[test]
fn undefined_error_message_names_quantity() {
    let err = compute_predictive_values(98.0, 100.0, 0.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("PPV undefined (0/0)"));
    assert!(msg.contains("prevalence=0%"));
}

#[test]
fn subnormal_sensitivity_with_perfect_specificity_is_full_ppv() {
    let r = compute_predictive_values(5e-324, 100.0, 0.1).unwrap();
    assert_eq!(r.ppv, 100.0);
    let r = compute_predictive_values(f64::MIN_POSITIVE, 100.0, 50.0).unwrap();
    assert_eq!(r.ppv, 100.0);
}

#[test]
fn subnormal_inputs_stay_finite() {
    let r = compute_predictive_values(50.0, 5e-324, 5e-324).unwrap();
    assert!((r.npv - 200.0 / 3.0).abs() < 1e-9);
    assert!(r.ppv.is_finite());

    let r = compute_predictive_values(5e-324, 85.0, 5e-324).unwrap();
    assert!((0.0..=100.0).contains(&r.ppv));
    assert!((0.0..=100.0).contains(&r.npv));
}

#[test]
fn negative_zero_inputs_are_folded() {
    let c = TestCharacteristics::new(-0.0, 85.0).unwrap();
    assert!(c.sensitivity().is_sign_positive());

    let r = compute_predictive_values(-0.0, 85.0, 5.0).unwrap();
    assert!(r.ppv.is_sign_positive());
    assert_eq!(kira_predval::predictive::percent_label(r.ppv), "0.0%");

    let r = compute_predictive_values(98.0, 85.0, -0.0).unwrap();
    assert!(r.ppv.is_sign_positive());
    assert_eq!(kira_predval::predictive::input_label(-0.0), "0%");
}
