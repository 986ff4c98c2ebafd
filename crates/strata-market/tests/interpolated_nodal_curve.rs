//! Behaviour of interpolated nodal curves through the public API.

use approx::assert_relative_eq;
use proptest::prelude::*;
use strata_basics::{Date, Tenor, ValueAdjustment};
use strata_market::prelude::*;
use strata_math::{CombinedInterpolator, CurveExtrapolator, CurveInterpolator};

const SIZE: usize = 3;
const NAME: &str = "TestCurve";
const XVALUES: [f64; 3] = [1.0, 2.0, 3.0];
const XVALUES2: [f64; 3] = [0.0, 2.0, 3.0];
const YVALUES: [f64; 3] = [5.0, 7.0, 8.0];
const YVALUES_BUMPED: [f64; 3] = [3.0, 5.0, 6.0];
const INTERPOLATOR: CurveInterpolator = CurveInterpolator::LogLinear;

fn metadata_entries() -> CurveMetadata {
    CurveMetadata::of(NAME).with_parameters(ParameterMetadata::list_of_empty(SIZE))
}

fn base() -> InterpolatedNodalCurve {
    InterpolatedNodalCurve::of(NAME, XVALUES.to_vec(), YVALUES.to_vec(), INTERPOLATOR).unwrap()
}

fn underlying(x: &[f64], y: &[f64]) -> CombinedInterpolator {
    CombinedInterpolator::bind(
        INTERPOLATOR,
        CurveExtrapolator::Flat,
        CurveExtrapolator::Flat,
        x.to_vec(),
        y.to_vec(),
    )
    .unwrap()
}

fn assert_base_shape(curve: &InterpolatedNodalCurve, metadata: &CurveMetadata, y: &[f64]) {
    assert_eq!(curve.name(), &CurveName::of(NAME));
    assert_eq!(curve.parameter_count(), y.len());
    assert_eq!(curve.metadata(), metadata);
    assert_eq!(curve.y_values(), y);
}

#[test]
fn test_of_str() {
    let curve = base();
    assert_eq!(curve.name(), &CurveName::of(NAME));
    assert_eq!(curve.parameter_count(), SIZE);
    assert_eq!(curve.extrapolator_left(), CurveExtrapolator::Flat);
    assert_eq!(curve.interpolator(), INTERPOLATOR);
    assert_eq!(curve.extrapolator_right(), CurveExtrapolator::Flat);
    assert_eq!(curve.metadata(), &CurveMetadata::of(NAME));
    assert_eq!(curve.x_values(), &XVALUES);
    assert_eq!(curve.y_values(), &YVALUES);
}

#[test]
fn test_of_curve_name() {
    let curve = InterpolatedNodalCurve::of(
        CurveName::of(NAME),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    assert_eq!(curve, base());
}

#[test]
fn test_of_curve_metadata() {
    let curve = InterpolatedNodalCurve::of(
        metadata_entries(),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    assert_eq!(curve.metadata(), &metadata_entries());
    assert_eq!(curve.parameter_count(), SIZE);
    assert_eq!(curve.x_values(), &XVALUES);
}

#[test]
fn test_of_invalid() {
    // not enough nodes
    let err = InterpolatedNodalCurve::of(NAME, vec![1.0], vec![1.0], INTERPOLATOR).unwrap_err();
    assert!(err.is_invalid_input());
    // x node size != y node size
    let err = InterpolatedNodalCurve::of(NAME, XVALUES.to_vec(), vec![1.0, 3.0], INTERPOLATOR)
        .unwrap_err();
    assert!(err.is_invalid_input());
    // parameter metadata size != node size
    let err =
        InterpolatedNodalCurve::of(metadata_entries(), vec![1.0, 3.0], vec![1.0, 3.0], INTERPOLATOR)
            .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_lookup() {
    let curve = base();
    let reference = underlying(&XVALUES, &YVALUES);
    for (x, y) in XVALUES.iter().zip(YVALUES) {
        assert_eq!(curve.y_value(*x).unwrap(), y);
    }
    assert_eq!(curve.y_value(10.0).unwrap(), reference.y_value(10.0).unwrap());
    assert_eq!(
        curve.y_value_parameter_sensitivity(10.0).unwrap(),
        reference.y_value_parameter_sensitivity(10.0).unwrap()
    );
    assert_eq!(
        curve.first_derivative(10.0).unwrap(),
        reference.first_derivative(10.0).unwrap()
    );
    assert_relative_eq!(
        curve.y_value(2.5).unwrap(),
        reference.y_value(2.5).unwrap(),
        epsilon = 1e-14
    );
}

#[test]
fn test_with_y_values() {
    let test = base().with_y_values(YVALUES_BUMPED.to_vec()).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &YVALUES_BUMPED);
    assert_eq!(test.x_values(), &XVALUES);
}

#[test]
fn test_with_y_values_bad_size() {
    assert!(base().with_y_values(vec![]).unwrap_err().is_invalid_input());
    assert!(base().with_y_values(vec![4.0, 6.0]).unwrap_err().is_invalid_input());
}

#[test]
fn test_shifted_by_operator() {
    let test = base().shifted_by(&|_, y| y - 2.0).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &YVALUES_BUMPED);
    assert_eq!(test.x_values(), &XVALUES);
}

#[test]
fn test_shifted_by_adjustment() {
    let adjustments = [
        ValueAdjustment::Absolute(3.0),
        ValueAdjustment::DeltaAmount(-2.0),
        ValueAdjustment::DeltaAmount(-2.0),
    ];
    let test = base().shifted_by_adjustments(&adjustments).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &YVALUES_BUMPED);
}

#[test]
fn test_shifted_by_adjustment_long_list() {
    let adjustments = [
        ValueAdjustment::Absolute(3.0),
        ValueAdjustment::DeltaAmount(-2.0),
        ValueAdjustment::DeltaAmount(-2.0),
        ValueAdjustment::DeltaAmount(2.0),
    ];
    let test = base().shifted_by_adjustments(&adjustments).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &YVALUES_BUMPED);
}

#[test]
fn test_shifted_by_adjustment_short_list() {
    let test = base()
        .shifted_by_adjustments(&[ValueAdjustment::Absolute(3.0)])
        .unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &[3.0, 7.0, 8.0]);
    assert_eq!(test.x_values(), &XVALUES);
}

#[test]
fn test_with_node_at_start_no_metadata() {
    let base = InterpolatedNodalCurve::of(
        metadata_entries(),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    let test = base.with_node(0, 0.5, 4.0).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &[4.0, 5.0, 7.0, 8.0]);
    assert_eq!(test.x_values(), &[0.5, 1.0, 2.0, 3.0]);
}

#[test]
fn test_with_node_at_end_no_metadata() {
    let base = InterpolatedNodalCurve::of(
        metadata_entries(),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    let test = base.with_node(SIZE, 4.0, 9.0).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &[5.0, 7.0, 8.0, 9.0]);
    assert_eq!(test.x_values(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_with_node_at_start_metadata() {
    let base = InterpolatedNodalCurve::of(
        metadata_entries(),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    let item = ParameterMetadata::tenor(Date::from_ymd(2015, 6, 30).unwrap(), Tenor::TENOR_1Y);
    let test = base.with_node_metadata(0, item.clone(), 0.5, 4.0).unwrap();
    let mut parameters = vec![item];
    parameters.extend(ParameterMetadata::list_of_empty(SIZE));
    let expected = CurveMetadata::of(NAME).with_parameters(parameters);
    assert_base_shape(&test, &expected, &[4.0, 5.0, 7.0, 8.0]);
    assert_eq!(test.x_values(), &[0.5, 1.0, 2.0, 3.0]);
}

#[test]
fn test_with_node_metadata_on_curve_without_metadata() {
    let item = ParameterMetadata::tenor(Date::from_ymd(2015, 6, 30).unwrap(), Tenor::TENOR_1Y);
    let test = base().with_node_metadata(0, item, 0.5, 4.0).unwrap();
    assert_base_shape(&test, &CurveMetadata::of(NAME), &[4.0, 5.0, 7.0, 8.0]);
    assert_eq!(test.x_values(), &[0.5, 1.0, 2.0, 3.0]);
}

#[test]
fn test_builder_round_trip() {
    let curve = base();
    assert_eq!(curve.to_builder().build().unwrap(), curve);

    let other = InterpolatedNodalCurve::builder()
        .metadata("Coverage")
        .x_values(XVALUES2.to_vec())
        .y_values(YVALUES_BUMPED.to_vec())
        .extrapolator_left(CurveExtrapolator::Exponential)
        .interpolator(CurveInterpolator::DoubleQuadratic)
        .extrapolator_right(CurveExtrapolator::Exponential)
        .build()
        .unwrap();
    assert_ne!(curve, other);
    assert_eq!(other.to_builder().build().unwrap(), other);
    assert_eq!(other.extrapolator_left(), CurveExtrapolator::Exponential);
    assert_eq!(other.interpolator(), CurveInterpolator::DoubleQuadratic);
}

#[test]
fn test_serde_round_trip() {
    let curve = InterpolatedNodalCurve::of(
        metadata_entries(),
        XVALUES.to_vec(),
        YVALUES.to_vec(),
        INTERPOLATOR,
    )
    .unwrap();
    let json = CurveConfig::from(curve.clone()).to_json().unwrap();
    let parsed = CurveConfig::from_json(&json).unwrap().build().unwrap();
    assert_eq!(parsed, curve);
}

proptest! {
    #[test]
    fn prop_exact_at_nodes(
        gaps in prop::collection::vec(0.1f64..5.0, 2..8),
        ys in prop::collection::vec(0.5f64..10.0, 8),
    ) {
        let xs: Vec<f64> = gaps
            .iter()
            .scan(0.0, |acc, g| {
                *acc += g;
                Some(*acc)
            })
            .collect();
        let ys = ys[..xs.len()].to_vec();
        for interpolator in [
            CurveInterpolator::Linear,
            CurveInterpolator::LogLinear,
            CurveInterpolator::NaturalCubicSpline,
            CurveInterpolator::DoubleQuadratic,
        ] {
            let curve =
                InterpolatedNodalCurve::of(NAME, xs.clone(), ys.clone(), interpolator).unwrap();
            for (x, y) in xs.iter().zip(&ys) {
                prop_assert_eq!(curve.y_value(*x).unwrap(), *y);
            }
        }
    }

    #[test]
    fn prop_short_adjustments_leave_tail(count in 0usize..=4) {
        let adjustments = vec![ValueAdjustment::Multiplier(2.0); count];
        let shifted = base().shifted_by_adjustments(&adjustments).unwrap();
        for (i, (new, old)) in shifted.y_values().iter().zip(YVALUES).enumerate() {
            let expected = if i < count { old * 2.0 } else { old };
            prop_assert_eq!(*new, expected);
        }
    }
}
