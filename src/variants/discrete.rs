use crate::common::{SolutionKind, SolutionParameters};
use crate::solution::SolutionVariant;
use ndarray::Array1;
use std::sync::Arc;

/// Parameters rounded to the nearest integer before evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscreteParameters {
    pub values: Vec<i64>,
}

impl SolutionParameters for DiscreteParameters {
    fn kind(&self) -> SolutionKind {
        SolutionKind::Discrete
    }
}

/// Discrete PSO: particles move through the continuous space but are scored
/// at the nearest integer lattice point.
///
/// Rounded values outside the `i64` range saturate to `i64::MIN`/`i64::MAX`
/// and NaN maps to 0, so bounds wider than about ±9.2e18 collapse distinct
/// parameters onto the same lattice point.
pub struct DiscreteVariant<F>
where
    F: Fn(&[i64]) -> f64 + Send + Sync,
{
    objective: Arc<F>,
}

impl<F> DiscreteVariant<F>
where
    F: Fn(&[i64]) -> f64 + Send + Sync,
{
    pub fn new(objective: F) -> Self {
        Self {
            objective: Arc::new(objective),
        }
    }
}

impl<F> SolutionVariant for DiscreteVariant<F>
where
    F: Fn(&[i64]) -> f64 + Send + Sync,
{
    type Parameters = DiscreteParameters;
    const KIND: SolutionKind = SolutionKind::Discrete;

    /// Halfway values round away from zero.
    fn convert_parameters(&self, parameters: &Array1<f64>) -> DiscreteParameters {
        DiscreteParameters {
            values: parameters.iter().map(|&p| to_lattice(p)).collect(),
        }
    }

    fn test_solution(&self, parameters: &DiscreteParameters) -> f64 {
        (self.objective)(&parameters.values)
    }

    fn duplicate(&self) -> Self {
        Self {
            objective: Arc::clone(&self.objective),
        }
    }
}

fn to_lattice(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let rounded = value.round();
    if rounded >= i64::MAX as f64 {
        i64::MAX
    } else if rounded <= i64::MIN as f64 {
        i64::MIN
    } else {
        rounded as i64
    }
}
