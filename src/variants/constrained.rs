use crate::common::{SolutionKind, SolutionParameters};
use crate::solution::SolutionVariant;
use ndarray::Array1;
use std::sync::Arc;

/// Parameters paired with the constraint violation measured on them.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstrainedParameters {
    pub values: Array1<f64>,
    /// Non-negative; zero when every constraint holds.
    pub violation: f64,
}

impl SolutionParameters for ConstrainedParameters {
    fn kind(&self) -> SolutionKind {
        SolutionKind::Constrained
    }
}

/// Constrained PSO using a static penalty: fitness is the objective minus
/// `penalty_weight` times the constraint violation.
pub struct ConstrainedVariant<F, C>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
    C: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    objective: Arc<F>,
    violation: Arc<C>,
    penalty_weight: f64,
}

impl<F, C> ConstrainedVariant<F, C>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
    C: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    /// `violation` measures how far a point is from feasibility; negative
    /// readings count as satisfied.
    pub fn new(objective: F, violation: C) -> Self {
        Self {
            objective: Arc::new(objective),
            violation: Arc::new(violation),
            penalty_weight: 1.0,
        }
    }

    pub fn with_penalty_weight(mut self, penalty_weight: f64) -> Self {
        self.penalty_weight = penalty_weight;
        self
    }

    pub fn penalty_weight(&self) -> f64 {
        self.penalty_weight
    }
}

impl<F, C> SolutionVariant for ConstrainedVariant<F, C>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
    C: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    type Parameters = ConstrainedParameters;
    const KIND: SolutionKind = SolutionKind::Constrained;

    fn convert_parameters(&self, parameters: &Array1<f64>) -> ConstrainedParameters {
        ConstrainedParameters {
            values: parameters.clone(),
            violation: (self.violation)(parameters).max(0.0),
        }
    }

    fn test_solution(&self, parameters: &ConstrainedParameters) -> f64 {
        (self.objective)(&parameters.values) - self.penalty_weight * parameters.violation
    }

    fn duplicate(&self) -> Self {
        Self {
            objective: Arc::clone(&self.objective),
            violation: Arc::clone(&self.violation),
            penalty_weight: self.penalty_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solution;
    use ndarray::array;

    // Maximize x + y subject to x + y <= 4.
    fn variant() -> ConstrainedVariant<
        impl Fn(&Array1<f64>) -> f64 + Send + Sync,
        impl Fn(&Array1<f64>) -> f64 + Send + Sync,
    > {
        ConstrainedVariant::new(|x: &Array1<f64>| x.sum(), |x: &Array1<f64>| x.sum() - 4.0)
            .with_penalty_weight(10.0)
    }

    #[test]
    fn test_feasible_point_has_no_penalty() {
        let solution = Solution::new(variant(), array![1.0, 2.0], 0.0, 5.0).unwrap();
        assert_eq!(solution.fitness(), 3.0);
    }

    #[test]
    fn test_infeasible_point_is_penalized() {
        let solution = Solution::new(variant(), array![3.0, 3.0], 0.0, 5.0).unwrap();
        // 6 - 10 * 2
        assert_eq!(solution.fitness(), -14.0);

        let feasible = Solution::new(variant(), array![2.0, 2.0], 0.0, 5.0).unwrap();
        assert!(feasible.better_than(&solution));
    }

    #[test]
    fn test_negative_violation_is_clipped() {
        let converted = variant().convert_parameters(&array![0.0, 1.0]);
        assert_eq!(converted.violation, 0.0);
        assert_eq!(converted.kind(), SolutionKind::Constrained);
    }

    #[test]
    fn test_duplicate_keeps_weight() {
        let copy = variant().duplicate();
        assert_eq!(copy.penalty_weight(), 10.0);
    }
}
