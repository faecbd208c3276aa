use crate::common::{SolutionKind, SolutionParameters};
use crate::solution::SolutionVariant;
use ndarray::Array1;
use std::sync::Arc;

/// Parameters evaluated exactly as the swarm moves them.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousParameters {
    pub values: Array1<f64>,
}

impl SolutionParameters for ContinuousParameters {
    fn kind(&self) -> SolutionKind {
        SolutionKind::Continuous
    }
}

/// Plain real-valued PSO: the objective sees the raw parameter vector.
pub struct ContinuousVariant<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    objective: Arc<F>,
}

impl<F> ContinuousVariant<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    pub fn new(objective: F) -> Self {
        Self {
            objective: Arc::new(objective),
        }
    }
}

impl<F> SolutionVariant for ContinuousVariant<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    type Parameters = ContinuousParameters;
    const KIND: SolutionKind = SolutionKind::Continuous;

    fn convert_parameters(&self, parameters: &Array1<f64>) -> ContinuousParameters {
        ContinuousParameters {
            values: parameters.clone(),
        }
    }

    fn test_solution(&self, parameters: &ContinuousParameters) -> f64 {
        (self.objective)(&parameters.values)
    }

    // Copies share the objective.
    fn duplicate(&self) -> Self {
        Self {
            objective: Arc::clone(&self.objective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solution;
    use ndarray::array;

    #[test]
    fn test_negated_sphere() {
        let variant =
            ContinuousVariant::new(|x: &Array1<f64>| -x.iter().map(|v| v * v).sum::<f64>());
        let mut solution = Solution::new(variant, array![1.0, -2.0], -5.0, 5.0).unwrap();
        assert_eq!(solution.fitness(), -5.0);

        solution.update_parameters(&array![-1.0, 2.0]).unwrap();
        solution.update_fitness().unwrap();
        assert_eq!(solution.fitness(), 0.0);
    }

    #[test]
    fn test_convert_keeps_values() {
        let variant = ContinuousVariant::new(|x: &Array1<f64>| x.sum());
        let converted = variant.convert_parameters(&array![0.25, 0.5]);
        assert_eq!(converted.values, array![0.25, 0.5]);
        assert_eq!(converted.kind(), SolutionKind::Continuous);
    }
}
