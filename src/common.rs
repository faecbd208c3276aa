use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity tag of a solution variant.
///
/// Both a variant and the parameter structure it converts into carry one of
/// these, and [`Solution::update_fitness`](crate::Solution::update_fitness)
/// compares the two before evaluating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    Continuous,
    Discrete,
    Constrained,
    /// Variants defined outside this crate
    Custom(&'static str),
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionKind::Continuous => write!(f, "continuous"),
            SolutionKind::Discrete => write!(f, "discrete"),
            SolutionKind::Constrained => write!(f, "constrained"),
            SolutionKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A raw parameter vector converted into the shape a variant evaluates.
pub trait SolutionParameters {
    /// The variant this structure was built for.
    fn kind(&self) -> SolutionKind;
}

/// Scalar floor and ceiling shared by every dimension of a solution.
///
/// `minimum <= maximum` is expected but not checked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub minimum: f64,
    pub maximum: f64,
}

impl ParameterBounds {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Clamp a single value. The ceiling is checked first; inverted bounds
    /// do not panic.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.maximum {
            self.maximum
        } else if value < self.minimum {
            self.minimum
        } else {
            value
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            minimum: -10.0,
            maximum: 10.0,
        }
    }
}

/// Serializable record of a solution, for drivers that keep a best-known log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    pub kind: String,
    pub parameters: Array1<f64>,
    pub fitness: f64,
    pub bounds: ParameterBounds,
}
