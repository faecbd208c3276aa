//! Candidate solutions for particle swarm optimization
//!
//! A [`Solution`] owns a bounded parameter vector and caches the fitness of
//! those parameters. Concrete variants plug in through [`SolutionVariant`],
//! which supplies parameter conversion, evaluation and deep copy.
//!
//! Fitness is refreshed by [`Solution::update_fitness`] only. Between a call
//! to [`Solution::update_parameters`] and the next `update_fitness` the cached
//! value describes the previous parameters, which lets a driver move a whole
//! swarm before paying for evaluation.

use crate::common::{ParameterBounds, SolutionKind, SolutionParameters, SolutionSnapshot};
use crate::error::{SolutionError, SolutionResult};
use ndarray::Array1;
use std::fmt;
use tracing::{debug, error, trace};

/// Extension points implemented by each concrete solution variant.
pub trait SolutionVariant: Sized {
    /// Shape the raw parameter vector is converted into before evaluation.
    type Parameters: SolutionParameters;

    /// Tag expected on every structure returned by `convert_parameters`.
    const KIND: SolutionKind;

    /// Convert raw parameters into the structure `test_solution` evaluates.
    fn convert_parameters(&self, parameters: &Array1<f64>) -> Self::Parameters;

    /// Fitness of a converted configuration. Higher is better.
    fn test_solution(&self, parameters: &Self::Parameters) -> f64;

    /// Independent deep copy of the variant state.
    fn duplicate(&self) -> Self;

    /// Ordering used by [`Solution::better_than`].
    ///
    /// Overrides must stay a strict weak ordering: irreflexive, asymmetric
    /// and transitive.
    fn better_than(this: &Solution<Self>, other: &Solution<Self>) -> bool {
        this.fitness() > other.fitness()
    }
}

/// A point in a bounded parameter space together with its fitness.
pub struct Solution<V: SolutionVariant> {
    variant: V,
    parameters: Array1<f64>,
    fitness: f64,
    bounds: ParameterBounds,
}

impl<V: SolutionVariant> Solution<V> {
    /// Build a solution and evaluate it.
    ///
    /// `parameters` is stored as given: values outside the thresholds are
    /// not clamped until the first `update_parameters`.
    pub fn new(
        variant: V,
        parameters: Array1<f64>,
        minimum_parameter_threshold: f64,
        maximum_parameter_threshold: f64,
    ) -> SolutionResult<Self> {
        Self::with_bounds(
            variant,
            parameters,
            ParameterBounds::new(minimum_parameter_threshold, maximum_parameter_threshold),
        )
    }

    pub fn with_bounds(
        variant: V,
        parameters: Array1<f64>,
        bounds: ParameterBounds,
    ) -> SolutionResult<Self> {
        let mut solution = Self {
            variant,
            parameters,
            fitness: f64::NAN,
            bounds,
        };
        solution.update_fitness()?;
        Ok(solution)
    }

    /// Re-evaluate the current parameters and cache the result.
    ///
    /// Fails with [`SolutionError::TypeMismatch`] when the variant converts
    /// into a structure tagged for a different variant. The cached fitness is
    /// left untouched in that case.
    pub fn update_fitness(&mut self) -> SolutionResult<()> {
        let converted = self.variant.convert_parameters(&self.parameters);
        let found = converted.kind();
        if found != V::KIND {
            error!(
                "Converted parameters tagged {} for a {} solution",
                found,
                V::KIND
            );
            return Err(SolutionError::TypeMismatch {
                expected: V::KIND,
                found,
            });
        }

        self.fitness = self.variant.test_solution(&converted);
        debug!("Evaluated {} solution: fitness {}", V::KIND, self.fitness);
        Ok(())
    }

    /// Add `speeds` to the parameters and clamp each dimension to the
    /// thresholds.
    ///
    /// Fitness is not refreshed; call [`update_fitness`](Self::update_fitness)
    /// before comparing. A speed vector of the wrong length fails with
    /// [`SolutionError::ArityMismatch`] and leaves the parameters unchanged.
    ///
    /// Speeds are trusted: a NaN speed leaves a NaN parameter, which no bound
    /// clamps and [`is_within_bounds`](Self::is_within_bounds) reports as out of range.
    pub fn update_parameters(&mut self, speeds: &Array1<f64>) -> SolutionResult<()> {
        if speeds.len() != self.parameters.len() {
            return Err(SolutionError::ArityMismatch {
                expected: self.parameters.len(),
                found: speeds.len(),
            });
        }

        let bounds = self.bounds;
        for (i, (parameter, speed)) in self
            .parameters
            .iter_mut()
            .zip(speeds.iter())
            .enumerate()
        {
            let moved = *parameter + speed;
            *parameter = bounds.clamp(moved);
            if *parameter != moved {
                trace!("Clamped dimension {} from {} to {}", i, moved, *parameter);
            }
        }
        Ok(())
    }

    /// True if this solution ranks strictly ahead of `other`.
    ///
    /// By default that means a strictly greater fitness; variants minimizing
    /// an objective negate it in `test_solution`.
    pub fn better_than(&self, other: &Self) -> bool {
        V::better_than(self, other)
    }

    /// Independent deep copy: same parameters, bounds and fitness, none of
    /// them shared with `self`.
    pub fn copy(&self) -> Self {
        Self {
            variant: self.variant.duplicate(),
            parameters: self.parameters.clone(),
            fitness: self.fitness,
            bounds: self.bounds,
        }
    }

    pub fn parameters(&self) -> &Array1<f64> {
        &self.parameters
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn bounds(&self) -> ParameterBounds {
        self.bounds
    }

    pub fn minimum_parameter_threshold(&self) -> f64 {
        self.bounds.minimum
    }

    pub fn maximum_parameter_threshold(&self) -> f64 {
        self.bounds.maximum
    }

    pub fn dimension(&self) -> usize {
        self.parameters.len()
    }

    pub fn kind(&self) -> SolutionKind {
        V::KIND
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn is_within_bounds(&self) -> bool {
        self.parameters.iter().all(|&p| self.bounds.contains(p))
    }

    pub fn snapshot(&self) -> SolutionSnapshot {
        SolutionSnapshot {
            kind: V::KIND.to_string(),
            parameters: self.parameters.clone(),
            fitness: self.fitness,
            bounds: self.bounds,
        }
    }
}

impl<V: SolutionVariant> Clone for Solution<V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<V: SolutionVariant> fmt::Debug for Solution<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solution")
            .field("kind", &V::KIND)
            .field("parameters", &self.parameters)
            .field("fitness", &self.fitness)
            .field("bounds", &self.bounds)
            .finish()
    }
}
