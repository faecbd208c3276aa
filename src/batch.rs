//! Swarm-wide helpers built on the two-phase move/evaluate contract
//!
//! Solutions share no state, so a driver can move every particle and then
//! evaluate every particle in parallel.

use crate::error::{SolutionError, SolutionResult};
use crate::solution::{Solution, SolutionVariant};
use ndarray::Array1;
use rayon::prelude::*;
use tracing::debug;

/// Apply one speed vector per solution.
///
/// All lengths are checked before anything moves: a swarm/speed count
/// mismatch or any per-solution arity mismatch fails with
/// [`SolutionError::ArityMismatch`] and leaves every solution unchanged.
/// Fitness is not refreshed.
pub fn update_all_parameters<V>(
    solutions: &mut [Solution<V>],
    speeds: &[Array1<f64>],
) -> SolutionResult<()>
where
    V: SolutionVariant + Send,
{
    if speeds.len() != solutions.len() {
        return Err(SolutionError::ArityMismatch {
            expected: solutions.len(),
            found: speeds.len(),
        });
    }
    for (solution, speed) in solutions.iter().zip(speeds) {
        if speed.len() != solution.dimension() {
            return Err(SolutionError::ArityMismatch {
                expected: solution.dimension(),
                found: speed.len(),
            });
        }
    }

    solutions
        .par_iter_mut()
        .zip(speeds.par_iter())
        .try_for_each(|(solution, speed)| solution.update_parameters(speed))?;

    debug!("Moved {} solutions", solutions.len());
    Ok(())
}

/// Re-evaluate every solution in parallel.
///
/// On failure one of the errors is returned; solutions evaluated before it
/// keep their new fitness.
pub fn update_all_fitness<V>(solutions: &mut [Solution<V>]) -> SolutionResult<()>
where
    V: SolutionVariant + Send,
{
    solutions
        .par_iter_mut()
        .try_for_each(|solution| solution.update_fitness())?;

    debug!("Evaluated {} solutions", solutions.len());
    Ok(())
}

/// Index of the best solution under [`Solution::better_than`]. Ties keep the
/// earliest index.
pub fn best_index<V: SolutionVariant>(solutions: &[Solution<V>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, solution) in solutions.iter().enumerate() {
        match best {
            Some(b) if !solution.better_than(&solutions[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Independent copy of the best solution.
pub fn best_of<V: SolutionVariant>(solutions: &[Solution<V>]) -> Option<Solution<V>> {
    best_index(solutions).map(|i| solutions[i].copy())
}
