pub mod constrained;
pub mod continuous;
pub mod discrete;

pub use constrained::{ConstrainedParameters, ConstrainedVariant};
pub use continuous::{ContinuousParameters, ContinuousVariant};
pub use discrete::{DiscreteParameters, DiscreteVariant};
