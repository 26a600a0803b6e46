//! Feature derivation for validated tables.
//!
//! Features are described by a [`FeaturePlan`]: an ordered list of rules,
//! each deriving one output column from one input column. The executor in
//! [`features`] interprets a plan against a `DataFrame` and never modifies
//! its input.

pub mod error;
pub mod features;
pub mod plan;

pub use error::TransformError;
pub use features::{transform_features, transform_frame};
pub use plan::{FeatureOp, FeaturePlan, FeatureRule};
