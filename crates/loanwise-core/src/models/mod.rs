//! Data model shared by the reconciler, the inference engine, and the CLI.

pub mod decision;
pub mod feature_row;
pub mod feature_schema;
pub mod missing_policy;
pub mod raw_input;

pub use decision::{Confidence, Decision, DecisionLabel};
pub use feature_row::FeatureRow;
pub use feature_schema::FeatureSchema;
pub use missing_policy::MissingPolicy;
pub use raw_input::{RawInput, RawValue};
