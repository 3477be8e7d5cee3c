//! Seams between the reconciler, the inference artifact, and their callers.

pub mod inference;
pub mod reconciler;

pub use inference::IInferenceService;
pub use reconciler::IReconciler;
