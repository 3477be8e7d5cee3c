//! # loanwise-inference
//!
//! Thin invocation layer over an opaque binary classifier.
//!
//! - `InferenceEngine` checks a reconciled row against the artifact's feature
//!   names, runs a one-row `predict` + `predict_proba`, and validates the
//!   output before turning it into a `Decision`.
//! - `LogisticArtifact` and `OnnxClassifier` are the concrete artifacts;
//!   `load_service` picks one from configuration at startup.

pub mod engine;
pub mod loader;
pub mod logistic;
pub mod onnx;

pub use engine::InferenceEngine;
pub use loader::load_service;
pub use logistic::LogisticArtifact;
pub use onnx::OnnxClassifier;
