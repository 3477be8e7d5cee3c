//! # loanwise-reconcile
//!
//! Builds a complete, finite, schema-ordered feature row from partial user
//! input and the artifact's declared feature schema.
//!
//! ## Encoding table
//!
//! | Field | Encoding |
//! |-------|----------|
//! | `Gender` | Male → 1, Female → 0 |
//! | `Married` | Married / Yes → 1, Single / No → 0 |
//! | `Education` | Graduate → 1, Not Graduate → 0 |
//! | `Self_Employed` | Yes → 1, No → 0 |
//! | `Credit_History` | Good → 1, Bad → 0 |
//! | `Dependents` | numeric, "3+" → 3 |
//! | `ApplicantIncome`, `CoapplicantIncome`, `LoanAmount`, `Loan_Amount_Term` | numeric |
//!
//! Schema columns outside the table still accept numeric input under their
//! own name. Columns with no input follow the `MissingPolicy`.

pub mod aliases;
pub mod coerce;
pub mod encoding;
pub mod engine;

pub use aliases::{AliasTable, FieldAlias};
pub use encoding::{EncodingTable, FieldEncoding, FieldSpec};
pub use engine::{reconcile, Reconciler};
