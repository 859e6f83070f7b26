//! Answer validation trait and the standard parity rule.
//!
//! The level controller calls into `AnswerValidator` but never checks
//! parity itself.

pub mod validator;

pub use validator::{AnswerValidator, Labels, NumberMark, ParityValidator, Verdict};
