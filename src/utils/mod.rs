//! Utility functions for short id generation and URL validation.
//!
//! - [`code_generator`] - Random short id generation
//! - [`url_validator`] - URL well-formedness and scheme checks

pub mod code_generator;
pub mod url_validator;
