//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation and bounded candidates
//! - [`url_validator`] - Syntactic URL validation
//! - [`base_url`] - Base URL resolution from configuration or request headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
