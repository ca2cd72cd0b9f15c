//! # Registry Console
//!
//! Terminal presentation of the patient registration screen.
//!
//! Handles:
//! - prompting for the five form fields, with a numbered gender selection
//! - showing validation messages under the fields they belong to
//! - printing the Patient Information panel and the patient list
//!
//! Uses `registry-core` for all state; nothing here decides whether a
//! registration is valid.

#![warn(rust_2018_idioms)]

pub mod render;
pub mod session;

pub use session::{Command, Console};
