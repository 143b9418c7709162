//! A SAT-based solver library for abstract argumentation framework reasoning
//! problems in the style of Dung (1995).
//!
//! The reduction engine lives in [`aa`] (the data model), [`sat`] (variable
//! algebra, CNF assembly and the solver driver), [`encodings`] (clause
//! templates) and [`solvers`] (enumeration and the per-semantics query
//! layer). [`extension`] holds the extension-set operations, [`io`] the
//! input parsers and the ICCMA output writer, and [`error`] the error kinds
//! surfaced to the CLI boundary.

#![warn(missing_docs)]

pub mod aa;
pub mod encodings;
pub mod error;
pub mod extension;
pub mod io;
pub mod sat;
pub mod solvers;
