//! A collection of variable transformations for constrained optimization.
//!
//! "henkan" is a Japanese translation of "transformation".
//!
//! Each transformation maps a constrained variable `x` to/from an
//! unconstrained variable `t`, so that an unconstrained optimizer can
//! work on `t` while the objective function only ever sees a feasible `x`.
#[macro_use]
extern crate trackable;

pub use self::error::{Error, ErrorKind};

pub mod transforms;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
