//! `lset` compares two files, each considered as a set of lines. The `set`
//! module provides `LineSet` and its algebra, the `args` module parses the
//! command line, the `io` module hides input details, and
//! `operations::exec` is the kernel of the application.
//!
//! Current Limitations:
//! * Both files are read into memory in their entirety before anything is
//!   printed.
//! * Output is always sorted byte-wise, and always uses `\n` as the line
//!   terminator, whatever the inputs used.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod io;
pub mod operations;
pub mod set;
pub mod styles;

pub use crate::set::{Diff, LineSet};
