//! SampleDemo
//!
//! A minimal application-bootstrap demo built on the [Abscissa] framework:
//! the process reports its startup on standard output and then hands control
//! to the framework, which parses arguments, loads configuration and runs
//! the selected command.
//!
//! [Abscissa]: https://github.com/iqlusioninc/abscissa

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    unused_lifetimes,
    unused_qualifications
)]

pub mod application;
pub mod commands;
pub mod config;
pub mod error;
pub mod prelude;
pub mod startup;
