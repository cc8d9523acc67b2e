//! Main entry point for SampleDemo

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use sample_demo::application::APP;

/// Report startup, then boot SampleDemo
fn main() {
    sample_demo::startup::print_report(std::env::args().skip(1));
    abscissa_core::boot(&APP);
}
