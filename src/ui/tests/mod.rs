//! UI module tests
//!
//! Controller logic is testable without a display server; widget
//! construction is not, so component tests stay out of the suite.

#[cfg(test)]
mod controller_tests;
