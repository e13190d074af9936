//! Loan interest-rate prediction form client.
//!
//! Collects thirteen applicant attributes, encodes them into a fixed-order
//! feature vector, submits the vector to a remote scoring endpoint, and
//! projects the response into a tri-state display outcome.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod telemetry;
