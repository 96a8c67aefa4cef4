// src/core/mod.rs

pub mod cancellation_token;
pub mod report;
pub mod static_random;

pub use cancellation_token::CancellationToken;
pub use report::ReportSink;
