//! Application services — the use-cases of the report pipeline.

pub mod report_service;

pub use report_service::ReportService;
