// Aptitude tests: catalog loaded from JSON and submission scoring.

pub mod catalog;
pub mod handlers;
pub mod scoring;
