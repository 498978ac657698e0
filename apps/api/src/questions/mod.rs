// Aptitude question authoring: option extraction from pasted text, form
// validation, and submission of the validated draft to the question sink.

pub mod handlers;
pub mod options;
pub mod validation;
