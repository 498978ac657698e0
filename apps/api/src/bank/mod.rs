// Question banks hydrated from static CSV assets at startup.
// Read-only after load; shared through AppState.

pub mod dsa;
pub mod handlers;
pub mod interview;
pub mod loader;
