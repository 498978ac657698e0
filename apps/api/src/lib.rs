pub mod aptitude;
pub mod bank;
pub mod config;
pub mod csv;
pub mod errors;
pub mod questions;
pub mod routes;
pub mod state;
pub mod upstream;

pub use routes::build_router;
pub use state::AppState;
