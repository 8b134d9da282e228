pub mod routes;
pub mod startup;
pub mod books;
pub mod errors;
pub mod openapi;
pub mod state;

pub use startup::run;
