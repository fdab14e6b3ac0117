mod error;
pub mod routes_leptos;

pub use error::{Error, Result};
