pub mod build_env;
pub mod errors;
pub mod models;
