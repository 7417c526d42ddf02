pub mod api;
pub mod response;
pub mod scheduler;
pub mod status;
