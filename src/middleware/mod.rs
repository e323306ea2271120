pub mod method_override;
pub mod status_policy;
pub mod validate_movie;

pub use method_override::method_override_middleware;
pub use status_policy::uniform_status_middleware;
pub use validate_movie::ValidMovie;
