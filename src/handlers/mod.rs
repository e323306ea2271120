pub mod fallback;
pub mod movies;
pub mod seed;

pub use fallback::invalid_route;
pub use seed::seed;
