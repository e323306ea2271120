pub mod movie;

pub use movie::{Movie, MovieFields, MovieId};
