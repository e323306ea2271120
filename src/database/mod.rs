pub mod fixtures;
pub mod manager;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use manager::DatabaseManager;
pub use memory::MemoryMovieStore;
pub use models::{Movie, MovieFields, MovieId};
pub use mongo::MongoMovieStore;
pub use store::{MovieStore, StoreError};
