use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{Movie, MovieFields, MovieId};
use super::store::{MovieStore, StoreError};

/// In-process movie store. Keeps insertion order, forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn insert_many(&self, records: Vec<MovieFields>) -> Result<(), StoreError> {
        let mut movies = self.movies.write().await;
        movies.extend(
            records
                .into_iter()
                .map(|fields| Movie::from_fields(MovieId::generate(), fields)),
        );
        Ok(())
    }

    async fn insert_one(&self, record: MovieFields) -> Result<MovieId, StoreError> {
        let id = MovieId::generate();
        self.movies.write().await.push(Movie::from_fields(id, record));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| &m.id == id).cloned())
    }

    async fn update_by_id(&self, id: &MovieId, fields: MovieFields) -> Result<(), StoreError> {
        let mut movies = self.movies.write().await;
        if let Some(movie) = movies.iter_mut().find(|m| &m.id == id) {
            movie.apply(fields);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError> {
        self.movies.write().await.retain(|m| &m.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
