use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::info;

use super::models::{Movie, MovieFields, MovieId};
use super::store::{MovieStore, StoreError};

const COLLECTION: &str = "movies";

/// On-disk shape of a movie document
#[derive(Debug, Serialize, Deserialize)]
struct MovieDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    img: String,
    summary: String,
}

impl MovieDocument {
    fn new(id: MovieId, fields: MovieFields) -> Self {
        Self {
            id: id.object_id(),
            name: fields.name,
            img: fields.img,
            summary: fields.summary,
        }
    }
}

impl From<MovieDocument> for Movie {
    fn from(doc: MovieDocument) -> Self {
        Movie {
            id: doc.id.into(),
            name: doc.name,
            img: doc.img,
            summary: doc.summary,
        }
    }
}

struct Connection {
    client: Client,
    db: Database,
    movies: Collection<MovieDocument>,
}

/// MongoDB-backed movie store.
///
/// The client is created on first use and the connection is verified with a
/// ping at that point; later calls reuse the same client.
pub struct MongoMovieStore {
    uri: String,
    fallback_db_name: String,
    connect_timeout: Duration,
    connection: OnceCell<Connection>,
}

impl MongoMovieStore {
    pub fn new(uri: impl Into<String>, fallback_db_name: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            uri: uri.into(),
            fallback_db_name: fallback_db_name.into(),
            connect_timeout,
            connection: OnceCell::new(),
        }
    }

    async fn connection(&self) -> Result<&Connection, StoreError> {
        self.connection.get_or_try_init(|| self.connect()).await
    }

    async fn movies(&self) -> Result<&Collection<MovieDocument>, StoreError> {
        Ok(&self.connection().await?.movies)
    }

    async fn connect(&self) -> Result<Connection, StoreError> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(self.connect_timeout);
        options.server_selection_timeout = Some(self.connect_timeout);

        let client = Client::with_options(options)?;
        // Database named in the URI path wins over the configured fallback
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(&self.fallback_db_name));

        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("Database connected: {}", db.name());

        Ok(Connection {
            movies: db.collection::<MovieDocument>(COLLECTION),
            client,
            db,
        })
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn insert_many(&self, records: Vec<MovieFields>) -> Result<(), StoreError> {
        // The driver rejects empty batches
        if records.is_empty() {
            return Ok(());
        }
        let docs: Vec<MovieDocument> = records
            .into_iter()
            .map(|fields| MovieDocument::new(MovieId::generate(), fields))
            .collect();
        self.movies().await?.insert_many(docs, None).await?;
        Ok(())
    }

    async fn insert_one(&self, record: MovieFields) -> Result<MovieId, StoreError> {
        let id = MovieId::generate();
        self.movies()
            .await?
            .insert_one(MovieDocument::new(id, record), None)
            .await?;
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let cursor = self.movies().await?.find(None, None).await?;
        let docs: Vec<MovieDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError> {
        let found = self
            .movies()
            .await?
            .find_one(doc! { "_id": id.object_id() }, None)
            .await?;
        Ok(found.map(Movie::from))
    }

    async fn update_by_id(&self, id: &MovieId, fields: MovieFields) -> Result<(), StoreError> {
        let update = doc! {
            "$set": {
                "name": fields.name,
                "img": fields.img,
                "summary": fields.summary,
            }
        };
        self.movies()
            .await?
            .update_one(doc! { "_id": id.object_id() }, update, None)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError> {
        self.movies()
            .await?
            .delete_one(doc! { "_id": id.object_id() }, None)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.connection()
            .await?
            .db
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        if let Some(connection) = self.connection.get() {
            connection.client.clone().shutdown().await;
            info!("Closed database connection");
        }
    }
}
