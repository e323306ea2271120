use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{header::LOCATION, redirect::Policy, StatusCode};

use movie_api::config::{AppConfig, StatusCodeMode, StoreBackend};
use async_trait::async_trait;
use movie_api::database::{MemoryMovieStore, Movie, MovieFields, MovieId, MovieStore, StoreError};
use movie_api::AppState;

pub struct TestServer<S = MemoryMovieStore> {
    pub base_url: String,
    pub store: Arc<S>,
    pub client: reqwest::Client,
}

impl<S> TestServer<S> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a movie form and return the id from the redirect
    pub async fn create_movie(&self, name: &str, img: &str, summary: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/movies"))
            .form(&movie_form(name, img, summary))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::FOUND, "create should redirect");
        redirect_id(&res)
    }
}

/// Start the app on a free port, backed by a fresh in-memory store
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(StatusCodeMode::Legacy).await
}

pub async fn spawn_server_with(status_codes: StatusCodeMode) -> Result<TestServer> {
    spawn_server_with_store(Arc::new(MemoryMovieStore::new()), status_codes).await
}

/// Start the app on a free port, backed by the given store
pub async fn spawn_server_with_store<S>(
    store: Arc<S>,
    status_codes: StatusCodeMode,
) -> Result<TestServer<S>>
where
    S: MovieStore + 'static,
{
    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let mut config = AppConfig::development();
    config.database.backend = StoreBackend::Memory;
    config.api.status_codes = status_codes;
    config.api.enable_request_logging = false;

    let app = movie_api::app(AppState::new(store.clone(), config));

    // Bound before returning, so the server accepts connections right away
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    // Redirects are asserted on, not followed
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;

    Ok(TestServer {
        base_url,
        store,
        client,
    })
}

pub fn movie_form<'a>(name: &'a str, img: &'a str, summary: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("movie[name]", name),
        ("movie[img]", img),
        ("movie[summary]", summary),
    ]
}

/// Extract the movie id from a `Location: /movies/<id>` redirect
pub fn redirect_id(res: &reqwest::Response) -> Result<String> {
    let location = res
        .headers()
        .get(LOCATION)
        .context("missing Location header")?
        .to_str()?;
    let id = location
        .strip_prefix("/movies/")
        .with_context(|| format!("unexpected redirect target {}", location))?;
    Ok(id.to_string())
}

/// Store whose every operation fails, standing in for an unreachable database
#[derive(Debug, Default)]
pub struct FailingMovieStore;

impl FailingMovieStore {
    pub const MESSAGE: &'static str = "Missing configuration: DATABASE_URL";

    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::ConfigMissing("DATABASE_URL"))
    }
}

#[async_trait]
impl MovieStore for FailingMovieStore {
    async fn insert_many(&self, _records: Vec<MovieFields>) -> Result<(), StoreError> {
        Self::fail()
    }

    async fn insert_one(&self, _record: MovieFields) -> Result<MovieId, StoreError> {
        Self::fail()
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        Self::fail()
    }

    async fn find_by_id(&self, _id: &MovieId) -> Result<Option<Movie>, StoreError> {
        Self::fail()
    }

    async fn update_by_id(&self, _id: &MovieId, _fields: MovieFields) -> Result<(), StoreError> {
        Self::fail()
    }

    async fn delete_by_id(&self, _id: &MovieId) -> Result<(), StoreError> {
        Self::fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Self::fail()
    }
}
