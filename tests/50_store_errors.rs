mod common;

use std::sync::Arc;

use anyhow::Result;
use reqwest::{Method, StatusCode};

use common::{movie_form, FailingMovieStore};
use movie_api::config::StatusCodeMode;

const KNOWN_ID: &str = "5f8d0d55b54764421b7156c3";

async fn assert_store_failures(mode: StatusCodeMode, expected: StatusCode) -> Result<()> {
    let server = common::spawn_server_with_store(Arc::new(FailingMovieStore), mode).await?;
    let member = format!("/movies/{}", KNOWN_ID);

    for (method, path) in [
        (Method::GET, "/movies"),
        (Method::GET, "/seed"),
        (Method::GET, member.as_str()),
        (Method::DELETE, member.as_str()),
    ] {
        let res = server.client.request(method.clone(), server.url(path)).send().await?;
        assert_eq!(res.status(), expected, "{} {}", method, path);
        assert_eq!(res.text().await?, FailingMovieStore::MESSAGE, "{} {}", method, path);
    }

    for (method, path) in [(Method::POST, "/movies"), (Method::PUT, member.as_str())] {
        let res = server
            .client
            .request(method.clone(), server.url(path))
            .form(&movie_form("Heat", "", "Cops and robbers"))
            .send()
            .await?;
        assert_eq!(res.status(), expected, "{} {}", method, path);
        assert!(res.headers().get(reqwest::header::LOCATION).is_none(), "{} {}", method, path);
        assert_eq!(res.text().await?, FailingMovieStore::MESSAGE, "{} {}", method, path);
    }

    Ok(())
}

#[tokio::test]
async fn legacy_mode_reports_store_errors_with_ok_status() -> Result<()> {
    assert_store_failures(StatusCodeMode::Legacy, StatusCode::OK).await
}

#[tokio::test]
async fn http_mode_reports_store_errors_as_500() -> Result<()> {
    assert_store_failures(StatusCodeMode::Http, StatusCode::INTERNAL_SERVER_ERROR).await
}

#[tokio::test]
async fn routing_errors_do_not_touch_the_store() -> Result<()> {
    let server =
        common::spawn_server_with_store(Arc::new(FailingMovieStore), StatusCodeMode::Legacy).await?;

    let res = server.client.get(server.url("/movies/not-an-id")).send().await?;
    assert_eq!(res.text().await?, "Movie not found");

    let res = server.client.get(server.url("/nowhere")).send().await?;
    assert_eq!(res.text().await?, "INVALID ROUTE TRY AGAIN");

    Ok(())
}
