mod common;

use anyhow::Result;
use reqwest::StatusCode;

use movie_api::config::StatusCodeMode;

#[tokio::test]
async fn http_mode_reports_not_found_as_404() -> Result<()> {
    let server = common::spawn_server_with(StatusCodeMode::Http).await?;

    let res = server
        .client
        .get(server.url("/movies/5f8d0d55b54764421b7156c3"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Movie not found");

    let res = server
        .client
        .delete(server.url("/movies/5f8d0d55b54764421b7156c3"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn http_mode_reports_validation_failures_as_400() -> Result<()> {
    let server = common::spawn_server_with(StatusCodeMode::Http).await?;

    let res = server
        .client
        .post(server.url("/movies"))
        .form(&[("movie[name]", "Heat")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await?,
        "\"movie.img\" is required, \"movie.summary\" is required"
    );

    Ok(())
}

#[tokio::test]
async fn http_mode_reports_unknown_routes_as_404() -> Result<()> {
    let server = common::spawn_server_with(StatusCodeMode::Http).await?;

    let res = server.client.get(server.url("/nowhere")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "INVALID ROUTE TRY AGAIN");

    Ok(())
}

#[tokio::test]
async fn http_mode_keeps_success_responses() -> Result<()> {
    let server = common::spawn_server_with(StatusCodeMode::Http).await?;

    let id = server.create_movie("Heat", "", "Cops and robbers").await?;
    let res = server.client.get(server.url(&format!("/movies/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.client.delete(server.url(&format!("/movies/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "Movie Deleted");

    Ok(())
}

#[tokio::test]
async fn legacy_mode_keeps_redirects() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/movies"))
        .form(&common::movie_form("Heat", "", "Cops"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FOUND);

    Ok(())
}

#[tokio::test]
async fn http_mode_reports_malformed_update_id_as_404() -> Result<()> {
    let server = common::spawn_server_with(StatusCodeMode::Http).await?;

    let res = server
        .client
        .put(server.url("/movies/not-an-id"))
        .form(&common::movie_form("Heat", "", "Cops"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Movie not found");

    Ok(())
}
