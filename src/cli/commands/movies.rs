use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::database::{fixtures, MovieId, MovieStore};

pub async fn seed(store: &dyn MovieStore, output_format: &OutputFormat) -> anyhow::Result<()> {
    let movies = fixtures::demo_movies();
    let count = movies.len();
    store.insert_many(movies).await?;
    output_success(
        output_format,
        &format!("Seeded {} demo movies", count),
        Some(json!({ "inserted": count })),
    )
}

pub async fn list(store: &dyn MovieStore, output_format: &OutputFormat) -> anyhow::Result<()> {
    let movies = store.find_all().await?;
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&movies)?),
        OutputFormat::Text if movies.is_empty() => println!("No movies found"),
        OutputFormat::Text => {
            for movie in &movies {
                println!("{}  {}", movie.id, movie.name);
            }
        }
    }
    Ok(())
}

pub async fn show(store: &dyn MovieStore, id: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let Ok(movie_id) = id.parse::<MovieId>() else {
        output_error(output_format, &format!("'{}' is not a valid movie id", id))?;
        anyhow::bail!("invalid movie id");
    };

    match store.find_by_id(&movie_id).await? {
        Some(movie) => match output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&movie)?),
            OutputFormat::Text => {
                println!("ID:      {}", movie.id);
                println!("Name:    {}", movie.name);
                println!("Image:   {}", movie.img);
                println!("Summary: {}", movie.summary);
            }
        },
        None => {
            output_error(output_format, "Movie not found")?;
            anyhow::bail!("movie {} not found", movie_id);
        }
    }
    Ok(())
}

pub async fn ping(store: &dyn MovieStore, output_format: &OutputFormat) -> anyhow::Result<()> {
    store.ping().await?;
    output_success(output_format, "Movie store is reachable", None)
}
