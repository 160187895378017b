//! One-shot command handlers.
//!
//! Each handler runs a single library operation against the composed
//! context and prints a human-readable result.

use anyhow::{Result, bail};

use crate::bootstrap::CliContext;

/// Print all users with their collection sizes.
pub async fn list_users(ctx: &CliContext) -> Result<()> {
    let users = ctx.library.list_users().await?;
    if users.is_empty() {
        println!("no users yet");
        return Ok(());
    }
    for user in users {
        println!("{:>4}  {} ({} movies)", user.id, user.name, user.movies.len());
    }
    Ok(())
}

/// Add a user and print the assigned id.
pub async fn add_user(ctx: &CliContext, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("user name must not be empty");
    }
    let user = ctx.library.add_user(name).await?;
    println!("added user {} with id {}", user.name, user.id);
    Ok(())
}

/// Print a user's movie collection.
pub async fn list_movies(ctx: &CliContext, user_id: u32) -> Result<()> {
    let Some(user) = ctx.library.get_user(user_id).await? else {
        bail!("user {user_id} not found");
    };
    if user.movies.is_empty() {
        println!("{} has no movies yet", user.name);
        return Ok(());
    }
    println!("movies of {}:", user.name);
    for movie in user.movies {
        println!(
            "{:>4}  {} ({}) by {} - rated {:.1}",
            movie.id, movie.name, movie.year, movie.director, movie.rating
        );
    }
    Ok(())
}

/// Print the highest-rated movies across all users.
pub async fn top_rated(ctx: &CliContext, limit: usize) -> Result<()> {
    let movies = ctx.library.top_rated_movies(limit).await?;
    if movies.is_empty() {
        println!("no movies yet");
        return Ok(());
    }
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{:>2}. {:.1}  {} ({})",
            rank + 1,
            movie.rating,
            movie.name,
            movie.year
        );
    }
    Ok(())
}
