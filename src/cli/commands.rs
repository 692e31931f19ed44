use chrono::Local;
use tracing::{info, warn};

use crate::app::{AppContext, BookrakeError, Result};
use crate::render;
use crate::scrape::Collector;

/// Scrape all listing pages and overwrite the record store.
///
/// A fatal fetch error aborts before anything is written: a partial run
/// never replaces the previous store.
pub async fn scrape(ctx: &AppContext) -> Result<()> {
    let collector = Collector::new(ctx.fetcher.clone(), &ctx.config.scrape);
    let books = collector.collect_all().await?;

    if books.is_empty() {
        warn!("no books matching the filter found");
    } else {
        info!(total = books.len(), "books collected");
    }

    ctx.store.save_books(&books)?;
    println!(
        "Scraped {} books into {}",
        books.len(),
        ctx.config.paths.store.display()
    );
    Ok(())
}

/// Render the persisted record set into the output document.
pub fn render(ctx: &AppContext) -> Result<()> {
    let books = ctx.store.load_books()?;
    let html = render::render(&books);
    std::fs::write(&ctx.config.paths.output, html)?;

    println!(
        "Rendered {} books into {}",
        books.len(),
        ctx.config.paths.output.display()
    );
    Ok(())
}

/// Publish the rendered document as today's post.
pub async fn publish(ctx: &AppContext) -> Result<()> {
    let output = &ctx.config.paths.output;
    if !output.exists() {
        return Err(BookrakeError::MissingInput(output.clone()));
    }
    let content = std::fs::read_to_string(output)?;

    let title = format!(
        "{} {}",
        ctx.config.publish.title_prefix,
        Local::now().format("%d-%m-%Y")
    );
    let url = ctx
        .publisher
        .publish(&title, &content, &ctx.config.publish.labels)
        .await?;

    println!("Post published: {url}");
    Ok(())
}

/// The daily job: scrape, render, publish, stopping at the first failure.
pub async fn run(ctx: &AppContext) -> Result<()> {
    scrape(ctx).await?;
    render(ctx)?;
    publish(ctx).await?;
    Ok(())
}
