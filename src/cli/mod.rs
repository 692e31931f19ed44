pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookrake")]
#[command(about = "Scrape the Kindle free-books listing and publish a daily Blogger post", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the listing into the record store
    Scrape,
    /// Render the record store into the output document
    Render,
    /// Publish the rendered document to Blogger
    Publish,
    /// Run scrape, render and publish sequentially (the daily job)
    Run,
}
