use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tales_application::{Effect, Intent, TalesApp};
use tales_core::reader::ScrollMetrics;
use tales_core::{CatalogStatus, Filter, StoryId};

mod bootstrap;
mod display;
mod logging;
mod shell;

use bootstrap::StartupOptions;
use display::{format_grid, format_reader, format_theme};

#[derive(Parser)]
#[command(name = "tales")]
#[command(about = "TALES - a distraction-free short story reader", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Story catalog JSON, overriding the configured path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Key-value store file (defaults to the platform data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Keep bookmarks and theme in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the story grid
    List {
        #[arg(long, default_value = "all")]
        filter: Filter,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Open a story in the reader
    Read {
        id: StoryId,
        /// Font size in pixels, clamped to the configured bounds
        #[arg(long)]
        font_size: Option<f32>,
        #[command(flatten)]
        scroll: ScrollArgs,
    },
    /// Toggle a bookmark and show the bookmarked stories
    Bookmark { id: StoryId },
    /// Toggle between light and dark
    Theme,
    /// Interactive reading shell
    Shell,
}

#[derive(Args)]
struct ScrollArgs {
    /// Scroll offset to report after opening
    #[arg(long, requires_all = ["content_height", "viewport_height"])]
    scroll: Option<f64>,
    #[arg(long)]
    content_height: Option<f64>,
    #[arg(long)]
    viewport_height: Option<f64>,
}

impl ScrollArgs {
    fn metrics(&self) -> Option<ScrollMetrics> {
        Some(ScrollMetrics::new(
            self.scroll?,
            self.content_height?,
            self.viewport_height?,
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = StartupOptions {
        config: cli.config,
        catalog: cli.catalog,
        store: cli.store,
        ephemeral: cli.ephemeral,
    };
    let config = bootstrap::load_config(&options)?;
    logging::init(&config.log.level);

    let mut app = bootstrap::build_app(&options, &config)?;

    match cli.command {
        Commands::List { filter, search } => {
            load_catalog(&mut app).await?;
            app.dispatch(Intent::SetFilter(filter)).await;
            app.dispatch(Intent::SetSearch(search)).await;
            println!("{}", format_grid(&app.grid()));
        }
        Commands::Read {
            id,
            font_size,
            scroll,
        } => {
            load_catalog(&mut app).await?;
            if app.dispatch(Intent::OpenReader(id)).await.is_empty() {
                bail!("No story with id {}", id);
            }
            let px = font_size.unwrap_or(config.reader.font_size_default);
            if !px.is_finite() {
                bail!("Font size must be a finite number, got {}", px);
            }
            app.dispatch(Intent::SetFontSize(config.reader.clamp_font_size(px)))
                .await;
            if let Some(metrics) = scroll.metrics() {
                app.dispatch(Intent::Scroll(metrics)).await;
            }
            if let Some(view) = app.reader_view() {
                println!("{}", format_reader(&view));
            }
        }
        Commands::Bookmark { id } => {
            load_catalog(&mut app).await?;
            if app.dispatch(Intent::ToggleBookmark(id)).await.is_empty() {
                bail!("No story with id {}", id);
            }
            app.dispatch(Intent::SetFilter(Filter::Bookmarked)).await;
            println!("{}", format_grid(&app.grid()));
        }
        Commands::Theme => {
            for effect in app.dispatch(Intent::ToggleTheme).await {
                if let Effect::ApplyTheme(theme) = effect {
                    println!("{}", format_theme(theme));
                }
            }
        }
        Commands::Shell => {
            shell::run(app, config.reader).await?;
        }
    }

    Ok(())
}

/// Loads the catalog for one-shot commands, failing the command if it cannot be read.
async fn load_catalog(app: &mut TalesApp) -> Result<()> {
    app.dispatch(Intent::LoadCatalog).await;
    if let CatalogStatus::Failed(message) = &app.state().catalog {
        bail!("Failed to load stories: {}", message);
    }
    Ok(())
}
