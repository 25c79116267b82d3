use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use portal::{NewComment, Portal, PortalError, SiteSettings};
use query::SortKey;
use types::EntityId;

#[derive(Parser, Debug)]
struct Params {
    /// Site settings YAML file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed data (YAML or JSON) to load instead of the built-in catalogue.
    #[arg(short, long)]
    seed: Option<PathBuf>,
    /// Skip the simulated service latency.
    #[arg(long)]
    instant: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Home,
    Dashboard,
    Search {
        query: String,
        #[arg(long)]
        sort: Option<SortKey>,
    },
    Category {
        slug: String,
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = SortKey::Newest)]
        sort: SortKey,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Blog {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Post {
        slug: String,
    },
    Game {
        id: EntityId,
    },
    /// Post an approved comment on a game. The store lives in memory, so the
    /// comment is not kept after this command exits.
    Comment {
        game_id: EntityId,
        #[arg(long)]
        author: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        content: String,
    },
    /// Switch an ad zone on or off. The store lives in memory, so the change
    /// is not kept after this command exits.
    ToggleAd {
        id: EntityId,
    },
}

fn print<T: Serialize>(payload: &T) -> Result<(), PortalError> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

async fn run(params: Params) -> Result<(), PortalError> {
    let settings = SiteSettings::from_cli_or_env_or_yaml(params.config, params.seed, params.instant)?;
    let portal = Portal::from_settings(settings)?;

    match params.command {
        Command::Home => print(&portal.home().await?),
        Command::Dashboard => print(&portal.dashboard().await?),
        Command::Search { query, sort } => print(&portal.search(&query, sort).await?),
        Command::Category {
            slug,
            query,
            sort,
            page,
        } => print(
            &portal
                .category_games(&slug, query.as_deref(), sort, page)
                .await?,
        ),
        Command::Blog {
            query,
            category,
            page,
        } => print(
            &portal
                .blog(query.as_deref(), category.as_deref(), page)
                .await?,
        ),
        Command::Post { slug } => print(&portal.blog_post(&slug).await?),
        Command::Game { id } => print(&portal.game_detail(id).await?),
        Command::Comment {
            game_id,
            author,
            email,
            content,
        } => {
            let input = NewComment {
                author,
                email,
                content,
            };
            print(&portal.post_comment(game_id, input).await?)
        }
        Command::ToggleAd { id } => print(&portal.toggle_ad(id).await?),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let params = Params::parse();
    log::info!("args: {params:?}");
    if let Err(err) = run(params).await {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
