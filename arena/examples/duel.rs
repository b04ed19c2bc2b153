//! Command-line battle runner
//!
//! Loads the catalog named by `POKEDUEL_CATALOG` (default `pokemon.csv`),
//! submits one battle and polls it until it finishes.
//!
//! ```text
//! cargo run -p pokeduel-arena --example duel -- Charmander Squirtle
//! cargo run -p pokeduel-arena --example duel -- list 2
//! ```

use std::time::Duration;

use anyhow::Result;
use pokeduel_arena::{Arena, ArenaConfig, StatusLabel};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arena = Arena::from_config(&ArenaConfig::from_env())?;

    match args.as_slice() {
        [cmd] if cmd == "list" => print_page(&arena, 1),
        [cmd, page] if cmd == "list" => print_page(&arena, page.parse().unwrap_or(1)),
        [a, b] => {
            let started = match arena.start_battle(a, b) {
                Ok(started) => started,
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(());
                }
            };
            let battle_id = started.battle_id.to_string();
            println!("Battle {battle_id} started");

            loop {
                let status = arena.battle_status(&battle_id)?;
                if status.status != StatusLabel::InProgress {
                    println!("{}", serde_json::to_string_pretty(&status)?);
                    break;
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Ok(())
        }
        _ => {
            eprintln!("usage: duel <creature> <creature> | duel list [page]");
            Ok(())
        }
    }
}

fn print_page(arena: &Arena, page: usize) -> Result<()> {
    let listing = arena.creatures(page, None);
    println!("Page {}/{} ({} creatures)", listing.page, listing.total_pages(), listing.total);
    for creature in &listing.items {
        match &creature.type2 {
            Some(type2) => println!("  {} ({}/{})", creature.name, creature.type1, type2),
            None => println!("  {} ({})", creature.name, creature.type1),
        }
    }
    Ok(())
}
