//! grid — shortest path across a passability grid.
//!
//! Builds a grid of positions, asks for the shortest path between two cells,
//! then prints every cell's settled distance from the start with the path
//! marked.  Cells the search never settled print as `.`.
//!
//! Usage: `grid [config.json]` (see `config.rs` for the format).  Set
//! `RUST_LOG=debug` (or `trace`) to watch the search.

mod area;
mod config;

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pm_search::SearchContext;

use area::Area;
use config::GridConfig;

/// `RUST_LOG` directives if set and well-formed, else `info`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_target(false)
        .without_time()
        .init();

    // `load` validates what it reads.
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => GridConfig::load(&path)?,
        None => {
            let config = GridConfig::default();
            config.validate()?;
            config
        }
    };

    let area = Area::build(&config)?;
    info!(width = area.width, height = area.height, "grid built");

    let [sx, sy] = config.start;
    let [ex, ey] = config.end;
    let (start, end) = (area.id(sx, sy), area.id(ex, ey));

    let mut ctx = SearchContext::self_reported(&area.store);
    let path = ctx.find_path(start, end, config.max_steps);

    println!("=== grid — {}×{} ===", area.width, area.height);
    if path.is_empty() {
        println!("No path from ({sx};{sy}) to ({ex};{ey}) within the step budget");
    } else {
        let coords: Vec<String> = path
            .steps
            .iter()
            .map(|&id| format!("({};{})", area.store[id].x, area.store[id].y))
            .collect();
        println!("Path   : {}", coords.join(" → "));
        println!("Length : {:.3}", path.length);
    }
    println!();

    let on_path: HashSet<_> = path.steps.iter().copied().collect();
    for y in 0..area.height {
        let row: Vec<String> = (0..area.width)
            .map(|x| {
                let id = area.id(x, y);
                let from_start = ctx
                    .calculated_distances(id)
                    .into_iter()
                    .find(|&(source, _)| source == start)
                    .map(|(_, d)| d);
                let mark = if on_path.contains(&id) { '*' } else { ' ' };
                match from_start {
                    Some(d) => format!("{mark}{d:5.2}"),
                    None => format!("{mark}{:>5}", "."),
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }

    if let Some(set) = ctx.registry().get(start) {
        println!();
        println!(
            "Settled {} of {} cells, frontier {}",
            set.settled_count(),
            area.store.len(),
            set.frontier_len()
        );
    }

    Ok(())
}
