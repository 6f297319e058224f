//! branches — hand-wired scenario harness.
//!
//! Searches START → END across four parallel branches, then repeats the
//! search in small step-bounded slices to show that a budget-limited query
//! resumes where the previous one stopped.

mod network;

use anyhow::{Result, ensure};
use tracing_subscriber::EnvFilter;

use pm_core::Path;
use pm_search::SearchContext;

use network::{Network, build_network};

const SLICE_STEPS: usize = 2;

fn names(net: &Network, path: &Path) -> String {
    let names: Vec<&str> = path.steps.iter().map(|&id| net.store[id].name).collect();
    names.join(" → ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    println!("=== branches — START → END ===");
    let net = build_network()?;

    // 1. Unbounded search.
    let mut ctx = SearchContext::self_reported(&net.store);
    let path = ctx.find_path(net.start, net.end, None);
    ensure!(!path.is_empty(), "END unreachable from START");
    println!("Path   : {}", names(&net, &path));
    println!("Length : {:.2}", path.length);

    if let Some(set) = ctx.registry().get(net.start) {
        let scanned = set.path_to_by_neighbors(net.end);
        println!(
            "Neighbor-scan reconstruction: {} ({:.2})",
            names(&net, &scanned),
            scanned.length
        );
    }
    println!();

    // 2. Same query in slices of SLICE_STEPS settled positions.
    let mut sliced = SearchContext::self_reported(&net.store);
    let mut slices = 1;
    let mut found = sliced.find_path(net.start, net.end, Some(SLICE_STEPS));
    while found.is_empty() {
        slices += 1;
        found = sliced.find_path(net.start, net.end, Some(SLICE_STEPS));
    }
    ensure!(found == path, "sliced search disagrees with unbounded search");
    println!("Sliced search ({SLICE_STEPS} steps per call) finished after {slices} calls");

    Ok(())
}
