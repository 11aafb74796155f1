//! airports — skyroute demo on a 10-airport US network.
//!
//! Plans LAX → JFK with both search algorithms (clear skies and under
//! active conditions), prints the cost comparison against the direct
//! estimate, then drives a playback run with synthetic timestamps.

mod network;

use anyhow::Result;

use sky_core::Millis;
use sky_engine::{RouteEngine, RouteQuery};
use sky_route::Algorithm;

use network::{all_conditions, build_network};

// ── Constants ─────────────────────────────────────────────────────────────────

const ORIGIN:       &str = "LAX";
const DESTINATION:  &str = "JFK";
const DURATION_MS:  u64  = 3_000; // playback length
const TICK_MS:      u64  = 250;   // synthetic frame interval

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let net = build_network()?;
    println!("=== airports — skyroute demo ===");
    println!("Network: {} nodes, {} edges", net.node_count(), net.edge_count());
    println!();

    let origin = net
        .resolve(ORIGIN)
        .ok_or_else(|| anyhow::anyhow!("unknown origin {ORIGIN}"))?;
    let destination = net
        .resolve(DESTINATION)
        .ok_or_else(|| anyhow::anyhow!("unknown destination {DESTINATION}"))?;
    let conditions = all_conditions(&net)?;
    let engine = RouteEngine::new(net);

    // 1. Plan under every algorithm × condition combination.
    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        for (label, query) in [
            ("clear", RouteQuery::new(origin, destination).with_algorithm(algorithm)),
            (
                "weather+congestion",
                RouteQuery::new(origin, destination)
                    .with_algorithm(algorithm)
                    .with_conditions(conditions.clone()),
            ),
        ] {
            match engine.plan(&query)? {
                None => println!("{:>9} [{label}]: no route", algorithm.as_str()),
                Some(plan) => {
                    let codes: Vec<&str> = plan
                        .path
                        .nodes
                        .iter()
                        .map(|&n| engine.network().code(n))
                        .collect();
                    println!("{:>9} [{label}]: {}", algorithm.as_str(), codes.join(" -> "));
                    println!("{:>9}  {}", "", plan.summary);
                }
            }
        }
    }
    println!();

    // 2. Play the clear-skies route back over synthetic frame timestamps.
    let plan = engine
        .plan(&RouteQuery::new(origin, destination))?
        .expect("demo network connects LAX and JFK");
    let mut playback = plan.start_playback(DURATION_MS, Millis(0))?;

    println!("Playback ({DURATION_MS} ms, one sample every {TICK_MS} ms):");
    let mut now = Millis(0);
    while let Some(sample) = playback.tick(now) {
        let pos = sample.position(&plan.path, engine.network());
        println!(
            "  t={:>5}ms  progress {:.2}  segment {}+{:.2}  at {}",
            now.0, sample.progress, sample.segment, sample.fraction, pos
        );
        if sample.progress >= 1.0 {
            break;
        }
        now = now + TICK_MS;
    }
    println!("Playback finished: {}", playback.phase());

    Ok(())
}
