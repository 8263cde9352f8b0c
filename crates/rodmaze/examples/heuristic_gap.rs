//! How often does the squared-Euclidean search return a longer path than BFS?
//!
//! Draws seeded random grids, solves each goal with both engines, and prints
//! the share of reachable cases where the heuristic path is not optimal plus
//! the largest gap seen.

use std::time::Instant;

use rodmaze::prelude::*;

fn main() {
    let cfg = RandomGridCfg {
        rows: 12,
        cols: 12,
        blocked_ratio: 0.25,
        clear_corners: true,
    };
    let draws = 500u64;
    let mut reachable = 0usize;
    let mut suboptimal = 0usize;
    let mut worst_gap = 0usize;
    let t0 = Instant::now();
    for i in 0..draws {
        let g = draw_grid(cfg, ReplayToken::new(2024, i));
        for goal in goals(&g) {
            let fast = search(&g, DEFAULT_START, goal).expect("start is cleared");
            let exact = bfs_path(&g, DEFAULT_START, goal).expect("start is cleared");
            if let (Some(fast), Some(exact)) = (fast, exact) {
                reachable += 1;
                let gap = fast.move_count() - exact.move_count();
                if gap > 0 {
                    suboptimal += 1;
                    worst_gap = worst_gap.max(gap);
                }
            }
        }
    }
    let elapsed = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "grid={}x{} blocked_ratio={} draws={draws}",
        cfg.rows, cfg.cols, cfg.blocked_ratio
    );
    println!("reachable_goals={reachable} suboptimal={suboptimal} worst_gap={worst_gap}");
    println!("elapsed_ms={elapsed:.3}");
}
