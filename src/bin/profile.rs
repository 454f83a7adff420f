use std::time::Instant;

use primaze::generators::random_maze;

fn main() -> Result<(), primaze::Error> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(255);

    let start = Instant::now();
    for seed in 0..num_iters {
        std::hint::black_box(random_maze(size, size, Some(seed as u64))?);
    }
    let elapsed = start.elapsed();
    println!(
        "Generated {} mazes of {}x{} in {:?} ({:?} per maze)",
        num_iters,
        size,
        size,
        elapsed,
        elapsed / num_iters.max(1)
    );
    Ok(())
}
