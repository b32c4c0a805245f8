//! One summation loop in isolation, for looking at branch misses and cycles
//! with perf. Exits non-zero when the total doesn't match its closed form.

use std::time::Instant;

use clap::Parser;
use partsum::kernel::{self, Kernel, LoopOrder, Selection};
use partsum::{DEFAULT_LENGTH, DEFAULT_LOOPS, Order, Sequence};

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    /// N; 0 means the default
    length: Option<u32>,

    #[arg(long, default_value_t = DEFAULT_LOOPS)]
    loops: u64,

    #[arg(long, value_enum, default_value_t = Order::Shuffled)]
    order: Order,

    #[arg(long, value_enum, default_value_t = Selection::Partial)]
    selection: Selection,

    #[arg(long, value_enum, default_value_t = Kernel::Branching)]
    kernel: Kernel,

    #[arg(long, value_enum, default_value_t = LoopOrder::PassMajor)]
    loop_order: LoopOrder,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let length = match args.length {
        Some(0) | None => DEFAULT_LENGTH,
        Some(n) => n,
    };

    let sequence = Sequence::build(length, args.order, args.seed).map_err(|e| e.to_string())?;
    let limit = args.selection.limit(length);

    let start = Instant::now();
    let sum = kernel::repeated_sum(
        sequence.values(),
        limit,
        args.loops,
        args.kernel,
        args.loop_order,
    );
    let elapsed = start.elapsed();

    log::info!("Sum: {sum}");
    log::info!(
        "Time for {} {} ({:?}, {:?}): {:?}",
        args.order.label(),
        args.selection.label(),
        args.kernel,
        args.loop_order,
        elapsed
    );

    let expected = kernel::expected_repeated(length, limit, args.loops);
    if sum != expected {
        return Err(partsum::Error::ChecksumMismatch {
            name: format!("{}_{}", args.selection.label(), args.order.label()),
            length,
            limit,
            expected,
            actual: sum,
        }
        .to_string());
    }

    Ok(())
}

// Branch misses vs. cycles, e.g.:
//  perf record -g --event=branch-misses ./target/release/partsum_perf --order shuffled
//  perf stat -e branches,branch-misses,cycles ./target/release/partsum_perf --kernel branchless
