// Times full and partial sums over an ordered and a shuffled sequence.

use clap::Parser;
use partsum::{Config, DEFAULT_LENGTH, DEFAULT_LOOPS, Kernel};

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    /// N; the sequences hold 1..=N
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: u32,

    /// Repetitions of each measured sum
    #[arg(long, default_value_t = DEFAULT_LOOPS)]
    loops: u64,

    /// Seed for the shuffle, for repeatable runs
    #[arg(long)]
    seed: Option<u64>,

    /// Kernel used for the partial sums
    #[arg(long, value_enum, default_value_t = Kernel::Branching)]
    kernel: Kernel,

    /// Skip checking sums against their closed form
    #[arg(long, action)]
    no_verify: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        length: args.length,
        loops: args.loops,
        seed: args.seed,
        kernel: args.kernel,
        verify: !args.no_verify,
    };

    let measurements = partsum::run(&config).map_err(|e| e.to_string())?;
    for measurement in &measurements {
        println!("{measurement}");
    }

    Ok(())
}
