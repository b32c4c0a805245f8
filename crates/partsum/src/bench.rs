// Runs the four measurements in order: ordered/shuffled x all/partial.

use crate::kernel::{self, Kernel, Selection};
use crate::sequence::{Order, Sequence};
use crate::timing::timeit;
use crate::{DEFAULT_LENGTH, DEFAULT_LOOPS, Error, Measurement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// N, the sequence holds `1..=N`.
    pub length: u32,
    /// Repetitions of each measured operation.
    pub loops: u64,
    /// Seed for the shuffle; OS entropy when `None`.
    pub seed: Option<u64>,
    pub kernel: Kernel,
    /// Check each kernel result against its closed form before timing it.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            loops: DEFAULT_LOOPS,
            seed: None,
            kernel: Kernel::default(),
            verify: true,
        }
    }
}

/// Builds both sequences and times the full and partial sum over each.
///
/// The shuffled sequence is built once and shared by its two measurements.
pub fn run(config: &Config) -> Result<Vec<Measurement>, Error> {
    if config.loops == 0 {
        return Err(Error::ZeroLoops);
    }

    log::info!(
        "N: {}, loops: {}, kernel: {:?}",
        config.length,
        config.loops,
        config.kernel
    );

    // draw the seed up front so an unseeded run can be repeated from the log
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("shuffle seed: {seed}");

    let ordered = Sequence::build(config.length, Order::Ordered, None)?;
    let shuffled = Sequence::build(config.length, Order::Shuffled, Some(seed))?;

    let mut measurements = Vec::with_capacity(4);
    for sequence in [&ordered, &shuffled] {
        for selection in [Selection::All, Selection::Partial] {
            measurements.push(measure(sequence, selection, config)?);
        }
    }

    Ok(measurements)
}

fn measure(
    sequence: &Sequence,
    selection: Selection,
    config: &Config,
) -> Result<Measurement, Error> {
    let values = sequence.values();
    let limit = selection.limit(sequence.len());

    // the full sum is a plain reduction; only the partial sum goes through
    // the configured kernel
    let op = |values: &[u32]| match selection {
        Selection::All => kernel::full_sum(values),
        Selection::Partial => kernel::conditional_sum(values, limit, config.kernel),
    };

    if config.verify {
        verify(sequence, selection, limit, op(values))?;
    }

    let seconds = timeit(config.loops, || op(std::hint::black_box(values)));
    let measurement = Measurement::new(sequence, selection, seconds);
    log::debug!("{}: {:.6} sec", measurement.name(), seconds);

    Ok(measurement)
}

fn verify(
    sequence: &Sequence,
    selection: Selection,
    limit: u32,
    actual: u64,
) -> Result<(), Error> {
    let expected = kernel::expected_sum(sequence.len(), limit);
    if actual != expected {
        return Err(Error::ChecksumMismatch {
            name: format!("{}_{}", selection.label(), sequence.order().label()),
            length: sequence.len(),
            limit,
            expected,
            actual,
        });
    }

    log::debug!(
        "{} {} verified: {}",
        sequence.order().label(),
        selection.label(),
        actual
    );
    Ok(())
}
