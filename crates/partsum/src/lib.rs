
// Summing a sequence in order and shuffled, with and without a threshold,
// to see what branch prediction and memory order do to a tight loop.

pub mod bench;
pub mod kernel;
pub mod report;
pub mod sequence;
pub mod timing;

pub use bench::{Config, run};
pub use kernel::{Kernel, LoopOrder, Selection};
pub use report::Measurement;
pub use sequence::{Order, Sequence};

/// Sequence length used when none is given.
pub const DEFAULT_LENGTH: u32 = 5000;

/// Number of times each measured operation is repeated.
pub const DEFAULT_LOOPS: u64 = 100_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("sequence length must be positive")]
    EmptySequence,

    #[error("sequence length {0} exceeds {max}", max = i32::MAX)]
    LengthOutOfRange(u64),

    #[error("loop count must be positive")]
    ZeroLoops,

    #[error("{name}: N: {length}, limit: {limit}, expected: {expected}, actual: {actual}")]
    ChecksumMismatch {
        name: String,
        length: u32,
        limit: u32,
        expected: u64,
        actual: u64,
    },
}
