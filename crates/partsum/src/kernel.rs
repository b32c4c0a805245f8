// Summation kernels and their closed-form expected results.

use std::hint::black_box;

/// Which elements of a sequence take part in the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Selection {
    /// Every element.
    All,
    /// Only elements `>= N / 2`.
    Partial,
}

impl Selection {
    pub fn label(self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Partial => "partial",
        }
    }

    /// Lower bound for a sequence of length `n`. Selecting everything is the
    /// same as a conditional sum with limit 0.
    pub fn limit(self, n: u32) -> u32 {
        match self {
            Selection::All => 0,
            Selection::Partial => n / 2,
        }
    }
}

/// How the conditional sum decides whether to include an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Kernel {
    /// An `if` per element; cost depends on branch prediction.
    #[default]
    Branching,
    /// Arithmetic masking; no data-dependent branch.
    Branchless,
}

/// Nesting of the repetition loop relative to the element loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LoopOrder {
    /// `for k in loops { for x in values { .. } }`
    #[default]
    PassMajor,
    /// `for x in values { for k in loops { .. } }`
    ElementMajor,
}

pub fn full_sum(values: &[u32]) -> u64 {
    values.iter().map(|&x| x as u64).sum()
}

/// Sum of the elements `>= limit`.
pub fn masked_sum(values: &[u32], limit: u32) -> u64 {
    let mut sum = 0u64;
    for &x in values {
        if x >= limit {
            sum += x as u64;
        }
    }
    sum
}

/// Same as [`masked_sum`] without a branch on the data.
///
/// Only valid while every `x` and `limit` are below `2^31`, which
/// [`crate::Sequence`] guarantees.
pub fn branchless_sum(values: &[u32], limit: u32) -> u64 {
    values.iter().map(|&x| step(x, limit) as u64).sum()
}

/// `x` if `x >= limit`, else 0: the sign bit of `x - limit` is set exactly
/// when `x < limit`.
#[inline(always)]
fn step(x: u32, limit: u32) -> u32 {
    x * (1 ^ (x.wrapping_sub(limit) >> 31))
}

/// One pass of the given kernel.
pub fn conditional_sum(values: &[u32], limit: u32, kernel: Kernel) -> u64 {
    match kernel {
        Kernel::Branching => masked_sum(values, limit),
        Kernel::Branchless => branchless_sum(values, limit),
    }
}

/// Total of `loops` passes, wrapping on overflow.
///
/// `black_box` keeps the optimizer from folding the repetitions into a
/// multiplication.
pub fn repeated_sum(
    values: &[u32],
    limit: u32,
    loops: u64,
    kernel: Kernel,
    loop_order: LoopOrder,
) -> u64 {
    let mut sum = 0u64;

    match loop_order {
        LoopOrder::PassMajor => {
            for _ in 0..loops {
                let pass = conditional_sum(black_box(values), limit, kernel);
                sum = sum.wrapping_add(pass);
            }
        }
        LoopOrder::ElementMajor => {
            for &x in values {
                for _ in 0..loops {
                    let x = black_box(x);
                    let term = match kernel {
                        Kernel::Branching if x >= limit => x,
                        Kernel::Branching => 0,
                        Kernel::Branchless => step(x, limit),
                    };
                    sum = sum.wrapping_add(term as u64);
                }
            }
        }
    }

    sum
}

/// Closed form of the sum of `limit..=n` (with 0 counted as 1, which adds
/// nothing), i.e. the conditional sum over any permutation of `1..=n`.
pub fn expected_sum(n: u32, limit: u32) -> u64 {
    let n = n as u64;
    let l = (limit as u64).max(1);
    if l > n {
        return 0;
    }
    ((l + n) * (n - l + 1)) / 2
}

/// Expected result of [`repeated_sum`], wrapping the same way it does.
pub fn expected_repeated(n: u32, limit: u32, loops: u64) -> u64 {
    expected_sum(n, limit).wrapping_mul(loops)
}
