// The two inputs of the benchmark: 1..=N in order, and a shuffled copy.

use ndarray::Array1;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    Ordered,
    Shuffled,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Order::Ordered => "ordered",
            Order::Shuffled => "shuffled",
        }
    }
}

/// An immutable permutation of `1..=N`.
///
/// Values are `u32`; the length is capped at `i32::MAX` so that every
/// difference of two values fits the sign-bit trick in
/// [`crate::kernel::branchless_sum`].
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Array1<u32>,
    order: Order,
}

impl Sequence {
    /// Builds `[1, 2, ..., n]`.
    pub fn ordered(n: u32) -> Result<Self, Error> {
        Ok(Self {
            values: Array1::from_vec(ascending(n)?),
            order: Order::Ordered,
        })
    }

    /// Builds a uniformly random permutation of `1..=n` drawn from `rng`.
    pub fn shuffled<R: rand::Rng + ?Sized>(n: u32, rng: &mut R) -> Result<Self, Error> {
        let mut values = ascending(n)?;
        // Fisher-Yates, as the C harness did by hand with drand48
        values.shuffle(rng);

        Ok(Self {
            values: Array1::from_vec(values),
            order: Order::Shuffled,
        })
    }

    /// Builds a sequence of the given order. A shuffled sequence is
    /// reproducible when `seed` is given and drawn from OS entropy otherwise.
    pub fn build(n: u32, order: Order, seed: Option<u64>) -> Result<Self, Error> {
        match order {
            Order::Ordered => Self::ordered(n),
            Order::Shuffled => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Self::shuffled(n, &mut rng)
            }
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> u32 {
        // bounded by i32::MAX on construction
        self.values.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The contiguous backing slice the kernels run over.
    pub fn values(&self) -> &[u32] {
        // an Array1 made by from_vec is always in standard layout
        self.values
            .as_slice()
            .expect("sequence storage is contiguous")
    }

    pub fn first(&self) -> u32 {
        self.values[0]
    }

    /// The second element, if the sequence has one.
    pub fn second(&self) -> Option<u32> {
        self.values.get(1).copied()
    }

    pub fn last(&self) -> u32 {
        self.values[self.values.len() - 1]
    }

    /// Lower bound of the partial sum, `N / 2`.
    pub fn threshold(&self) -> u32 {
        self.len() / 2
    }
}

fn ascending(n: u32) -> Result<Vec<u32>, Error> {
    if n == 0 {
        return Err(Error::EmptySequence);
    }
    if n > i32::MAX as u32 {
        return Err(Error::LengthOutOfRange(n as u64));
    }

    Ok((1..=n).collect())
}
