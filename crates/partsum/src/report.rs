// One line of benchmark output.

use std::fmt;

use crate::{Order, Selection, Sequence};

/// A single timed measurement, with the sample values its line shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub order: Order,
    pub selection: Selection,
    pub first: u32,
    pub second: Option<u32>,
    pub last: u32,
    pub threshold: u32,
    pub seconds: f64,
}

impl Measurement {
    pub fn new(sequence: &Sequence, selection: Selection, seconds: f64) -> Self {
        Self {
            order: sequence.order(),
            selection,
            first: sequence.first(),
            second: sequence.second(),
            last: sequence.last(),
            threshold: sequence.threshold(),
            seconds,
        }
    }

    /// e.g. `ordered partial`
    pub fn name(&self) -> String {
        format!("{} {}", self.order.label(), self.selection.label())
    }

    fn samples(&self) -> String {
        match self.second {
            Some(second) => format!("{}+{}+...+{}", self.first, second, self.last),
            None => format!("{}+...+{}", self.first, self.last),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // labels padded so the colons line up
        match (self.order, self.selection) {
            (Order::Ordered, Selection::All) => write!(
                f,
                "ordered all     : {}     : {:0.3} sec",
                self.samples(),
                self.seconds
            ),
            (Order::Ordered, Selection::Partial) => write!(
                f,
                "ordered partial : >= {}          : {:0.3} sec",
                self.threshold, self.seconds
            ),
            (Order::Shuffled, Selection::All) => write!(
                f,
                "shuffled all    : {}: {:0.3} sec",
                self.samples(),
                self.seconds
            ),
            (Order::Shuffled, Selection::Partial) => write!(
                f,
                "shuffled partial: >= {}          : {:0.3} sec",
                self.threshold, self.seconds
            ),
        }
    }
}
