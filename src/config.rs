use std::path::PathBuf;

use crate::algorithm::Algorithm;
use crate::order::Order;

/// Settings of one [Sort](crate::sort::Sort) run, captured when a stage starts.
#[derive(Clone, Debug)]
pub(crate) struct Config {
    input: PathBuf,
    output: Option<PathBuf>,
    algorithm: Algorithm,
    order: Order,
}

impl Config {
    pub(crate) fn new(
        input: PathBuf,
        output: Option<PathBuf>,
        algorithm: Algorithm,
        order: Order,
    ) -> Config {
        Config {
            input,
            output,
            algorithm,
            order,
        }
    }

    pub(crate) fn input(&self) -> &PathBuf {
        &self.input
    }

    pub(crate) fn output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn order(&self) -> Order {
        self.order
    }
}
