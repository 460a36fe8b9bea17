//! Delete-and-reinsert cycles over a [`Tree`], used to watch how its internal path length
//! drifts as nodes get replaced.
//!
//! A [`Churn`] owns the tree together with the [`LiveSet`] of values stored in it. Every
//! removal and insertion goes through both, so after any call (successful or not) the live
//! set holds exactly the values of the tree.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

use crate::binary_tree::Tree;
use crate::error::ChurnError;
use crate::live_set::LiveSet;

/// How replacement values are inserted during a perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All removals first, then as many fresh insertions.
    Asymmetric,
    /// One fresh insertion right after every removal.
    Symmetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnConfig {
    /// Fresh values are drawn from `0..value_bound`.
    pub value_bound: i32,
    /// First value inserted by [`Churn::populate`].
    pub root_value: i32,
    /// Rejected draws tolerated before giving up on a fresh value.
    pub max_draw_attempts: usize,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        ChurnConfig {
            value_bound: (1 << 15) - 1,
            root_value: 1 << 14,
            max_draw_attempts: 10_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub cycles: usize,
    pub removals: usize,
    pub ipl_before: usize,
    pub ipl_after: usize,
    pub len: usize,
}

pub struct Churn<R = StdRng> {
    tree: Tree,
    live: LiveSet,
    rng: R,
    config: ChurnConfig,
}

impl<R: Rng> Churn<R> {
    pub fn new(config: ChurnConfig, rng: R) -> Self {
        Churn {
            tree: Tree::new(),
            live: LiveSet::new(),
            rng,
            config,
        }
    }

    /// Inserts `config.root_value` followed by `size - 1` fresh values.
    pub fn populate(config: ChurnConfig, rng: R, size: usize) -> Result<Self, ChurnError> {
        let mut churn = Self::new(config, rng);
        if size > 0 {
            churn.insert_value(config.root_value);
            for _ in 1..size {
                churn.insert_fresh()?;
            }
        }
        Ok(churn)
    }

    /// Starts from the given values, inserted in order. Repeated values are skipped so the
    /// live set stays free of duplicates.
    pub fn with_values<I>(config: ChurnConfig, rng: R, values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut churn = Self::new(config, rng);
        for value in values {
            if !churn.live.contains(value) {
                churn.insert_value(value);
            }
        }
        churn
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn live(&self) -> &LiveSet {
        &self.live
    }

    pub fn config(&self) -> &ChurnConfig {
        &self.config
    }

    pub fn internal_path_length(&self) -> usize {
        self.tree.internal_path_length()
    }

    /// Whether the tree holds exactly the live values.
    pub fn is_consistent(&self) -> bool {
        let mut live = self.live.as_slice().to_vec();
        live.sort_unstable();
        self.tree.len() == live.len() && self.tree.iter().eq(live)
    }

    /// Draws a value absent from the live set and inserts it.
    pub fn insert_fresh(&mut self) -> Result<i32, ChurnError> {
        let value = self.live.draw_unique(
            &mut self.rng,
            self.config.value_bound,
            self.config.max_draw_attempts,
        )?;
        self.insert_value(value);
        Ok(value)
    }

    pub fn perturb(&mut self, mode: Mode) -> Result<usize, ChurnError> {
        let value = self.live.choose(&mut self.rng)?;
        match mode {
            Mode::Asymmetric => self.perturb_asymmetric_at(value),
            Mode::Symmetric => self.perturb_symmetric_at(value),
        }
    }

    pub fn perturb_asymmetric(&mut self) -> Result<usize, ChurnError> {
        self.perturb(Mode::Asymmetric)
    }

    pub fn perturb_symmetric(&mut self) -> Result<usize, ChurnError> {
        self.perturb(Mode::Symmetric)
    }

    /// Cascades the removal of `value` through its successors, then inserts as many fresh
    /// values as were removed. Returns the number of removals.
    pub fn perturb_asymmetric_at(&mut self, value: i32) -> Result<usize, ChurnError> {
        let removed = self.cascade(value, Mode::Asymmetric)?;
        for _ in 0..removed {
            self.insert_fresh()?;
        }
        Ok(removed)
    }

    /// Like [`Self::perturb_asymmetric_at`] but each removal is immediately followed by
    /// its replacement.
    pub fn perturb_symmetric_at(&mut self, value: i32) -> Result<usize, ChurnError> {
        self.cascade(value, Mode::Symmetric)
    }

    pub fn run(&mut self, mode: Mode, cycles: usize) -> Result<CycleReport, ChurnError> {
        let ipl_before = self.internal_path_length();
        let mut removals = 0;
        for _ in 0..cycles {
            removals += self.perturb(mode)?;
        }
        Ok(CycleReport {
            cycles,
            removals,
            ipl_before,
            ipl_after: self.internal_path_length(),
            len: self.tree.len(),
        })
    }

    fn cascade(&mut self, value: i32, mode: Mode) -> Result<usize, ChurnError> {
        let mut removed = 0;
        if let Some(successor) = self.tree.successor(value)? {
            removed += self.cascade(successor, mode)?;
        }

        self.tree.remove(value)?;
        self.live.remove(value);
        info!(value, "deleted");
        removed += 1;

        if mode == Mode::Symmetric {
            self.insert_fresh()?;
        }
        Ok(removed)
    }

    fn insert_value(&mut self, value: i32) {
        self.tree.insert(value);
        self.live.push(value);
        info!(value, "inserted");
    }
}
