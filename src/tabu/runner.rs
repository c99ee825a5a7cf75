//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build an initial feasible tour by backtracking and price it
//! 2. At each of exactly `max_iterations` iterations:
//!    a. Generate the swap neighborhood of the current tour
//!    b. Drop infeasible candidates
//!    c. Visit survivors in ascending `(cost, tour)` order; accept each
//!       one that is not tabu, or that beats the current cost (aspiration)
//!    d. Every accepted tour becomes current and enters the tabu list
//! 3. Report initial, final, best and worst tours with timings
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::config::{TabuConfig, DEFAULT_SEED};
use super::neighborhood::{retain_feasible, swap_neighbors};
use super::types::TabuList;
use crate::construct::InitialTourFinder;
use crate::error::Result;
use crate::graph::{Graph, Weight};
use crate::tour::Tour;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    /// Tour produced by backtracking.
    pub initial_tour: Tour,
    /// Cost of the initial tour.
    pub initial_cost: Weight,
    /// Current tour after the last iteration.
    pub final_tour: Tour,
    /// Cost of the final tour.
    pub final_cost: Weight,
    /// Cheapest tour seen during the run.
    pub best_tour: Tour,
    /// Cost of the best tour.
    pub best_cost: Weight,
    /// Most expensive tour accepted during the run.
    pub worst_tour: Tour,
    /// Cost of the worst tour.
    pub worst_cost: Weight,
    /// Wall time spent building and pricing the initial tour.
    pub time_to_initial: Duration,
    /// Wall time of the whole run.
    pub total_time: Duration,
    /// Iterations executed.
    pub iterations: usize,
    /// Tours accepted over all iterations.
    pub accepted_moves: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<Weight>,
}

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPhase {
    Initializing,
    Searching,
    Done,
}

/// A feasible candidate ranked by cost, ties broken by vertex order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ranked {
    cost: Weight,
    tour: Tour,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.tour.cmp(&other.tour))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mutable trackers owned by a single run.
struct SearchState {
    current: Tour,
    current_cost: Weight,
    best: Tour,
    best_cost: Weight,
    worst: Tour,
    worst_cost: Weight,
}

impl SearchState {
    fn new(tour: Tour, cost: Weight) -> Self {
        Self {
            current: tour.clone(),
            current_cost: cost,
            best: tour.clone(),
            best_cost: cost,
            worst: tour,
            worst_cost: cost,
        }
    }

    fn accept(&mut self, tour: &Tour, cost: Weight) {
        self.current = tour.clone();
        self.current_cost = cost;
        if cost < self.best_cost {
            self.best = tour.clone();
            self.best_cost = cost;
        }
        if cost > self.worst_cost {
            self.worst = tour.clone();
            self.worst_cost = cost;
        }
    }
}

/// Accept when not tabu, or when strictly cheaper than the current tour.
fn admissible(tabu: &TabuList, tour: &Tour, cost: Weight, current_cost: Weight) -> bool {
    !tabu.contains(tour) || cost < current_cost
}

/// Runs one iteration from `state.current` and returns how many tours it
/// accepted.
fn iterate<R: Rng>(
    graph: &Graph,
    state: &mut SearchState,
    tabu: &mut TabuList,
    rng: &mut R,
) -> Result<usize> {
    let candidates = retain_feasible(graph, swap_neighbors(&state.current, rng));

    let mut queue = BinaryHeap::with_capacity(candidates.len());
    for tour in candidates {
        let cost = tour.cost(graph)?;
        queue.push(Reverse(Ranked { cost, tour }));
    }

    let mut accepted = 0;
    while let Some(Reverse(Ranked { cost, tour })) = queue.pop() {
        if !admissible(tabu, &tour, cost, state.current_cost) {
            continue;
        }
        state.accept(&tour, cost);
        tabu.push(tour);
        accepted += 1;
    }
    Ok(accepted)
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `graph`, seeding the RNG from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabu_tsp::graph::build_graph;
    /// use tabu_tsp::tabu::{TabuConfig, TabuRunner};
    ///
    /// let graph = build_graph(&[
    ///     vec![0, 10, 15, 20],
    ///     vec![10, 0, 35, 25],
    ///     vec![15, 35, 0, 30],
    ///     vec![20, 25, 30, 0],
    /// ]).unwrap();
    /// let config = TabuConfig::default().with_tabu_size(3).with_max_iterations(50).with_seed(1);
    ///
    /// let result = TabuRunner::run(&graph, &config).unwrap();
    /// assert!(result.best_cost <= result.initial_cost);
    /// ```
    pub fn run(graph: &Graph, config: &TabuConfig) -> Result<SearchResult> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(graph, config, &mut rng)
    }

    /// Executes Tabu Search drawing neighborhood indices from `rng`.
    pub fn run_with_rng<R: Rng>(
        graph: &Graph,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;

        let started = Instant::now();
        let mut phase = SearchPhase::Initializing;
        debug!(?phase, vertices = graph.vertex_count(), "tabu search started");

        let initial_tour = InitialTourFinder::default()
            .with_max_retries(config.max_retries)
            .find(graph)?;
        let initial_cost = initial_tour.cost(graph)?;
        let time_to_initial = started.elapsed();

        phase = SearchPhase::Searching;
        debug!(?phase, cost = initial_cost, ?time_to_initial, "initial tour priced");

        let mut state = SearchState::new(initial_tour.clone(), initial_cost);
        let mut tabu = TabuList::new(config.tabu_size);
        debug!(tabu_size = tabu.capacity(), "tabu list ready");
        let mut accepted_moves = 0;
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let accepted = iterate(graph, &mut state, &mut tabu, rng)?;
            accepted_moves += accepted;
            cost_history.push(state.best_cost);

            trace!(
                iteration,
                accepted,
                current = state.current_cost,
                best = state.best_cost,
                "iteration finished"
            );
        }

        phase = SearchPhase::Done;
        let total_time = started.elapsed();
        info!(
            ?phase,
            iterations = config.max_iterations,
            accepted_moves,
            initial = initial_cost,
            best = state.best_cost,
            worst = state.worst_cost,
            ?total_time,
            "tabu search finished"
        );

        Ok(SearchResult {
            initial_tour,
            initial_cost,
            final_tour: state.current,
            final_cost: state.current_cost,
            best_tour: state.best,
            best_cost: state.best_cost,
            worst_tour: state.worst,
            worst_cost: state.worst_cost,
            time_to_initial,
            total_time,
            iterations: config.max_iterations,
            accepted_moves,
            cost_history,
        })
    }
}
