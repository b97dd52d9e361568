//! Search Observer

use crate::{
    assignments::Assignment,
    solvers::exhaustive::{feasibility::Evaluation, ranking::CandidateRank},
};

/// Observer for following the exhaustive search as it runs.
///
/// Every callback has an empty default, so implementors only override what they
/// need. Observers are passive: they cannot steer the search.
pub trait SearchObserver {
    /// Called for every complete candidate after its limit check.
    fn on_candidate(&mut self, _candidate: &[Assignment<'_>], _evaluation: &Evaluation) {}

    /// Called when a feasible candidate replaces the current best.
    fn on_new_best(&mut self, _candidate: &[Assignment<'_>], _rank: &CandidateRank) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
