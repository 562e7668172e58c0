//! Node budgets for search routines.
//!
//! A full-width search has no natural stopping point short of its depth bound, so callers
//! that need a responsive interface can cap the number of visited nodes. Exceeding the cap
//! surfaces as [`SearchError::LimitExceeded`] instead of an unbounded stall.

use crate::search::{SearchError, SearchLimits, SearchStats};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: SearchLimits,
    stats: SearchStats,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.stats.nodes = self.stats.nodes.saturating_add(1);
        if self.stats.nodes > self.limits.max_nodes {
            return Err(SearchError::LimitExceeded {
                stage,
                metric: "nodes",
                limit: self.limits.max_nodes,
                observed: self.stats.nodes,
                stats: self.stats,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn note_leaf(&mut self) {
        self.stats.leaves = self.stats.leaves.saturating_add(1);
    }

    #[inline]
    pub fn note_cutoff(&mut self) {
        self.stats.cutoffs = self.stats.cutoffs.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeding_node_budget_reports_counts() {
        let mut tracker = ResourceTracker::new(SearchLimits { max_nodes: 2 });
        tracker.bump_nodes("t").unwrap();
        tracker.bump_nodes("t").unwrap();
        match tracker.bump_nodes("t") {
            Err(SearchError::LimitExceeded {
                metric,
                limit,
                observed,
                ..
            }) => {
                assert_eq!(metric, "nodes");
                assert_eq!(limit, 2);
                assert_eq!(observed, 3);
            }
            other => panic!("expected limit error, got {other:?}"),
        }
    }
}
