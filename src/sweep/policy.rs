//! Per-partition retention decision.

use crate::models::{DayOrdinal, PartitionBoundary};

/// Whether a partition may be dropped given the run's retention cutoff.
///
/// The catch-all partition is never eligible: dropping it would discard all
/// future and overflow rows. A bounded partition is eligible only when its
/// upper bound is strictly below the cutoff; at equality the partition may
/// still hold rows at or after the cutoff, so it is retained.
pub fn is_eligible(boundary: &PartitionBoundary, cutoff: DayOrdinal) -> bool {
    match boundary {
        PartitionBoundary::Unbounded => false,
        PartitionBoundary::Bounded(upper) => *upper < cutoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_strictly_below_cutoff_is_eligible() {
        assert!(is_eligible(&PartitionBoundary::Bounded(100), 101));
        assert!(is_eligible(&PartitionBoundary::Bounded(0), 1));
    }

    #[test]
    fn test_bounded_at_cutoff_is_retained() {
        assert!(!is_eligible(&PartitionBoundary::Bounded(101), 101));
    }

    #[test]
    fn test_bounded_above_cutoff_is_retained() {
        assert!(!is_eligible(&PartitionBoundary::Bounded(102), 101));
    }

    #[test]
    fn test_unbounded_never_eligible() {
        assert!(!is_eligible(&PartitionBoundary::Unbounded, 101));
        assert!(!is_eligible(&PartitionBoundary::Unbounded, DayOrdinal::MAX));
    }

    #[test]
    fn test_worked_example() {
        // Boundaries 20230101 and 20230601 with an unbounded catch-all,
        // cutoff 20230401: only the first is eligible.
        let partitions = [
            PartitionBoundary::Bounded(20230101),
            PartitionBoundary::Bounded(20230601),
            PartitionBoundary::Unbounded,
        ];
        let eligible: Vec<bool> = partitions
            .iter()
            .map(|b| is_eligible(b, 20230401))
            .collect();
        assert_eq!(eligible, [true, false, false]);
    }
}
