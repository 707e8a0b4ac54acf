use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every conflict seen during solves.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// The total number of iterations through solves.
    pub total_iterations: usize,

    /// A count of solves.
    pub solves: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,
}
