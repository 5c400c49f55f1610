//! Per-episode sub-goal bookkeeping and the current interaction target.

use hearth_core::ObjectType;
use smallvec::SmallVec;

/// Number of sub-goals in every Hearth task.
pub const SUB_GOALS: usize = 2;

/// One or two object types the agent must interact with.
pub type Target = SmallVec<[ObjectType; SUB_GOALS]>;

/// Attempt and success flags for each sub-goal.
///
/// `satisfied[i]` is only ever set by a policy after checking simulator
/// state, and overall success is derived from it on demand rather than
/// stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalLedger {
    attempted: [bool; SUB_GOALS],
    satisfied: [bool; SUB_GOALS],
}

impl GoalLedger {
    /// A ledger with every sub-goal unattempted and pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark sub-goal `index` attempted. Returns `true` on the first attempt.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SUB_GOALS`.
    pub fn mark_attempted(&mut self, index: usize) -> bool {
        let first = !self.attempted[index];
        self.attempted[index] = true;
        first
    }

    /// Mark sub-goal `index` satisfied. Returns `true` if it was pending.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SUB_GOALS`.
    pub fn mark_satisfied(&mut self, index: usize) -> bool {
        let first = !self.satisfied[index];
        self.satisfied[index] = true;
        first
    }

    /// Whether sub-goal `index` has been attempted.
    pub fn is_attempted(&self, index: usize) -> bool {
        self.attempted[index]
    }

    /// Whether sub-goal `index` has been satisfied.
    pub fn is_satisfied(&self, index: usize) -> bool {
        self.satisfied[index]
    }

    /// Whether every sub-goal has been attempted.
    pub fn all_attempted(&self) -> bool {
        self.attempted.iter().all(|&a| a)
    }

    /// Whether every sub-goal has been satisfied.
    pub fn overall_success(&self) -> bool {
        self.satisfied.iter().all(|&s| s)
    }

    /// Number of attempted sub-goals.
    pub fn attempted_count(&self) -> usize {
        self.attempted.iter().filter(|&&a| a).count()
    }

    /// Number of satisfied sub-goals.
    pub fn satisfied_count(&self) -> usize {
        self.satisfied.iter().filter(|&&s| s).count()
    }
}

/// The current target and the closest the agent has come to it.
///
/// The running minimum only ever decreases while the target is
/// unchanged; [`retarget`](Self::retarget) resets it to infinity.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetTracker {
    objects: Target,
    min_distance: f64,
}

impl TargetTracker {
    /// Track `objects` with no distance observed yet.
    pub fn new(objects: Target) -> Self {
        Self {
            objects,
            min_distance: f64::INFINITY,
        }
    }

    /// All current target types, in sub-goal order.
    pub fn objects(&self) -> &[ObjectType] {
        &self.objects
    }

    /// Target type for sub-goal `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ObjectType> {
        self.objects.get(index)
    }

    /// The first target type.
    pub fn primary(&self) -> Option<&ObjectType> {
        self.objects.first()
    }

    /// Smallest distance observed since the last retarget.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Replace the target with a single object type and forget distances.
    pub fn retarget(&mut self, object_type: ObjectType) {
        self.objects.clear();
        self.objects.push(object_type);
        self.min_distance = f64::INFINITY;
    }

    /// Record a distance reading. Returns `true` iff it is a strict improvement.
    ///
    /// NaN readings never improve.
    pub fn record_distance(&mut self, distance: f64) -> bool {
        if distance < self.min_distance {
            self.min_distance = distance;
            true
        } else {
            false
        }
    }
}
