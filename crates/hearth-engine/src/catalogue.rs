//! The fixed, ordered set of actions an agent can choose from.

use hearth_core::Action;
use indexmap::IndexSet;

use crate::config::ConfigError;

/// Navigation actions shared by every catalogue.
pub const NAVIGATION_ACTIONS: [&str; 5] =
    ["MoveAhead", "RotateLeft", "RotateRight", "LookUp", "LookDown"];

/// Ordered, duplicate-free action catalogue.
///
/// The agent's policy network selects actions by index; the index of
/// each action is its position at construction and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionCatalogue {
    actions: IndexSet<Action>,
}

impl ActionCatalogue {
    /// Build a catalogue from actions in index order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCatalogue`] for no actions and
    /// [`ConfigError::DuplicateAction`] if an action repeats.
    pub fn new<I, A>(actions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Action>,
    {
        let mut set = IndexSet::new();
        for action in actions {
            let action = action.into();
            if set.contains(&action) {
                return Err(ConfigError::DuplicateAction { action });
            }
            set.insert(action);
        }
        if set.is_empty() {
            return Err(ConfigError::EmptyCatalogue);
        }
        Ok(Self { actions: set })
    }

    /// Navigation plus the two declare actions of the dual-signal task.
    pub fn declare_task() -> Self {
        Self::with_task_actions(["DoneTomato", "DoneBowl"])
    }

    /// Navigation plus the pickup and cook actions of the sequential task.
    pub fn manipulation_task() -> Self {
        Self::with_task_actions(["PickupObject", "Cook"])
    }

    fn with_task_actions(task: [&str; 2]) -> Self {
        let actions = NAVIGATION_ACTIONS
            .iter()
            .chain(task.iter())
            .map(|&name| Action::from(name))
            .collect();
        Self { actions }
    }

    /// The action at `index`.
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get_index(index)
    }

    /// Index of `action`, if present.
    pub fn index_of(&self, action: &Action) -> Option<usize> {
        self.actions.get_index_of(action)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always `false`; construction rejects empty catalogues.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}
