//! Strongly-typed identifiers for objects, actions, and scenes.

use std::borrow::Borrow;
use std::fmt;

/// Identifies a class of simulator object, e.g. `"Tomato"` or `"Microwave"`.
///
/// Matches the simulator's `objectType` metadata string exactly
/// (case-sensitive).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectType(String);

impl ObjectType {
    /// Create an object type from its simulator name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The simulator name of this object type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectType {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for ObjectType {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for ObjectType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A discrete simulator action, identified by its command name.
///
/// Actions are plain commands (`"MoveAhead"`, `"PickupObject"`, ...)
/// with no arguments; the simulator resolves any object interaction
/// against whatever is in front of the agent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action(String);

impl Action {
    /// Create an action from its command name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The command name sent to the simulator.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Action {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for Action {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Identifies a simulator scene, e.g. `"FloorPlan28"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The scene name passed to the simulator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_compares_by_name() {
        assert_eq!(ObjectType::from("Tomato"), ObjectType::new("Tomato"));
        assert_ne!(ObjectType::from("Tomato"), ObjectType::from("tomato"));
    }

    #[test]
    fn display_is_the_raw_name() {
        assert_eq!(Action::from("MoveAhead").to_string(), "MoveAhead");
        assert_eq!(SceneId::from("FloorPlan28").to_string(), "FloorPlan28");
        assert_eq!(ObjectType::from("Bowl").to_string(), "Bowl");
    }
}
