//! Structured scene snapshots reported by the simulator after each action.
//!
//! [`SceneMetadata`] is the subset of the simulator's `lastEvent.metadata`
//! that judgment policies read: every object with its type, visibility,
//! and position, plus the agent's position.

use smallvec::SmallVec;

use crate::error::JudgeError;
use crate::geometry::Position;
use crate::id::ObjectType;

/// Object types visible in one snapshot, in metadata order.
///
/// Duplicates are kept: two visible bowls yield two entries.
pub type VisibleTypes<'a> = SmallVec<[&'a ObjectType; 8]>;

/// One object as reported in a scene snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMetadata {
    /// Object class (`objectType`).
    pub object_type: ObjectType,
    /// Whether the object is currently visible to the agent.
    pub visible: bool,
    /// World-space position of the object's centre.
    pub position: Position,
}

impl ObjectMetadata {
    /// Convenience constructor.
    pub fn new(object_type: impl Into<ObjectType>, visible: bool, position: Position) -> Self {
        Self {
            object_type: object_type.into(),
            visible,
            position,
        }
    }
}

/// The agent's own state in a scene snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentMetadata {
    /// World-space position of the agent.
    pub position: Position,
}

/// Snapshot of simulator state after the most recent action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneMetadata {
    /// Every object in the scene.
    pub objects: Vec<ObjectMetadata>,
    /// The agent.
    pub agent: AgentMetadata,
}

impl SceneMetadata {
    /// Types of all currently visible objects.
    pub fn visible_types(&self) -> VisibleTypes<'_> {
        self.objects
            .iter()
            .filter(|o| o.visible)
            .map(|o| &o.object_type)
            .collect()
    }

    /// Whether at least one object of `object_type` is visible.
    pub fn is_visible(&self, object_type: &ObjectType) -> bool {
        self.objects
            .iter()
            .any(|o| o.visible && &o.object_type == object_type)
    }

    /// The single object of `object_type` in the scene.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::TargetNotUnique`] when the scene holds zero
    /// or several objects of that type. Distance shaping is undefined
    /// in either case, so callers treat this as fatal.
    pub fn unique_object(&self, object_type: &ObjectType) -> Result<&ObjectMetadata, JudgeError> {
        let mut matches = self
            .objects
            .iter()
            .filter(|o| &o.object_type == object_type);
        let first = matches.next();
        let extra = matches.count();
        match (first, extra) {
            (Some(object), 0) => Ok(object),
            (first, extra) => Err(JudgeError::TargetNotUnique {
                object_type: object_type.clone(),
                matches: usize::from(first.is_some()) + extra,
            }),
        }
    }

    /// Distance from the agent to the single object of `object_type`.
    pub fn agent_distance_to(&self, object_type: &ObjectType) -> Result<f64, JudgeError> {
        let object = self.unique_object(object_type)?;
        Ok(object.position.distance(&self.agent.position))
    }
}
