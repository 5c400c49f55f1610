//! Scene metadata fixtures.

use hearth_core::{AgentMetadata, ObjectMetadata, Position, SceneMetadata};

/// Build one object entry.
pub fn object_at(object_type: &str, visible: bool, x: f64, y: f64, z: f64) -> ObjectMetadata {
    ObjectMetadata::new(object_type, visible, Position::new(x, y, z))
}

/// Fluent builder for [`SceneMetadata`]. The agent defaults to the origin.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    objects: Vec<ObjectMetadata>,
    agent: Position,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent_at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.agent = Position::new(x, y, z);
        self
    }

    pub fn object(mut self, object_type: &str, visible: bool, x: f64, y: f64, z: f64) -> Self {
        self.objects.push(object_at(object_type, visible, x, y, z));
        self
    }

    pub fn build(self) -> SceneMetadata {
        SceneMetadata {
            objects: self.objects,
            agent: AgentMetadata {
                position: self.agent,
            },
        }
    }
}
