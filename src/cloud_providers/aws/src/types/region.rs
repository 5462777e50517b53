use serde::{Deserialize, Serialize};

/// A region of a partition. The description is the location name the
/// pricing API filters on, e.g. `US East (N. Virginia)` for `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    id: String,
    description: String,
}

impl Region {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
