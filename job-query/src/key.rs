use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// Entity name followed by the serialized query parameters, e.g. `["jobs",{"page":1}]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    parts: Vec<String>,
}

fn serialize_part<P: Serialize + Debug + ?Sized>(part: &P) -> String {
    match serde_json::to_string(part) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize query key part {:?}: {}", part, e);
            format!("{:?}", part)
        }
    }
}

impl QueryKey {
    pub fn entity(name: &str) -> Self {
        Self {
            parts: vec![serialize_part(name)],
        }
    }

    pub fn with<P: Serialize + Debug + ?Sized>(mut self, part: &P) -> Self {
        self.parts.push(serialize_part(part));
        self
    }

    /// Whether `prefix` names this key or one of its ancestors
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.parts.starts_with(&prefix.parts)
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parts.join(","))
    }
}
