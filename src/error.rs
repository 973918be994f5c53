use crate::graph_ast::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Input is not valid JSON, lacks a required field, or references an unknown node.
    #[error("malformed input: {message}")]
    MalformedInput { message: String, ids: Vec<String> },

    /// Level assignment did not reach a fixed point; `ids` never resolved.
    #[error("graph contains a cycle; unresolved nodes: {}", join_ids(.ids))]
    CyclicGraph { ids: Vec<NodeId> },

    /// A label cannot be embedded in XML even after escaping.
    #[error("cannot serialize {id}: {reason}")]
    Serialization { id: String, reason: String },

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput {
            message: message.into(),
            ids: Vec::new(),
        }
    }

    pub(crate) fn malformed_at(message: impl Into<String>, id: impl Into<String>) -> Self {
        Error::MalformedInput {
            message: message.into(),
            ids: vec![id.into()],
        }
    }
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
