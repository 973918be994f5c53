use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Caller-supplied node identifier in canonical text form.
///
/// JSON numbers and strings both map here; integral numbers print without a
/// fraction so `1`, `1.0` and `"1"` name the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeIdVisitor)
    }
}

struct NodeIdVisitor;

impl Visitor<'_> for NodeIdVisitor {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a node id (string or number)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
        Ok(NodeId::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NodeId, E> {
        Ok(NodeId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
        Ok(NodeId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
        Ok(NodeId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NodeId, E> {
        Ok(NodeId(canonical_number(v)))
    }
}

fn canonical_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = v as i64;
        whole.to_string()
    } else {
        v.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphInput {
    #[serde(alias = "nodi")]
    pub nodes: Vec<NodeDecl>,
    #[serde(default, alias = "archi")]
    pub edges: Vec<EdgeDecl>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDecl {
    pub id: NodeId,
    #[serde(alias = "etichetta")]
    pub label: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, alias = "color")]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

impl NodeDecl {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        NodeDecl {
            id: id.into(),
            label: label.into(),
            width: None,
            height: None,
            fill_color: None,
            text_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeDecl {
    #[serde(alias = "partenza")]
    pub source: NodeId,
    #[serde(alias = "arrivo")]
    pub target: NodeId,
    #[serde(default, alias = "etichetta")]
    pub label: String,
}

impl EdgeDecl {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        EdgeDecl {
            source: source.into(),
            target: target.into(),
            label: String::new(),
        }
    }
}
