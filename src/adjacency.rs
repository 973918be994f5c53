use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph_ast::{EdgeDecl, NodeDecl, NodeId};

/// Parent and child lists per node, addressed by position in the input node list.
///
/// Built once per conversion and read-only afterwards. Lists keep edge input
/// order, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyIndex {
    ids: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    pub fn build(nodes: &[NodeDecl], edges: &[EdgeDecl]) -> Result<Self> {
        let mut positions: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if positions.insert(node.id.clone(), i).is_some() {
                return Err(Error::malformed_at(
                    format!("duplicate node id `{}`", node.id),
                    node.id.as_str(),
                ));
            }
        }

        // Every endpoint is checked before any list is touched.
        let mut resolved: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
        for (k, edge) in edges.iter().enumerate() {
            let from = lookup(&positions, &edge.source, k)?;
            let to = lookup(&positions, &edge.target, k)?;
            resolved.push((from, to));
        }

        let mut parents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for (from, to) in resolved {
            parents[to].push(from);
            children[from].push(to);
        }

        Ok(AdjacencyIndex {
            ids: nodes.iter().map(|n| n.id.clone()).collect(),
            positions,
            parents,
            children,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id(&self, position: usize) -> &NodeId {
        &self.ids[position]
    }

    pub fn parents(&self, position: usize) -> &[usize] {
        &self.parents[position]
    }

    pub fn children(&self, position: usize) -> &[usize] {
        &self.children[position]
    }

    pub fn parent_ids(&self, id: &NodeId) -> Option<Vec<&NodeId>> {
        let pos = self.position(id)?;
        Some(self.parents[pos].iter().map(|&p| &self.ids[p]).collect())
    }

    pub fn child_ids(&self, id: &NodeId) -> Option<Vec<&NodeId>> {
        let pos = self.position(id)?;
        Some(self.children[pos].iter().map(|&c| &self.ids[c]).collect())
    }
}

fn lookup(positions: &HashMap<NodeId, usize>, id: &NodeId, edge_index: usize) -> Result<usize> {
    positions.get(id).copied().ok_or_else(|| {
        Error::malformed_at(
            format!("edge #{edge_index} references unknown node `{id}`"),
            id.as_str(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nodes(ids: &[&str]) -> Vec<NodeDecl> {
        ids.iter().map(|id| NodeDecl::new(*id, *id)).collect()
    }

    #[test]
    fn parents_and_children_follow_edge_order() {
        let index = AdjacencyIndex::build(
            &nodes(&["a", "b", "c"]),
            &[EdgeDecl::new("a", "c"), EdgeDecl::new("b", "c"), EdgeDecl::new("a", "b")],
        )
        .unwrap();

        let a = NodeId::from("a");
        let c = NodeId::from("c");
        assert_eq!(index.parent_ids(&c).unwrap(), vec![&a, &NodeId::from("b")]);
        assert_eq!(index.child_ids(&a).unwrap(), vec![&c, &NodeId::from("b")]);
        assert!(index.parent_ids(&a).unwrap().is_empty());
    }

    #[test]
    fn isolated_node_has_empty_lists() {
        let index = AdjacencyIndex::build(&nodes(&["solo"]), &[]).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.parents(0).is_empty());
        assert!(index.children(0).is_empty());
    }

    #[test]
    fn unknown_target_rejected() {
        let err = AdjacencyIndex::build(&nodes(&["a"]), &[EdgeDecl::new("a", "ghost")])
            .unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput {
                message: "edge #0 references unknown node `ghost`".to_string(),
                ids: vec!["ghost".to_string()],
            }
        );
    }

    #[test]
    fn unknown_source_rejected() {
        let err = AdjacencyIndex::build(
            &nodes(&["a", "b"]),
            &[EdgeDecl::new("a", "b"), EdgeDecl::new("x", "b")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("edge #1"), "got: {err}");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = AdjacencyIndex::build(&nodes(&["a", "a"]), &[]).unwrap_err();
        assert!(err.to_string().contains("duplicate node id `a`"), "got: {err}");
    }

    #[test]
    fn self_loop_is_its_own_parent() {
        let index = AdjacencyIndex::build(&nodes(&["a"]), &[EdgeDecl::new("a", "a")]).unwrap();
        assert_eq!(index.parents(0), &[0]);
        assert_eq!(index.children(0), &[0]);
    }
}
