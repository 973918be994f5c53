use crate::adjacency::AdjacencyIndex;
use crate::error::{Error, Result};
use crate::graph_ast::NodeId;

/// Resolved hierarchy level per node, addressed by input position.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelAssignment {
    levels: Vec<usize>,
}

impl LevelAssignment {
    pub fn level(&self, position: usize) -> usize {
        self.levels[position]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.levels
    }

    pub fn max_level(&self) -> Option<usize> {
        self.levels.iter().copied().max()
    }
}

/// Assign every node its depth: roots sit at level 0, every other node one
/// below its deepest parent.
///
/// Runs an in-place fixed point over the nodes in input order, so parents may
/// appear anywhere in the input. Each productive pass resolves at least one
/// node, which bounds the loop at `len + 1` passes; nodes still unresolved
/// after that sit on or below a cycle and are reported as
/// [`Error::CyclicGraph`].
pub fn assign_levels(index: &AdjacencyIndex) -> Result<LevelAssignment> {
    let n = index.len();
    let mut levels: Vec<Option<usize>> = (0..n)
        .map(|i| index.parents(i).is_empty().then_some(0))
        .collect();

    let mut passes = 0;
    while passes <= n {
        passes += 1;
        let mut changed = false;

        for i in 0..n {
            if levels[i].is_some() {
                continue;
            }
            let deepest = index
                .parents(i)
                .iter()
                .map(|&p| levels[p])
                .try_fold(0usize, |acc, l| l.map(|l| acc.max(l)));
            if let Some(deepest) = deepest {
                levels[i] = Some(deepest + 1);
                changed = true;
            }
        }

        tracing::debug!(pass = passes, changed, "level assignment pass");
        if !changed {
            break;
        }
    }

    let unresolved: Vec<NodeId> = levels
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_none())
        .map(|(i, _)| index.id(i).clone())
        .collect();
    if !unresolved.is_empty() {
        return Err(Error::CyclicGraph { ids: unresolved });
    }

    Ok(LevelAssignment {
        levels: levels.into_iter().flatten().collect(),
    })
}
