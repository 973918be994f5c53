use std::collections::BTreeMap;

use crate::adjacency::AdjacencyIndex;
use crate::color::parse_color;
use crate::error::{Error, Result};
use crate::graph_ast::{GraphInput, NodeDecl, NodeId};
use crate::levels::{assign_levels, LevelAssignment};

pub const DEFAULT_SPACING_X: f64 = 300.0;
pub const DEFAULT_SPACING_Y: f64 = 250.0;
pub const DEFAULT_SUB_ROW_SPACING_Y: f64 = 150.0;
pub const DEFAULT_MAX_NODES_PER_ROW: usize = 5;

const DEFAULT_NODE_WIDTH: f64 = 140.0;
const DEFAULT_NODE_HEIGHT: f64 = 60.0;
const DEFAULT_FILL_COLOR: &str = "#FFFFFF";
const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Edge render ids count up from here, clear of any plausible node id range.
pub const EDGE_ID_BASE: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub sub_row_spacing_y: f64,
    pub max_nodes_per_row: usize,
    pub default_width: f64,
    pub default_height: f64,
    pub default_fill_color: String,
    pub default_text_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            spacing_x: DEFAULT_SPACING_X,
            spacing_y: DEFAULT_SPACING_Y,
            sub_row_spacing_y: DEFAULT_SUB_ROW_SPACING_Y,
            max_nodes_per_row: DEFAULT_MAX_NODES_PER_ROW,
            default_width: DEFAULT_NODE_WIDTH,
            default_height: DEFAULT_NODE_HEIGHT,
            default_fill_color: DEFAULT_FILL_COLOR.to_string(),
            default_text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes_per_row == 0 {
            return Err(Error::InvalidConfig(
                "max nodes per row must be at least 1".to_string(),
            ));
        }
        let spacings = [
            ("horizontal spacing", self.spacing_x),
            ("vertical spacing", self.spacing_y),
            ("sub-row spacing", self.sub_row_spacing_y),
        ];
        for (name, value) in spacings {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [("width", self.default_width), ("height", self.default_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "default node {name} must be positive, got {value}"
                )));
            }
        }
        for color in [&self.default_fill_color, &self.default_text_color] {
            parse_color(color).map_err(Error::InvalidConfig)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphLayout {
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<EdgeLayout>,
    pub level_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub id: NodeId,
    pub render_id: String,
    pub label: String,
    pub level: usize,
    pub sub_row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLayout {
    pub render_id: String,
    pub source_render_id: String,
    pub target_render_id: String,
    pub label: String,
}

/// Node positions per level, each list in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelGroups {
    groups: BTreeMap<usize, Vec<usize>>,
}

impl LevelGroups {
    pub fn from_assignment(levels: &LevelAssignment) -> Self {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (position, &level) in levels.as_slice().iter().enumerate() {
            groups.entry(level).or_default().push(position);
        }
        LevelGroups { groups }
    }

    pub fn get(&self, level: usize) -> &[usize] {
        self.groups.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.groups.iter().map(|(&level, members)| (level, members.as_slice()))
    }
}

/// Grid slot of one node within its level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub sub_row: usize,
    pub x: f64,
    pub y: f64,
}

/// Place the `index`-th node of a level holding `level_size` nodes.
///
/// Rows wrap after `max_nodes_per_row`; each sub-row is centred on x = 0 using
/// its own occupancy, so a partial last row stays centred too.
pub fn place(index: usize, level_size: usize, level: usize, config: &LayoutConfig) -> Placement {
    let per_row = config.max_nodes_per_row;
    let sub_row = index / per_row;
    let index_in_row = index % per_row;
    let row_size = per_row.min(level_size - sub_row * per_row);

    #[allow(clippy::cast_precision_loss)]
    let (index_in_row, row_size, level, sub_row_f) =
        (index_in_row as f64, row_size as f64, level as f64, sub_row as f64);

    let x = index_in_row * config.spacing_x - ((row_size - 1.0) * config.spacing_x) / 2.0;
    let y = level * config.spacing_y + sub_row_f * config.sub_row_spacing_y;
    Placement { sub_row, x, y }
}

pub fn node_render_id(id: &NodeId) -> String {
    format!("node_{id}")
}

pub fn compute(input: &GraphInput, config: &LayoutConfig) -> Result<GraphLayout> {
    config.validate()?;

    let index = AdjacencyIndex::build(&input.nodes, &input.edges)?;
    let levels = assign_levels(&index)?;
    let groups = LevelGroups::from_assignment(&levels);

    let origin = Placement {
        sub_row: 0,
        x: 0.0,
        y: 0.0,
    };
    let mut slots = vec![origin; input.nodes.len()];
    for (level, members) in groups.iter() {
        tracing::debug!(level, nodes = members.len(), "placing level");
        for (i, &position) in members.iter().enumerate() {
            slots[position] = place(i, members.len(), level, config);
        }
    }

    let mut nodes = Vec::with_capacity(input.nodes.len());
    for ((position, decl), slot) in input.nodes.iter().enumerate().zip(slots) {
        nodes.push(resolve_node(decl, levels.level(position), slot, config)?);
    }

    let edges = input
        .edges
        .iter()
        .enumerate()
        .map(|(k, e)| EdgeLayout {
            render_id: format!("edge_{}", EDGE_ID_BASE + k),
            source_render_id: node_render_id(&e.source),
            target_render_id: node_render_id(&e.target),
            label: e.label.clone(),
        })
        .collect();

    Ok(GraphLayout {
        nodes,
        edges,
        level_count: groups.len(),
    })
}

// Merge caller-supplied attributes over the configured defaults. Zero or
// negative sizes count as absent.
fn resolve_node(
    decl: &NodeDecl,
    level: usize,
    slot: Placement,
    config: &LayoutConfig,
) -> Result<NodeLayout> {
    let size = |v: Option<f64>, fallback: f64| {
        v.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
    };
    let color = |v: &Option<String>, fallback: &str| -> Result<String> {
        match v {
            Some(c) => parse_color(c).map(str::to_string).map_err(|msg| {
                Error::malformed_at(format!("node `{}`: {msg}", decl.id), decl.id.as_str())
            }),
            None => Ok(fallback.to_string()),
        }
    };

    Ok(NodeLayout {
        id: decl.id.clone(),
        render_id: node_render_id(&decl.id),
        label: decl.label.clone(),
        level,
        sub_row: slot.sub_row,
        x: slot.x,
        y: slot.y,
        width: size(decl.width, config.default_width),
        height: size(decl.height, config.default_height),
        fill_color: color(&decl.fill_color, &config.default_fill_color)?,
        text_color: color(&decl.text_color, &config.default_text_color)?,
    })
}
