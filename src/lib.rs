pub mod adjacency;
pub mod color;
pub mod display_width;
pub mod drawio_renderer;
pub mod error;
pub mod graph_ast;
pub mod graph_layout;
pub mod graph_parser;
pub mod levels;
pub mod report;

pub use error::{Error, Result};
pub use graph_ast::{EdgeDecl, GraphInput, NodeDecl, NodeId};
pub use graph_layout::LayoutConfig;

/// Convert JSON graph text into a draw.io document using the default layout.
pub fn convert(input: &str) -> Result<String> {
    convert_with_config(input, &LayoutConfig::default())
}

pub fn convert_with_config(input: &str, config: &LayoutConfig) -> Result<String> {
    let graph = graph_parser::parse_graph(input)?;
    convert_graph(&graph, config)
}

pub fn convert_graph(graph: &GraphInput, config: &LayoutConfig) -> Result<String> {
    let layout = graph_layout::compute(graph, config)?;
    tracing::info!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        levels = layout.level_count,
        "layout computed"
    );
    drawio_renderer::render(&layout)
}

/// Level/coordinate table for the same input `convert_with_config` would lay out.
pub fn levels_report(input: &str, config: &LayoutConfig) -> Result<String> {
    let graph = graph_parser::parse_graph(input)?;
    let layout = graph_layout::compute(&graph, config)?;
    Ok(report::render_levels(&layout))
}
