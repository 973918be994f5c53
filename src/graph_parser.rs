use crate::error::{Error, Result};
use crate::graph_ast::GraphInput;

/// Read a graph description from JSON text.
///
/// Shape errors (missing `id`, a boolean id, a non-array `nodes`) are reported
/// as [`Error::MalformedInput`] with serde's line/column position.
pub fn parse_graph(input: &str) -> Result<GraphInput> {
    if input.trim().is_empty() {
        return Err(Error::malformed("empty input"));
    }
    serde_json::from_str(input).map_err(|e| Error::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_ast::NodeId;
    use pretty_assertions::assert_eq;

    #[test]
    fn english_field_names() {
        let graph = parse_graph(
            r##"{
                "nodes": [
                    {"id": 1, "label": "A", "width": 200, "fillColor": "#FFEEDD"},
                    {"id": "two", "label": "B", "textColor": "#333"}
                ],
                "edges": [{"source": 1, "target": "two", "label": "uses"}]
            }"##,
        )
        .unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].id, NodeId::from("1"));
        assert_eq!(graph.nodes[0].width, Some(200.0));
        assert_eq!(graph.nodes[0].fill_color.as_deref(), Some("#FFEEDD"));
        assert_eq!(graph.nodes[1].text_color.as_deref(), Some("#333"));
        assert_eq!(graph.edges[0].source, NodeId::from("1"));
        assert_eq!(graph.edges[0].label, "uses");
    }

    #[test]
    fn legacy_field_names() {
        let graph = parse_graph(
            r##"{
                "nodi": [
                    {"id": 1, "etichetta": "Radice", "color": "#ABCDEF"},
                    {"id": 2, "etichetta": "Figlio"}
                ],
                "archi": [{"partenza": 1, "arrivo": 2, "etichetta": "ha"}]
            }"##,
        )
        .unwrap();

        assert_eq!(graph.nodes[0].label, "Radice");
        assert_eq!(graph.nodes[0].fill_color.as_deref(), Some("#ABCDEF"));
        assert_eq!(graph.edges[0].target, NodeId::from("2"));
        assert_eq!(graph.edges[0].label, "ha");
    }

    #[test]
    fn edge_label_and_edges_optional() {
        let graph = parse_graph(r#"{"nodes": [{"id": 1, "label": "A"}]}"#).unwrap();
        assert!(graph.edges.is_empty());

        let graph = parse_graph(
            r#"{"nodes": [{"id": 1, "label": "A"}, {"id": 2, "label": "B"}],
                "edges": [{"source": 1, "target": 2}]}"#,
        )
        .unwrap();
        assert_eq!(graph.edges[0].label, "");
    }

    #[test]
    fn missing_label_rejected() {
        let err = parse_graph(r#"{"nodes": [{"id": 1}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `label`"), "got: {err}");
    }

    #[test]
    fn missing_nodes_rejected() {
        let err = parse_graph(r#"{"edges": []}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `nodes`"), "got: {err}");
    }

    #[test]
    fn invalid_json_rejected() {
        let err = parse_graph("{nodes: ").unwrap_err();
        assert!(err.to_string().starts_with("malformed input:"), "got: {err}");
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(parse_graph("  \n").unwrap_err(), Error::malformed("empty input"));
    }
}
