use crate::display_width::{display_width, pad_right, single_line};
use crate::drawio_renderer::fmt_num;
use crate::graph_layout::GraphLayout;

const COLUMN_GAP: &str = "  ";

/// Render the computed levels and coordinates as an aligned text table.
pub fn render_levels(layout: &GraphLayout) -> String {
    let header = ["ID", "LABEL", "LEVEL", "X", "Y"].map(str::to_string);
    let mut rows = vec![header];
    for node in &layout.nodes {
        rows.push([
            node.id.to_string(),
            single_line(&node.label),
            node.level.to_string(),
            fmt_num(node.x),
            fmt_num(node.y),
        ]);
    }

    let mut widths = [0usize; 5];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| pad_right(cell, w))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_ast::{EdgeDecl, GraphInput, NodeDecl};
    use crate::graph_layout::{compute, LayoutConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn table_aligns_columns() {
        let input = GraphInput {
            nodes: vec![
                NodeDecl::new("1", "Root"),
                NodeDecl::new("2", "B"),
                NodeDecl::new("3", "C"),
            ],
            edges: vec![EdgeDecl::new("1", "2"), EdgeDecl::new("1", "3")],
        };
        let layout = compute(&input, &LayoutConfig::default()).unwrap();
        let expected = "\
ID  LABEL  LEVEL  X     Y
1   Root   0      0     0
2   B      1      -150  250
3   C      1      150   250";
        assert_eq!(render_levels(&layout), expected);
    }

    #[test]
    fn wide_labels_keep_alignment() {
        let input = GraphInput {
            nodes: vec![NodeDecl::new("a", "日本"), NodeDecl::new("b", "x")],
            edges: vec![],
        };
        let layout = compute(&input, &LayoutConfig::default()).unwrap();
        let table = render_levels(&layout);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a   日本   0      -150  0");
        assert_eq!(lines[2], "b   x      0      150   0");
    }
}
