use crate::error::{Error, Result};
use crate::graph_layout::{EdgeLayout, GraphLayout, NodeLayout};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxfile host="app.diagrams.net">
  <diagram name="Concept Map">
    <mxGraphModel dx="1000" dy="1000" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="827" pageHeight="1169" math="0" shadow="0">
      <root>
        <mxCell id="0" />
        <mxCell id="1" parent="0" />"#;

const FOOTER: &str = "
      </root>
    </mxGraphModel>
  </diagram>
</mxfile>";

const STROKE_COLOR: &str = "#000000";

/// Emit the layout as a draw.io `mxfile` document.
///
/// Vertices come first in input order, then connectors. Nothing is returned
/// unless every label escapes cleanly.
pub fn render(layout: &GraphLayout) -> Result<String> {
    let mut out = String::from(HEADER);
    for node in &layout.nodes {
        render_node(&mut out, node)?;
    }
    for edge in &layout.edges {
        render_edge(&mut out, edge)?;
    }
    out.push_str(FOOTER);
    Ok(out)
}

fn render_node(out: &mut String, node: &NodeLayout) -> Result<()> {
    let id = attr(&node.render_id, &node.render_id)?;
    let value = attr(&node.label, &node.render_id)?;
    out.push_str(&format!(
        "\n        <mxCell id=\"{id}\" value=\"{value}\" style=\"shape=rectangle;fillColor={fill};strokeColor={STROKE_COLOR};fontColor={text};whiteSpace=wrap;\" vertex=\"1\" parent=\"1\">",
        fill = node.fill_color,
        text = node.text_color,
    ));
    out.push_str(&format!(
        "\n          <mxGeometry x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" as=\"geometry\" />",
        fmt_num(node.x),
        fmt_num(node.y),
        fmt_num(node.width),
        fmt_num(node.height),
    ));
    out.push_str("\n        </mxCell>");
    Ok(())
}

fn render_edge(out: &mut String, edge: &EdgeLayout) -> Result<()> {
    let source = attr(&edge.source_render_id, &edge.render_id)?;
    let target = attr(&edge.target_render_id, &edge.render_id)?;
    let value = attr(&edge.label, &edge.render_id)?;
    out.push_str(&format!(
        "\n        <mxCell id=\"{id}\" edge=\"1\" parent=\"1\" source=\"{source}\" target=\"{target}\" value=\"{value}\" style=\"endArrow=block;strokeColor={STROKE_COLOR};fontColor=#000000;\">",
        id = edge.render_id,
    ));
    out.push_str("\n          <mxGeometry relative=\"1\" as=\"geometry\" />");
    out.push_str("\n        </mxCell>");
    Ok(())
}

fn attr(text: &str, owner: &str) -> Result<String> {
    escape_xml(text).map_err(|reason| Error::Serialization {
        id: owner.to_string(),
        reason,
    })
}

/// Escape text for a double-quoted XML attribute.
///
/// Line breaks and tabs become character references so they survive
/// attribute-value normalization; other characters XML 1.0 forbids are an
/// error.
pub fn escape_xml(text: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c if c < ' ' || c == '\u{FFFE}' || c == '\u{FFFF}' => {
                return Err(format!("disallowed character U+{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Integral values print without a fraction; negative zero prints as `0`.
pub fn fmt_num(v: f64) -> String {
    format!("{}", v + 0.0)
}
