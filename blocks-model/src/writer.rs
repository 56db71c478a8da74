//! smodel text writers, the parser's inverse.
//!
//! Floats are formatted with `Display`, which picks the shortest
//! representation that parses back to the same bits, so a write/parse
//! round trip reproduces the vertex data exactly. Bounding boxes are
//! recomputed from positions rather than carried through.

use blocks_core::{MeshBuffer, VertexLayout};

use crate::ModelError;

/// Emit single-model (2.0) text. The dialect always carries
/// position+normal+uv, so any other layout is refused.
pub fn to_single_model_text(mesh: &MeshBuffer, name: &str) -> Result<String, ModelError> {
    if mesh.layout() != VertexLayout::FULL {
        return Err(ModelError::UnsupportedLayout);
    }
    let name = sanitize_name(name);

    let mut out = String::new();
    out.push_str(&format!("? 2.0 {} {} 1\n", name, mesh.vertex_count()));
    // `%` counts the `>` sections that follow; the writer emits one.
    out.push_str("% 1\n");
    push_section_line(&mut out, &name, mesh);
    push_floats(&mut out, mesh);
    Ok(out)
}

/// Emit legacy (1.0) text with one `>` section carrying the attribute
/// flags, so any layout round-trips.
pub fn to_legacy_text(mesh: &MeshBuffer, name: &str) -> String {
    let name = sanitize_name(name);

    let mut out = String::new();
    out.push_str(&format!("? 1.0 {} {}\n", name, mesh.vertex_count()));
    push_section_line(&mut out, &name, mesh);
    push_floats(&mut out, mesh);
    out
}

// ---------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------

fn push_section_line(out: &mut String, name: &str, mesh: &MeshBuffer) {
    let layout = mesh.layout();
    let bbox = bounding_box(mesh);
    out.push_str(&format!(
        "> {} {} {} {}",
        name,
        mesh.vertex_count(),
        layout.has_normals as u8,
        layout.has_uvs as u8,
    ));
    for f in bbox {
        out.push_str(&format!(" {f}"));
    }
    out.push('\n');
}

fn push_floats(out: &mut String, mesh: &MeshBuffer) {
    for v in mesh.vertices() {
        let mut first = true;
        for f in v.raw() {
            if !first {
                out.push(' ');
            }
            out.push_str(&format!("{f}"));
            first = false;
        }
        out.push('\n');
    }
}

/// Min/max corner of all positions, zeros for an empty mesh.
fn bounding_box(mesh: &MeshBuffer) -> [f32; 6] {
    let mut min = [0.0f32; 3];
    let mut max = [0.0f32; 3];
    let mut any = false;
    for v in mesh.vertices() {
        let p = v.position();
        if !any {
            min = p;
            max = p;
            any = true;
        } else {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
    }
    [min[0], min[1], min[2], max[0], max[1], max[2]]
}

/// Names travel as single tokens; whitespace inside one would shift
/// every following field.
fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "model".to_string()
    } else {
        cleaned
    }
}

// ===================================================================
// Tests
// ===================================================================
