//! smodel parser.
//!
//! The `?` header names a format version and the dialect is chosen from
//! it. Version 2.0 ("single model") declares the full vertex count up
//! front and always carries position+normal+uv. Version 1.0 ("legacy")
//! declares attributes per `>` section and the sections collapse into
//! one flat buffer.
//!
//! Anything the grammar does not allow is reported as a typed
//! [`ModelError`] with enough context to find the offending token;
//! malformed input never panics and never yields a partially filled
//! buffer.

use blocks_core::{MeshBuffer, VertexLayout};

use crate::token::{Token, Tokens};
use crate::ModelError;

const LEGACY_VERSION: f32 = 1.0;
const SINGLE_MODEL_VERSION: f32 = 2.0;

/// Parse an smodel document, choosing the dialect from the `?` header
/// version field.
pub fn parse_smodel(src: &str) -> Result<MeshBuffer, ModelError> {
    let mut tokens = Tokens::new(src);
    let first = tokens.next().ok_or(ModelError::MissingHeader)?;
    if first.text != "?" {
        return Err(ModelError::MissingHeader);
    }

    let version_tok = next_field(&mut tokens, "version")?;
    let version: f32 = version_tok.text.parse().map_err(|_| ModelError::InvalidHeader {
        field: "version",
        token: version_tok.text.to_string(),
    })?;
    log::debug!("export version: {version}");

    if version == SINGLE_MODEL_VERSION {
        parse_single_model(&mut tokens)
    } else if version == LEGACY_VERSION {
        parse_legacy(&mut tokens)
    } else {
        Err(ModelError::UnsupportedVersion(version_tok.text.to_string()))
    }
}

/// Dialect 2.0: `? 2.0 <name> <vertex_count> <submodel_count>`, fixed
/// stride 8, metadata lines skipped, every other token a float.
fn parse_single_model(tokens: &mut Tokens) -> Result<MeshBuffer, ModelError> {
    let layout = VertexLayout::FULL;

    let name = next_field(tokens, "name")?;
    log::debug!("model name: {}", name.text);

    let vertex_count = parse_count(next_field(tokens, "vertex count")?, "vertex count")?;
    log::debug!("total vertices: {vertex_count}");

    let submodel_count = parse_count(next_field(tokens, "submodel count")?, "submodel count")?;
    log::debug!("total submodels: {submodel_count}");

    let expected = vertex_count * layout.stride();
    let mut data = Vec::with_capacity(expected);

    while let Some(token) = tokens.next() {
        match token.text {
            "?" => return Err(ModelError::DuplicateHeader),
            "%" => skip_fields(tokens, 1)?,
            ">" => skip_fields(tokens, 10)?,
            _ => {
                if data.len() == expected {
                    return Err(ModelError::ExcessData { expected });
                }
                data.push(parse_float(token)?);
            }
        }
    }

    if data.len() < expected {
        return Err(ModelError::TruncatedData {
            expected,
            found: data.len(),
        });
    }

    log::debug!("floats read: {} of {expected}", data.len());
    Ok(MeshBuffer::from_raw(layout, data)?)
}

/// Dialect 1.0: `? 1.0 <name> <count>` where the header count is
/// advisory; each `> <name> <vcount> <has_normals> <has_uvs> <bbox x6>`
/// section declares its own vertex count and the attribute flags. All
/// sections share one layout and append into one buffer.
fn parse_legacy(tokens: &mut Tokens) -> Result<MeshBuffer, ModelError> {
    let name = next_field(tokens, "name")?;
    log::debug!("model name: {}", name.text);
    let _advisory = next_field(tokens, "header count")?;

    let mut layout: Option<VertexLayout> = None;
    let mut expected = 0usize;
    let mut data: Vec<f32> = Vec::new();

    while let Some(token) = tokens.next() {
        match token.text {
            "?" => return Err(ModelError::DuplicateHeader),
            "%" => {
                // Exporters only write summary lines in 2.0 files.
                log::warn!("summary line in a legacy file, skipping");
                skip_fields(tokens, 1)?;
            }
            ">" => {
                let section = next_field(tokens, "submodel name")?;
                log::debug!("submodel: {}", section.text);
                let vcount = parse_count(
                    next_field(tokens, "submodel vertex count")?,
                    "submodel vertex count",
                )?;
                let has_normals = parse_flag(next_field(tokens, "has_normals")?, "has_normals")?;
                let has_uvs = parse_flag(next_field(tokens, "has_uvs")?, "has_uvs")?;
                skip_fields(tokens, 6)?; // bounding box

                let section_layout = VertexLayout::new(has_normals, has_uvs);
                match layout {
                    None => layout = Some(section_layout),
                    Some(l) if l != section_layout => return Err(ModelError::MixedAttributes),
                    Some(_) => {}
                }
                expected += vcount * section_layout.stride();
                data.reserve(vcount * section_layout.stride());
            }
            _ => {
                if data.len() == expected {
                    return Err(ModelError::ExcessData { expected });
                }
                data.push(parse_float(token)?);
            }
        }
    }

    if data.len() < expected {
        return Err(ModelError::TruncatedData {
            expected,
            found: data.len(),
        });
    }

    log::debug!("floats read: {} of {expected}", data.len());
    let layout = layout.unwrap_or(VertexLayout::POSITION_ONLY);
    Ok(MeshBuffer::from_raw(layout, data)?)
}

// ---------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------

fn next_field<'a>(tokens: &mut Tokens<'a>, field: &'static str) -> Result<Token<'a>, ModelError> {
    tokens.next().ok_or(ModelError::MissingField { field })
}

fn skip_fields(tokens: &mut Tokens, n: usize) -> Result<(), ModelError> {
    for _ in 0..n {
        let skipped = next_field(tokens, "submodel metadata")?;
        log::debug!("skipped: {}", skipped.text);
    }
    Ok(())
}

fn parse_count(token: Token, field: &'static str) -> Result<usize, ModelError> {
    token.text.parse().map_err(|_| ModelError::InvalidHeader {
        field,
        token: token.text.to_string(),
    })
}

fn parse_flag(token: Token, field: &'static str) -> Result<bool, ModelError> {
    match token.text {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ModelError::InvalidHeader {
            field,
            token: token.text.to_string(),
        }),
    }
}

fn parse_float(token: Token) -> Result<f32, ModelError> {
    token.text.parse().map_err(|_| ModelError::MalformedNumber {
        token: token.text.to_string(),
        offset: token.offset,
    })
}

// ===================================================================
// Tests
// ===================================================================
