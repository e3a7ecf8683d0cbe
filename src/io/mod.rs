use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::path::Path as FsPath;

use crate::domain::Path;

/// Parse a track from JSON.
///
/// # Accepted shapes
/// - an array of `[lng, lat]` pairs or of point objects (`lat`, `lng` and
///   any extra attributes)
/// - a GeoJSON `LineString` geometry
/// - a GeoJSON `Feature` wrapping a `LineString`; its `properties` are
///   ignored
pub fn parse_path(value: &Value) -> Result<Path> {
    if value.is_array() {
        return Ok(Path::from_json(value)?);
    }

    let kind = value.get("type").and_then(Value::as_str);
    match kind {
        Some("LineString") => {
            let coords = value
                .get("coordinates")
                .context("LineString has no coordinates")?;
            Ok(Path::from_json(&strip_altitude(coords))?)
        }
        Some("Feature") => {
            let geometry = value.get("geometry").context("Feature has no geometry")?;
            parse_path(geometry)
        }
        Some(other) => bail!("Unsupported GeoJSON type: {}", other),
        None => bail!("Expected a JSON array of points or a GeoJSON LineString"),
    }
}

/// GeoJSON positions may carry a third altitude value; keep `[lng, lat]`
fn strip_altitude(coords: &Value) -> Value {
    match coords.as_array() {
        Some(positions) => Value::Array(
            positions
                .iter()
                .map(|p| match p.as_array() {
                    Some(pos) if pos.len() > 2 => Value::Array(pos[..2].to_vec()),
                    _ => p.clone(),
                })
                .collect(),
        ),
        None => coords.clone(),
    }
}

pub fn load_path(file: &FsPath) -> Result<Path> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read input file: {:?}", file))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {:?}", file))?;
    parse_path(&value).with_context(|| format!("Invalid path in {:?}", file))
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

pub fn save_path(file: &FsPath, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(path.points(), pretty)?;
    std::fs::write(file, json).with_context(|| format!("Failed to write output file: {:?}", file))
}
