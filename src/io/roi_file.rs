//! ROI description files
//!
//! A ROI set is stored as TOML: an optional `label_convention` key and an
//! array of `[[roi]]` tables. Masks are given as rows of characters where
//! `1` or `#` marks a pixel inside the region.
//!
//! ```toml
//! label_convention = "dashed"
//!
//! [[roi]]
//! name = "0002-0010-0010"
//! x = 10
//! y = 10
//! width = 4
//! height = 2
//! position = 2
//! mask = ["0110", "1111"]
//! ```

use std::fs;

use log::{debug, info};

use crate::errors::{RoiError, RoiResult};
use crate::roi::{parser_by_name, Mask, Region, RegionKind, RoiManager};

/// Load a ROI manager from a TOML file
pub fn load_roi_file(path: &str) -> RoiResult<RoiManager> {
    info!("Loading ROIs from {}", path);
    let content = fs::read_to_string(path)?;
    parse_roi_set(&content)
}

/// Parse a ROI manager from TOML text
pub fn parse_roi_set(content: &str) -> RoiResult<RoiManager> {
    let toml_value: toml::Value = content.parse()?;

    let mut manager = match toml_value.get("label_convention").and_then(|v| v.as_str()) {
        Some(name) => {
            let parser = parser_by_name(name)
                .ok_or_else(|| RoiError::ConfigError(format!("Unknown label convention: {}", name)))?;
            RoiManager::with_parser(parser)
        }
        None => RoiManager::new(),
    };

    if let Some(entries) = toml_value.get("roi") {
        let entries = entries
            .as_array()
            .ok_or_else(|| RoiError::ConfigError("`roi` must be an array of tables".to_string()))?;

        for (i, entry) in entries.iter().enumerate() {
            let region = parse_region(entry).map_err(|e| match e {
                RoiError::ConfigError(msg) => RoiError::ConfigError(format!("roi #{}: {}", i, msg)),
                other => other,
            })?;
            debug!("Parsed ROI #{}: {:?} at {:?}", i, region.name(), region.bounds);
            manager.add(region);
        }
    }

    info!("Loaded {} ROIs using the {} label convention", manager.count(), manager.convention());
    Ok(manager)
}

fn parse_region(entry: &toml::Value) -> RoiResult<Region> {
    let table = entry
        .as_table()
        .ok_or_else(|| RoiError::ConfigError("entry is not a table".to_string()))?;

    let kind = match table.get("kind").and_then(|v| v.as_str()) {
        None | Some("rect") | Some("area") => RegionKind::Area,
        Some("point") => RegionKind::Point,
        Some(other) => return Err(RoiError::ConfigError(format!("unknown kind `{}`", other))),
    };

    let x = int_field(table, "x")?.unwrap_or(0);
    let y = int_field(table, "y")?.unwrap_or(0);
    let (width, height) = match kind {
        RegionKind::Point => (0, 0),
        RegionKind::Area => (
            int_field(table, "width")?
                .ok_or_else(|| RoiError::ConfigError("missing `width`".to_string()))?,
            int_field(table, "height")?
                .ok_or_else(|| RoiError::ConfigError("missing `height`".to_string()))?,
        ),
    };

    let mut region = Region::new(x, y, width, height);
    region.kind = kind;

    if let Some(name) = table.get("name") {
        let name = name
            .as_str()
            .ok_or_else(|| RoiError::ConfigError("`name` must be a string".to_string()))?;
        region.label = Some(name.to_string());
    }

    if let Some(position) = int_field(table, "position")? {
        if position < 0 {
            return Err(RoiError::ConfigError(format!("negative position {}", position)));
        }
        // position 0 is the conventional "not set"
        if position > 0 {
            region.position = Some(position as usize);
        }
    }

    if let Some(rows) = table.get("mask") {
        region.mask = Some(parse_mask(rows, width, height)?);
    }

    Ok(region)
}

fn int_field(table: &toml::value::Table, key: &str) -> RoiResult<Option<i32>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => {
            let n = value
                .as_integer()
                .ok_or_else(|| RoiError::ConfigError(format!("`{}` must be an integer", key)))?;
            i32::try_from(n)
                .map(Some)
                .map_err(|_| RoiError::ConfigError(format!("`{}` out of range: {}", key, n)))
        }
    }
}

fn parse_mask(rows: &toml::Value, width: i32, height: i32) -> RoiResult<Mask> {
    let rows = rows
        .as_array()
        .ok_or_else(|| RoiError::ConfigError("`mask` must be an array of strings".to_string()))?;

    let mut bits = Vec::new();
    for row in rows {
        let row = row
            .as_str()
            .ok_or_else(|| RoiError::ConfigError("mask rows must be strings".to_string()))?;
        if row.chars().count() != width.max(0) as usize {
            return Err(RoiError::ConfigError(format!(
                "mask row `{}` does not match width {}", row, width
            )));
        }
        bits.extend(row.chars().map(|c| c == '1' || c == '#'));
    }

    Mask::new(width.max(0) as usize, height.max(0) as usize, bits).ok_or_else(|| {
        RoiError::ConfigError(format!("mask has {} rows, expected {}", rows.len(), height))
    })
}

/// Render a ROI manager back to TOML text
pub fn to_toml_string(manager: &RoiManager) -> String {
    let mut out = format!("label_convention = \"{}\"\n", manager.convention());
    for region in manager.regions() {
        out.push_str("\n[[roi]]\n");
        if let Some(name) = region.name() {
            out.push_str(&format!("name = {}\n", toml::Value::String(name.to_string())));
        }
        if region.kind == RegionKind::Point {
            out.push_str("kind = \"point\"\n");
        }
        let r = &region.bounds;
        out.push_str(&format!("x = {}\ny = {}\n", r.x, r.y));
        if region.kind == RegionKind::Area {
            out.push_str(&format!("width = {}\nheight = {}\n", r.width, r.height));
        }
        if let Some(position) = region.position {
            out.push_str(&format!("position = {}\n", position));
        }
        if let Some(mask) = &region.mask {
            let rows: Vec<String> = (0..mask.height())
                .map(|y| {
                    let row: String = (0..mask.width())
                        .map(|x| if mask.contains(x, y) { '1' } else { '0' })
                        .collect();
                    format!("\"{}\"", row)
                })
                .collect();
            out.push_str(&format!("mask = [{}]\n", rows.join(", ")));
        }
    }
    out
}
