//! CLI command implementations

pub mod apply;
pub mod compose;
pub mod identity;
pub mod invert;
pub mod look_at;
pub mod perspective;

use anyhow::{Context, Result, bail};
use hmath::{Mat4, Vec3, Vec4};
use serde_json::json;

/// Global output and unit switches shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub json: bool,
    pub degrees: bool,
}

impl Settings {
    /// Converts a user-supplied angle to radians.
    pub fn angle(&self, value: f32) -> f32 {
        if self.degrees { value.to_radians() } else { value }
    }
}

/// Parse a comma-separated float list like "1,2.5,-3"
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{}'", p, s))
        })
        .collect()
}

/// Parse "x,y,z"
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let lanes = parse_floats(s)?;
    Vec3::try_from(lanes.as_slice()).with_context(|| format!("Expected x,y,z, got '{}'", s))
}

/// Parse "x,y,z" or "x,y,z,w"; a missing w makes it a point.
pub fn parse_point(s: &str) -> Result<Vec4> {
    match parse_floats(s)?.as_slice() {
        &[x, y, z] => Ok(Vec4::new(x, y, z, 1.0)),
        &[x, y, z, w] => Ok(Vec4::new(x, y, z, w)),
        other => bail!("Expected 3 or 4 components, got {} in '{}'", other.len(), s),
    }
}

/// Parse 16 column-major floats
pub fn parse_mat4(s: &str) -> Result<Mat4> {
    let lanes = parse_floats(s)?;
    Mat4::try_from(lanes.as_slice()).context("Matrix needs 16 column-major values")
}

/// Formats a matrix in row layout, one row per line.
pub fn format_mat4(m: &Mat4) -> String {
    (0..4)
        .map(|r| {
            let row = m.row(r);
            format!("{:>12.6} {:>12.6} {:>12.6} {:>12.6}", row.x, row.y, row.z, row.w)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a matrix to stdout.
pub fn print_mat4(m: &Mat4, settings: Settings) -> Result<()> {
    if settings.json {
        let doc = json!({ "columns": m.columns() });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", format_mat4(m));
    }
    Ok(())
}

/// Prints a vector to stdout.
pub fn print_vec4(v: Vec4, settings: Settings) -> Result<()> {
    if settings.json {
        println!("{}", serde_json::to_string(&v.to_array())?);
    } else {
        println!("{:.6} {:.6} {:.6} {:.6}", v.x, v.y, v.z, v.w);
    }
    Ok(())
}
