//! Point files: CSV (`x,y[,z]` per line) and Wavefront OBJ (`v x y z` lines).
//!
//! Loading is lenient: any line without at least two leading finite numeric
//! fields is skipped (headers, comments, faces, normals, `nan`/`inf` values). Saving always writes headerless
//! CSV with two decimals.

use anyhow::{bail, Context, Result};
use hullscan::{Dim, Point, PointSet};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Input file flavor, decided by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Obj,
}

impl Format {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("obj") => Format::Obj,
            _ => Format::Csv,
        }
    }
}

/// Load a point set; the set is 3D iff some parsed z is non-zero.
pub fn load_points(path: &Path) -> Result<PointSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let set = parse_points(&text, Format::of(path));
    tracing::debug!(path = %path.display(), count = set.len(), is_3d = set.is_3d(), "loaded");
    Ok(set)
}

/// Parse file contents in the given format.
pub fn parse_points(text: &str, format: Format) -> PointSet {
    let mut points = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        let fields = match format {
            Format::Csv => leading_floats(line.split(',')),
            Format::Obj => match line.strip_prefix("v ") {
                Some(rest) => leading_floats(rest.split_whitespace()),
                None => continue,
            },
        };
        match fields.as_slice() {
            [x, y] => points.push(Point::new(*x, *y, 0.0)),
            [x, y, z] => points.push(Point::new(*x, *y, *z)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "skipped unparsable lines");
    }
    PointSet::from(points)
}

/// Up to three floats from the front of `fields`, stopping at the first non-number.
/// `nan` and `inf` parse as floats but count as non-numbers here.
fn leading_floats<'a>(fields: impl Iterator<Item = &'a str>) -> Vec<f64> {
    fields
        .take(3)
        .map_while(|f| f.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// Write `set` as headerless CSV (`x,y` or `x,y,z`), two decimals per value.
pub fn save_points(set: &PointSet, path: &Path) -> Result<()> {
    if set.is_empty() {
        bail!("refusing to write an empty point set to {}", path.display());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = set.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = set.iter().map(|p| p.y).collect();
    let mut df = match set.dim() {
        Dim::Two => df!("x" => xs, "y" => ys)?,
        Dim::Three => {
            let zs: Vec<f64> = set.iter().map(|p| p.z).collect();
            df!("x" => xs, "y" => ys, "z" => zs)?
        }
    };
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .with_float_precision(Some(2))
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
