//! Semicolon-separated vertex tables: `name;lat;lon`, one vertex per row.
//!
//! The name column may be left empty after the first vertex of a polygon.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use airspace::polygons::VertexRow;

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Read all rows; every column is read as text.
pub fn read_vertex_rows(path: &Path) -> Result<Vec<VertexRow>> {
    let df = LazyCsvReader::new(path)
        .with_separator(b';')
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "vertex_table_shape");

    let names = string_column(&df, "name")?;
    let lats = string_column(&df, "lat")?;
    let lons = string_column(&df, "lon")?;
    Ok(names
        .into_iter()
        .zip(lats)
        .zip(lons)
        .map(|((name, lat), lon)| VertexRow {
            name,
            lat: lat.unwrap_or_default(),
            lon: lon.unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_rows_with_blank_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zones.csv");
        fs::write(
            &path,
            "name;lat;lon\nEPR1;520000N;0200000E\n;520000N;0210000E\n;530000N;0210000E\n",
        )
        .unwrap();
        let rows = read_vertex_rows(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name.as_deref(), Some("EPR1"));
        assert_eq!(rows[1].name, None);
        assert_eq!(rows[2].lat, "530000N");
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "name;latitude;lon\nA;520000N;0200000E\n").unwrap();
        assert!(read_vertex_rows(&path).is_err());
    }
}
