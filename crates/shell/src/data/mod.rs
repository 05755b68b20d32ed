//! Data formats supported in the CLI.

use std::path::Path;

use graph_perm::{DistanceMatrix, SampleData};

mod metadata;
mod npy;

/// Reads the distance matrix from the `.npy` file at the given path.
pub fn read_distances<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix, String> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some("npy") => npy::read(path),
        Some(ext) => Err(format!(
            "Unknown distance matrix format {ext} for path: {}",
            path.as_ref().display()
        )),
        None => Err(format!(
            "Could not determine the distance matrix format without extension for path: {}",
            path.as_ref().display()
        )),
    }
}

/// Reads the sample metadata from the delimited text file at the given path.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<SampleData, String> {
    match Delimiter::from(&path) {
        Delimiter::Comma => metadata::read(path, b','),
        Delimiter::Tab => metadata::read(path, b'\t'),
    }
}

/// Delimiters supported for metadata files.
pub enum Delimiter {
    /// Comma-separated values.
    Comma,
    /// Tab-separated values.
    Tab,
}

impl<P: AsRef<Path>> From<P> for Delimiter {
    fn from(path: P) -> Self {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("tsv" | "txt") => Self::Tab,
            _ => Self::Comma,
        }
    }
}

#[cfg(test)]
mod tests {
    use graph_perm::SampleTable;
    use ndarray::array;

    #[test]
    fn reads_f32_and_f64_matrices() -> Result<(), String> {
        let tmp_dir = tempdir::TempDir::new("npy").map_err(|e| e.to_string())?;

        let f64_path = tmp_dir.path().join("f64.npy");
        let f64_arr = array![[0.0_f64, 1.5, 2.0], [1.5, 0.0, 0.5], [2.0, 0.5, 0.0]];
        ndarray_npy::write_npy(&f64_path, &f64_arr).map_err(|e| e.to_string())?;
        let matrix = super::read_distances(&f64_path)?;
        assert_eq!(matrix.cardinality(), 3);
        assert_eq!(matrix.row(1), &[1.5, 0.0, 0.5]);

        let f32_path = tmp_dir.path().join("f32.npy");
        let f32_arr = array![[0.0_f32, 0.25], [0.25, 0.0]];
        ndarray_npy::write_npy(&f32_path, &f32_arr).map_err(|e| e.to_string())?;
        let matrix = super::read_distances(&f32_path)?;
        assert_eq!(matrix.get(0, 1), 0.25);

        let bad_path = tmp_dir.path().join("asymmetric.npy");
        let bad_arr = array![[0.0_f64, 1.0], [2.0, 0.0]];
        ndarray_npy::write_npy(&bad_path, &bad_arr).map_err(|e| e.to_string())?;
        assert!(super::read_distances(&bad_path).is_err());

        assert!(super::read_distances(tmp_dir.path().join("matrix.csv")).is_err());

        Ok(())
    }

    #[test]
    fn reads_tsv_metadata() -> Result<(), String> {
        let tmp_dir = tempdir::TempDir::new("metadata").map_err(|e| e.to_string())?;
        let path = tmp_dir.path().join("samples.tsv");
        std::fs::write(&path, "id\ttype\nx\tA\ny\tB\n").map_err(|e| e.to_string())?;

        let table = super::read_metadata(&path)?;
        assert_eq!(table.sample_names(), &["x", "y"]);
        assert_eq!(table.require_column("type").map_err(|e| e.to_string())?, &["A", "B"]);

        Ok(())
    }
}
