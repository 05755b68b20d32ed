//! Reading distance matrices from npy files.

use std::path::Path;

use graph_perm::DistanceMatrix;

/// Element types we might read from npy files.
enum NpyType {
    F64,
    F32,
}

impl NpyType {
    /// The types to try, in order.
    const fn variants() -> &'static [Self] {
        &[Self::F64, Self::F32]
    }

    /// Reads the rows of a 2d array with a specific element type.
    fn read_with_type<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Vec<f64>>, String> {
        match self {
            Self::F64 => {
                let arr: ndarray::Array2<f64> = ndarray_npy::read_npy(path).map_err(|e| e.to_string())?;
                Ok(arr.axis_iter(ndarray::Axis(0)).map(|row| row.to_vec()).collect())
            }
            Self::F32 => {
                let arr: ndarray::Array2<f32> = ndarray_npy::read_npy(path).map_err(|e| e.to_string())?;
                Ok(arr
                    .axis_iter(ndarray::Axis(0))
                    .map(|row| row.iter().map(|&d| f64::from(d)).collect())
                    .collect())
            }
        }
    }
}

/// Reads a square distance matrix from a NPY file of `f64` or `f32` values.
pub fn read<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix, String> {
    for ty in NpyType::variants() {
        if let Ok(rows) = ty.read_with_type(&path) {
            ftlog::debug!("Read a {} x {} matrix.", rows.len(), rows.first().map_or(0, Vec::len));
            return DistanceMatrix::new(rows).map_err(|e| e.to_string());
        }
    }
    Err(format!("Failed to read NPY file at path: {}", path.as_ref().display()))
}
