//! Reading sample metadata from delimited text files.

use std::path::Path;

use graph_perm::{SampleData, SampleTable};

/// Reads a table whose header row names the columns and whose first column
/// holds the sample identifiers.
///
/// Fields may be quoted, surrounding whitespace is trimmed and blank lines are
/// skipped. Every row must have as many fields as the header.
pub fn read<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<SampleData, String> {
    let reader = builder(delimiter).from_path(path).map_err(|e| e.to_string())?;
    from_reader(reader)
}

/// The reader settings shared by files and in-memory contents.
fn builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(delimiter).has_headers(true).trim(csv::Trim::All);
    builder
}

/// Collects the columns of a metadata table.
fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<SampleData, String> {
    let header = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    if header.is_empty() {
        return Err("The metadata file is empty.".to_string());
    }

    let mut names = Vec::new();
    let mut columns = vec![Vec::new(); header.len() - 1];
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        let mut fields = record.iter();
        let name = fields
            .next()
            .ok_or_else(|| format!("Row {} of the metadata has no sample identifier.", names.len() + 1))?;
        names.push(name.to_string());
        for (column, value) in columns.iter_mut().zip(fields) {
            column.push(value.to_string());
        }
    }

    let mut data = SampleData::new(names).map_err(|e| e.to_string())?;
    for (name, values) in header.iter().skip(1).zip(columns) {
        data.add_column(name, values).map_err(|e| e.to_string())?;
    }
    ftlog::debug!("Read metadata for {} samples.", data.cardinality());

    Ok(data)
}
