use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use super::DataError;

/// One variable output file, kept as text until a typed table claims it.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Variable name (`vInvCost`) → raw table.
pub type VariableSet = BTreeMap<String, VariableTable>;

impl VariableTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DataError::MissingColumn {
                variable: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Cells of `column`, one per row. Short rows yield an empty cell.
    pub fn column(&self, column: &str) -> Result<Vec<&str>, DataError> {
        let idx = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect())
    }
}

/// Key a file name maps to when it is a variable output, `None` otherwise.
///
/// `vInvCost.csv` → `vInvCost`; `sets.csv` → `None` for prefix `v`.
pub fn variable_name(file_name: &str, prefix: char) -> Option<String> {
    if !file_name.starts_with(prefix) {
        return None;
    }
    let stem = file_name.split('.').next().unwrap_or(file_name).trim();
    Some(stem.to_string())
}

/// Load every variable output file found directly under `dir`.
pub fn load_variables(dir: &Path, prefix: char) -> Result<VariableSet, DataError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DataError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut vars = VariableSet::new();
    for entry in entries {
        let entry = entry.map_err(|source| DataError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(name) = variable_name(&file_name, prefix) else {
            debug!(file = %file_name, "skipping non-variable file");
            continue;
        };

        let table = read_table(&name, &path)?;
        debug!(variable = %name, rows = table.len(), "loaded variable");
        vars.insert(name, table);
    }

    info!(dir = %dir.display(), variables = vars.len(), "variable outputs loaded");
    Ok(vars)
}

fn read_table(name: &str, path: &Path) -> Result<VariableTable, DataError> {
    let csv_err = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()
        .map_err(csv_err)?;

    Ok(VariableTable {
        name: name.to_string(),
        headers,
        rows,
    })
}
