//! CSV loading with an explicit numeric-column schema.

use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::table::{Record, Table};
use crate::value::Value;

/// Which columns the loader coerces to numbers at load time.
///
/// Passed into [`load_csv`] so the loader itself carries no domain knowledge;
/// the CLI installs [`Schema::default`], which covers the columns the tool
/// has always treated as numeric.
#[derive(Debug, Clone)]
pub struct Schema {
    numeric: HashSet<String>,
}

impl Schema {
    pub fn new<I, S>(numeric: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema {
            numeric: numeric.into_iter().map(Into::into).collect(),
        }
    }

    /// A schema with no numeric columns: everything loads as text.
    pub fn text_only() -> Self {
        Schema {
            numeric: HashSet::new(),
        }
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric.contains(column)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new(["price", "rating"])
    }
}

/// Reads a CSV file into a [`Table`], preserving row order.
///
/// The first row is the header. Cells in schema-numeric columns become
/// [`Value::Number`]; everything else stays [`Value::Text`].
///
/// # Errors
///
/// `FileNotFound` if the path does not exist, `MalformedRow` if a row's field
/// count differs from the header's, `NonNumericValue` if a cell in a numeric
/// column does not parse.
pub fn load_csv(path: &Path, schema: &Schema) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    // Field counts are checked by hand so short rows report a row number
    // instead of a csv-internal position.
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    debug!(columns = headers.len(), "Header parsed");

    let mut table = Table::new(headers.clone());

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // 1-based file line; the header is line 1.
        let line = i + 2;

        if row.len() != headers.len() {
            return Err(Error::MalformedRow {
                row: line,
                found: row.len(),
                expected: headers.len(),
            });
        }

        let mut record = Record::with_capacity(headers.len());
        for (name, raw) in headers.iter().zip(row.iter()) {
            let value = if schema.is_numeric(name) {
                let n: f64 = raw.trim().parse().map_err(|_| Error::NonNumericValue {
                    column: name.clone(),
                    value: raw.to_string(),
                })?;
                Value::Number(n)
            } else {
                Value::Text(raw.to_string())
            };
            record.insert(name.clone(), value);
        }
        table.push(record);
    }

    info!(rows = table.len(), path = %path.display(), "CSV loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_coerces_schema_columns() {
        let path = write_temp_csv(
            "csvsift_test_load.csv",
            "name,brand,price,rating\n\
             iphone 15 pro,apple,999,4.9\n\
             redmi note 12,xiaomi,199,4.6\n",
        );

        let table = load_csv(&path, &Schema::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), ["name", "brand", "price", "rating"]);
        assert_eq!(table.rows()[0]["price"], Value::Number(999.0));
        assert_eq!(table.rows()[0]["brand"], Value::Text("apple".to_string()));
        assert_eq!(table.rows()[1]["rating"], Value::Number(4.6));
    }

    #[test]
    fn test_load_text_only_schema_keeps_strings() {
        let path = write_temp_csv(
            "csvsift_test_text_only.csv",
            "name,price\nwidget,42\n",
        );

        let table = load_csv(&path, &Schema::text_only()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(table.rows()[0]["price"], Value::Text("42".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("csvsift_test_does_not_exist.csv");
        let result = load_csv(&path, &Schema::default());
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_load_short_row_is_malformed() {
        let path = write_temp_csv(
            "csvsift_test_short_row.csv",
            "name,price\nwidget,42\norphan\n",
        );

        let result = load_csv(&path, &Schema::default());
        fs::remove_file(&path).unwrap();

        match result {
            Err(Error::MalformedRow {
                row,
                found,
                expected,
            }) => {
                assert_eq!(row, 3);
                assert_eq!(found, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_load_non_numeric_cell_in_numeric_column() {
        let path = write_temp_csv(
            "csvsift_test_bad_number.csv",
            "name,price\nwidget,not-a-price\n",
        );

        let result = load_csv(&path, &Schema::default());
        fs::remove_file(&path).unwrap();

        match result {
            Err(Error::NonNumericValue { column, value }) => {
                assert_eq!(column, "price");
                assert_eq!(value, "not-a-price");
            }
            other => panic!("expected NonNumericValue, got {other:?}"),
        }
    }

    #[test]
    fn test_load_header_only_file_is_empty_table() {
        let path = write_temp_csv("csvsift_test_header_only.csv", "name,price\n");

        let table = load_csv(&path, &Schema::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.columns(), ["name", "price"]);
    }
}
