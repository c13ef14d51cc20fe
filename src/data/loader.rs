use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{LoadError, SchemaError};
use super::model::{Cell, Dataset, NumericColumn, Song};

// ---------------------------------------------------------------------------
// Column schema
// ---------------------------------------------------------------------------

/// Abbreviated source header → canonical column name. No canonical name is
/// itself an abbreviation, so renaming is idempotent.
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("dur", "duration_ms"),
    ("dnce", "danceability"),
    ("nrgy", "energy"),
    ("pop", "popularity"),
    ("top genre", "genre"),
    ("val", "valence"),
    ("acous", "acousticness"),
    ("spch", "speechiness"),
    ("live", "liveness"),
    ("dB", "loudness"),
];

/// Fields every retained song must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "year",
    "title",
    "artist",
    "genre",
    "danceability",
    "energy",
    "duration_ms",
    "popularity",
];

const DURATION_MIN: &str = "duration_min";

static NULL_CELL: Cell = Cell::Null;

/// A parsed source table before any schema handling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and clean a song table.
///
/// Fails with [`LoadError::DataUnavailable`] when `path` is not a file, a
/// [`SchemaError`] when required columns are missing or a year is not an
/// integer, and [`LoadError::EmptyDataset`] when no complete row remains.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let mut table = read_table(path)?;
    log::debug!("Original columns: {:?}", table.columns);

    apply_aliases(&mut table.columns);
    validate_schema(&table.columns)?;

    let total = table.rows.len();
    let dataset = derive_and_clean(table)?;
    if dataset.is_empty() {
        return Err(LoadError::EmptyDataset);
    }

    log::info!(
        "Loaded {} songs from {} ({} incomplete rows dropped)",
        dataset.len(),
        path.display(),
        total - dataset.len()
    );
    Ok(dataset)
}

/// Parse a file into a [`RawTable`]. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one row per song
/// * `.json`    – `[{ "title": ..., "year": ..., ... }, ...]`
/// * `.parquet` – flat table, one column per attribute
pub fn read_table(path: &Path) -> Result<RawTable, LoadError> {
    if !path.is_file() {
        return Err(LoadError::DataUnavailable {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "csv" => read_csv(path),
        "json" => read_json(path),
        "parquet" | "pq" => read_parquet(path),
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    parsed.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Schema steps
// ---------------------------------------------------------------------------

/// Canonical name for an abbreviated header, if it has one.
pub fn canonical_name(column: &str) -> Option<&'static str> {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == column)
        .map(|(_, canonical)| *canonical)
}

/// Rename abbreviated headers in place. A header whose canonical name is
/// already present is left as is.
pub fn apply_aliases(columns: &mut [String]) {
    for i in 0..columns.len() {
        let Some(canonical) = canonical_name(&columns[i]) else {
            continue;
        };
        if columns.iter().any(|c| c == canonical) {
            log::warn!(
                "Column '{}' not renamed: '{canonical}' already present",
                columns[i]
            );
            continue;
        }
        columns[i] = canonical.to_string();
    }
}

/// Check that every required field is present after aliasing.
pub fn validate_schema(columns: &[String]) -> Result<(), SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|req| !columns.iter().any(|c| c == *req))
        .map(|req| req.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns {
            missing,
            available: columns.to_vec(),
        })
    }
}

/// Coerce years, derive `duration_min`, and drop rows with a null in any
/// required field. Expects a table that passed [`validate_schema`].
pub fn derive_and_clean(table: RawTable) -> Result<Dataset, SchemaError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, name) in table.columns.iter().enumerate() {
        index.entry(name.as_str()).or_insert(i);
    }

    let known = |name: &str| {
        REQUIRED_COLUMNS.contains(&name) || NumericColumn::ALL.iter().any(|c| c.name() == name)
    };
    let extra_columns: Vec<(&str, usize)> = index
        .iter()
        .filter(|(name, _)| !known(**name))
        .map(|(name, i)| (*name, *i))
        .collect();

    let mut songs = Vec::with_capacity(table.rows.len());
    for (row_no, row) in table.rows.iter().enumerate() {
        let get = |name: &str| cell_at(&index, row, name);
        let number = |col: NumericColumn| get(col.name()).as_f64();

        let year = coerce_year(get("year"), row_no + 1)?;
        let duration_ms = get("duration_ms").as_f64().map(|ms| ms.round() as i64);
        let duration_min = duration_ms.map(|ms| ms as f64 / 60_000.0);

        let (
            Some(year),
            Some(title),
            Some(artist),
            Some(genre),
            Some(danceability),
            Some(energy),
            Some(duration_ms),
            Some(duration_min),
            Some(popularity),
        ) = (
            year,
            get("title").as_text(),
            get("artist").as_text(),
            get("genre").as_text(),
            number(NumericColumn::Danceability),
            number(NumericColumn::Energy),
            duration_ms,
            duration_min,
            number(NumericColumn::Popularity),
        )
        else {
            continue;
        };

        let extra: BTreeMap<String, Cell> = extra_columns
            .iter()
            .map(|(name, i)| (name.to_string(), row.get(*i).cloned().unwrap_or(Cell::Null)))
            .collect();

        songs.push(Song {
            year,
            title,
            artist,
            genre,
            danceability,
            energy,
            valence: number(NumericColumn::Valence),
            acousticness: number(NumericColumn::Acousticness),
            speechiness: number(NumericColumn::Speechiness),
            liveness: number(NumericColumn::Liveness),
            loudness: number(NumericColumn::Loudness),
            duration_ms,
            duration_min,
            popularity,
            extra,
        });
    }

    let mut columns: Vec<String> = Vec::with_capacity(index.len() + 1);
    for name in &table.columns {
        if name != DURATION_MIN && !columns.contains(name) {
            columns.push(name.clone());
        }
    }
    columns.push(DURATION_MIN.to_string());

    Ok(Dataset::new(songs, columns))
}

fn cell_at<'a>(index: &HashMap<&str, usize>, row: &'a [Cell], name: &str) -> &'a Cell {
    index
        .get(name)
        .and_then(|&i| row.get(i))
        .unwrap_or(&NULL_CELL)
}

/// A missing year is a null (the row is dropped later); a present value that
/// is not a whole number fails the load.
fn coerce_year(cell: &Cell, row: usize) -> Result<Option<i32>, SchemaError> {
    let invalid = || SchemaError::NonIntegerYear {
        row,
        value: cell.to_string(),
    };
    match cell {
        Cell::Null => Ok(None),
        Cell::Float(v) if v.is_nan() => Ok(None),
        Cell::String(s) if s.trim().is_empty() => Ok(None),
        Cell::Integer(i) => i32::try_from(*i).map(Some).map_err(|_| invalid()),
        other => {
            let v = other.as_f64().ok_or_else(invalid)?;
            if v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
                return Err(invalid());
            }
            Ok(Some(v as i32))
        }
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Header row with column names, one row per song. Invalid UTF-8 (common in
/// Latin-1 exports of this dataset) is replaced rather than rejected.
fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let columns: Vec<String> = reader
        .byte_headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row = (0..columns.len())
            .map(|i| {
                record
                    .get(i)
                    .map(|raw| guess_cell_type(&String::from_utf8_lossy(raw)))
                    .unwrap_or(Cell::Null)
            })
            .collect();
        rows.push(row);
    }

    Ok(RawTable { columns, rows })
}

/// Type a CSV field. A number or bool is kept only when it renders back to
/// the exact source text, so `007`, `1.0`, `NaN` or `Infinity` stay text and
/// survive a load and export unchanged. Numeric text is still read as a
/// number by [`Cell::as_f64`].
fn guess_cell_type(s: &str) -> Cell {
    if s.trim().is_empty() {
        return Cell::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        if i.to_string() == s {
            return Cell::Integer(i);
        }
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() && f.to_string() == s {
            return Cell::Float(f);
        }
    }
    if s == "true" || s == "false" {
        return Cell::Bool(s == "true");
    }
    Cell::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "title": "Hey, Soul Sister", "artist": "Train", "top genre": "neo mellow",
///     "year": 2010, "dnce": 67, "nrgy": 89, "dur": 217000, "pop": 83 },
///   ...
/// ]
/// ```
fn read_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            columns
                .iter()
                .map(|c| obj.get(c).map_or(Cell::Null, json_to_cell))
                .collect()
        })
        .collect();

    Ok(RawTable { columns, rows })
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) => Cell::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Cell::Float(f)
            } else {
                Cell::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Cell::Bool(*b),
        JsonValue::Null => Cell::Null,
        other => Cell::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Flat Parquet table as written by `df.to_parquet()` (Pandas) or
/// `df.write_parquet()` (Polars). Nested columns are not supported.
fn read_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        if batch.num_columns() != columns.len() {
            bail!(
                "record batch has {} columns, schema has {}",
                batch.num_columns(),
                columns.len()
            );
        }
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| extract_cell(col, row))
                    .collect(),
            );
        }
    }

    Ok(RawTable { columns, rows })
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Null;
    }
    let any = col.as_any();
    let cell = match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|a| Cell::String(a.value(row).to_string())),
        DataType::LargeUtf8 => any
            .downcast_ref::<LargeStringArray>()
            .map(|a| Cell::String(a.value(row).to_string())),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| Cell::Integer(i64::from(a.value(row)))),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| Cell::Integer(a.value(row))),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| Cell::Float(f64::from(a.value(row)))),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map(|a| Cell::Float(a.value(row))),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map(|a| Cell::Bool(a.value(row))),
        other => {
            log::debug!("Unsupported parquet column type {other:?}, reading as null");
            None
        }
    };
    cell.unwrap_or(Cell::Null)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn s(v: &str) -> Cell {
        Cell::String(v.to_string())
    }

    const ABBREVIATED: &[&str] = &[
        "title", "artist", "top genre", "year", "dur", "dnce", "nrgy", "pop",
    ];

    fn write_temp(ext: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{ext}"))
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn alias_targets_are_never_aliases() {
        for (_, canonical) in COLUMN_ALIASES {
            assert!(canonical_name(canonical).is_none(), "{canonical} is an alias");
        }
    }

    #[test]
    fn aliasing_renames_known_and_keeps_unknown() {
        let mut cols: Vec<String> = ["dur", "dnce", "top genre", "bpm", "dB", "year"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        apply_aliases(&mut cols);
        assert_eq!(
            cols,
            vec!["duration_ms", "danceability", "genre", "bpm", "loudness", "year"]
        );
    }

    #[test]
    fn aliasing_is_idempotent() {
        let mut once: Vec<String> = COLUMN_ALIASES.iter().map(|(a, _)| a.to_string()).collect();
        once.push("title".into());
        apply_aliases(&mut once);
        let mut twice = once.clone();
        apply_aliases(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn aliasing_does_not_create_duplicates() {
        let mut cols: Vec<String> = vec!["pop".into(), "popularity".into()];
        apply_aliases(&mut cols);
        assert_eq!(cols, vec!["pop", "popularity"]);
    }

    #[test]
    fn abbreviated_row_loads_with_canonical_fields() {
        let mut t = table(
            ABBREVIATED,
            vec![vec![
                s("A"),
                s("X"),
                s("pop"),
                Cell::Integer(2015),
                Cell::Integer(200_000),
                Cell::Integer(70),
                Cell::Integer(65),
                Cell::Integer(80),
            ]],
        );
        apply_aliases(&mut t.columns);
        validate_schema(&t.columns).unwrap();
        let ds = derive_and_clean(t).unwrap();

        assert_eq!(ds.len(), 1);
        let song = &ds.songs[0];
        assert_eq!(song.duration_ms, 200_000);
        assert!((song.duration_min - 200_000.0 / 60_000.0).abs() < 1e-9);
        assert!((song.duration_min - 3.333).abs() < 1e-3);
        assert_eq!(song.danceability, 70.0);
        assert_eq!(song.energy, 65.0);
        assert_eq!(song.popularity, 80.0);
        assert_eq!(song.genre, "pop");
        assert_eq!(ds.columns.last().map(String::as_str), Some("duration_min"));
    }

    #[test]
    fn missing_genre_is_reported_with_available_columns() {
        let cols: Vec<String> = ["title", "artist", "year", "dur", "dnce", "nrgy", "pop"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let mut aliased = cols.clone();
        apply_aliases(&mut aliased);
        let err = validate_schema(&aliased).unwrap_err();
        match err {
            SchemaError::MissingColumns { missing, available } => {
                assert_eq!(missing, vec!["genre".to_string()]);
                assert!(available.contains(&"danceability".to_string()));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let mut t = table(
            ABBREVIATED,
            vec![
                vec![
                    s("A"), s("X"), s("pop"), Cell::Integer(2015),
                    Cell::Integer(200_000), Cell::Integer(70), Cell::Integer(65), Cell::Integer(80),
                ],
                vec![
                    s("B"), s("Y"), Cell::Null, Cell::Integer(2016),
                    Cell::Integer(180_000), Cell::Integer(60), Cell::Integer(55), Cell::Integer(70),
                ],
                vec![
                    s("C"), s("Z"), s("rock"), Cell::Null,
                    Cell::Integer(180_000), Cell::Integer(60), Cell::Integer(55), Cell::Integer(70),
                ],
                vec![
                    s("D"), s("W"), s("rock"), Cell::Integer(2017),
                    s("n/a"), Cell::Integer(60), Cell::Integer(55), Cell::Integer(70),
                ],
            ],
        );
        apply_aliases(&mut t.columns);
        let ds = derive_and_clean(t).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.songs[0].title, "A");
    }

    #[test]
    fn integral_float_year_is_accepted() {
        assert_eq!(coerce_year(&Cell::Float(2015.0), 1), Ok(Some(2015)));
        assert_eq!(coerce_year(&s("2016"), 1), Ok(Some(2016)));
        assert_eq!(coerce_year(&Cell::Null, 1), Ok(None));
    }

    #[test]
    fn fractional_or_malformed_year_fails() {
        assert_eq!(
            coerce_year(&Cell::Float(2015.5), 3),
            Err(SchemaError::NonIntegerYear {
                row: 3,
                value: "2015.5".into()
            })
        );
        assert!(coerce_year(&s("last year"), 1).is_err());
        assert!(coerce_year(&Cell::Bool(true), 1).is_err());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp("xlsx", "irrelevant");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn csv_source_loads_and_keeps_extra_columns() {
        let file = write_temp(
            "csv",
            "title,artist,top genre,year,bpm,nrgy,dnce,dB,live,val,dur,acous,spch,pop\n\
             Hey Soul Sister,Train,neo mellow,2010,97,89,67,-4,8,80,217000,19,4,83\n\
             Love The Way You Lie,Eminem,detroit hip hop,2010,87,93,75,-5,52,64,263000,24,23,82\n\
             Broken,Nobody,pop,,100,50,50,-6,10,10,200000,10,10,50\n",
        );
        let ds = load(file.path()).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.songs[0];
        assert_eq!(first.genre, "neo mellow");
        assert_eq!(first.loudness, Some(-4.0));
        assert_eq!(first.valence, Some(80.0));
        assert_eq!(first.extra.get("bpm"), Some(&Cell::Integer(97)));
        assert!(ds.columns.contains(&"speechiness".to_string()));
        assert_eq!(ds.columns.last().map(String::as_str), Some("duration_min"));
    }

    #[test]
    fn number_like_text_fields_keep_their_source_text() {
        let file = write_temp(
            "csv",
            "title,artist,top genre,year,bpm,dur,dnce,nrgy,pop\n\
             007,Infinity,pop,2015,0120,200000,70,65,80\n\
             NaN,1.0,pop,2015,96,210000,60,55,75\n",
        );
        let ds = load(file.path()).unwrap();
        let names: Vec<(&str, &str)> = ds
            .songs
            .iter()
            .map(|s| (s.title.as_str(), s.artist.as_str()))
            .collect();
        assert_eq!(names, vec![("007", "Infinity"), ("NaN", "1.0")]);

        let first = &ds.songs[0];
        assert_eq!(first.extra.get("bpm"), Some(&Cell::String("0120".into())));
        assert_eq!(first.cell("bpm").as_f64(), Some(120.0));
        assert_eq!(ds.songs[1].extra.get("bpm"), Some(&Cell::Integer(96)));
    }

    #[test]
    fn guessed_cells_render_back_to_source_text() {
        assert_eq!(guess_cell_type("97"), Cell::Integer(97));
        assert_eq!(guess_cell_type("-4.5"), Cell::Float(-4.5));
        assert_eq!(guess_cell_type("  "), Cell::Null);
        assert_eq!(guess_cell_type("NaN"), Cell::String("NaN".into()));
        assert_eq!(guess_cell_type(" 5"), Cell::String(" 5".into()));
        assert_eq!(guess_cell_type("1e3"), Cell::String("1e3".into()));
    }

    #[test]
    fn csv_with_only_incomplete_rows_is_empty() {
        let file = write_temp(
            "csv",
            "title,artist,top genre,year,dur,dnce,nrgy,pop\nA,X,,2015,200000,70,65,80\n",
        );
        assert!(matches!(load(file.path()), Err(LoadError::EmptyDataset)));
    }

    #[test]
    fn csv_with_fractional_year_fails_schema() {
        let file = write_temp(
            "csv",
            "title,artist,top genre,year,dur,dnce,nrgy,pop\nA,X,pop,2015.5,200000,70,65,80\n",
        );
        assert!(matches!(
            load(file.path()),
            Err(LoadError::Schema(SchemaError::NonIntegerYear { row: 1, .. }))
        ));
    }

    #[test]
    fn json_records_load() {
        let file = write_temp(
            "json",
            r#"[
                {"title": "A", "artist": "X", "top genre": "pop", "year": 2015,
                 "dur": 200000, "dnce": 70, "nrgy": 65, "pop": 80},
                {"title": "B", "artist": "Y", "top genre": "rock", "year": 2016.0,
                 "dur": 240000.0, "dnce": 50.5, "nrgy": 60, "pop": null}
            ]"#,
        );
        let ds = load(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.songs[0].year, 2015);
    }

    #[test]
    fn loading_twice_is_identical() {
        let file = write_temp(
            "csv",
            "title,artist,top genre,year,dur,dnce,nrgy,pop\n\
             A,X,pop,2015,200000,70,65,80\nB,Y,rock,2016,190000,60,75,70\n",
        );
        assert_eq!(load(file.path()).unwrap(), load(file.path()).unwrap());
    }
}
