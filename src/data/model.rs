use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single value read from the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common spreadsheet / Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::String(s) => write!(f, "{s}"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Null => Ok(()),
        }
    }
}

impl Cell {
    /// Interpret the cell as a number. Numeric text is accepted, anything
    /// else (including `Null`) is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) if v.is_finite() => Some(*v),
            Cell::Integer(i) => Some(*i as f64),
            Cell::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Interpret the cell as text. Numbers are rendered, `Null` is `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::String(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

// ---------------------------------------------------------------------------
// NumericColumn – numeric attributes usable by aggregates
// ---------------------------------------------------------------------------

/// The numeric song attributes that charts and aggregates can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericColumn {
    Danceability,
    Energy,
    Valence,
    Acousticness,
    Speechiness,
    Liveness,
    Loudness,
    DurationMin,
    Popularity,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 9] = [
        NumericColumn::Danceability,
        NumericColumn::Energy,
        NumericColumn::Valence,
        NumericColumn::Acousticness,
        NumericColumn::Speechiness,
        NumericColumn::Liveness,
        NumericColumn::Loudness,
        NumericColumn::DurationMin,
        NumericColumn::Popularity,
    ];

    /// Canonical column name, as it appears after aliasing.
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Danceability => "danceability",
            NumericColumn::Energy => "energy",
            NumericColumn::Valence => "valence",
            NumericColumn::Acousticness => "acousticness",
            NumericColumn::Speechiness => "speechiness",
            NumericColumn::Liveness => "liveness",
            NumericColumn::Loudness => "loudness",
            NumericColumn::DurationMin => "duration_min",
            NumericColumn::Popularity => "popularity",
        }
    }

    /// Human-readable axis / legend label.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::Danceability => "Danceability",
            NumericColumn::Energy => "Energy",
            NumericColumn::Valence => "Valence",
            NumericColumn::Acousticness => "Acousticness",
            NumericColumn::Speechiness => "Speechiness",
            NumericColumn::Liveness => "Liveness",
            NumericColumn::Loudness => "Loudness (dB)",
            NumericColumn::DurationMin => "Duration (minutes)",
            NumericColumn::Popularity => "Popularity Rating",
        }
    }
}

// ---------------------------------------------------------------------------
// Song – one row of the dataset
// ---------------------------------------------------------------------------

/// A single song (one row of the source table) after cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub year: i32,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub danceability: f64,
    pub energy: f64,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
    pub speechiness: Option<f64>,
    pub liveness: Option<f64>,
    pub loudness: Option<f64>,
    pub duration_ms: i64,
    /// Derived once at load time from `duration_ms`.
    pub duration_min: f64,
    pub popularity: f64,
    /// Pass-through columns that are not part of the alias table.
    pub extra: BTreeMap<String, Cell>,
}

impl Song {
    pub fn value(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::Danceability => Some(self.danceability),
            NumericColumn::Energy => Some(self.energy),
            NumericColumn::Valence => self.valence,
            NumericColumn::Acousticness => self.acousticness,
            NumericColumn::Speechiness => self.speechiness,
            NumericColumn::Liveness => self.liveness,
            NumericColumn::Loudness => self.loudness,
            NumericColumn::DurationMin => Some(self.duration_min),
            NumericColumn::Popularity => Some(self.popularity),
        }
    }

    /// Look up any column by its canonical name, for export and tabular
    /// display. Unknown names resolve to `Cell::Null`.
    pub fn cell(&self, column: &str) -> Cell {
        let opt = |v: Option<f64>| v.map_or(Cell::Null, Cell::Float);
        match column {
            "year" => Cell::Integer(i64::from(self.year)),
            "title" => Cell::String(self.title.clone()),
            "artist" => Cell::String(self.artist.clone()),
            "genre" => Cell::String(self.genre.clone()),
            "duration_ms" => Cell::Integer(self.duration_ms),
            name => match NumericColumn::ALL.iter().find(|c| c.name() == name) {
                Some(col) => opt(self.value(*col)),
                None => self.extra.get(name).cloned().unwrap_or(Cell::Null),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full cleaned dataset. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// All songs, in source order.
    pub songs: Vec<Song>,
    /// Column names after aliasing, in source order, with `duration_min`
    /// appended.
    pub columns: Vec<String>,
}

impl Dataset {
    pub fn new(songs: Vec<Song>, columns: Vec<String>) -> Self {
        Dataset { songs, columns }
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Smallest and largest release year, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.songs.iter().map(|s| s.year).min()?;
        let max = self.songs.iter().map(|s| s.year).max()?;
        Some((min, max))
    }

    /// Sorted set of distinct genre labels.
    pub fn genres(&self) -> BTreeSet<String> {
        self.songs.iter().map(|s| s.genre.clone()).collect()
    }
}
