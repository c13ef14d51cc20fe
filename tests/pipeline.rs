use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use hitscope::data::aggregate::{genre_counts, yearly_means};
use hitscope::data::cache::{DatasetCache, Source};
use hitscope::data::error::{LoadError, SchemaError};
use hitscope::data::export::{export_file_name, save_csv, to_csv_bytes};
use hitscope::data::filter::{FilterSpec, filter};
use hitscope::data::loader::load;
use hitscope::data::model::NumericColumn;
use hitscope::data::summary::{DashboardSummary, Thresholds};

const SONGS: &str = "\
title,artist,top genre,year,bpm,nrgy,dnce,dB,live,val,dur,acous,spch,pop
Hey Soul Sister,Train,neo mellow,2010,97,89,67,-4,8,80,217000,19,4,83
Love The Way You Lie,Eminem,detroit hip hop,2010,87,93,75,-5,52,64,263000,24,23,82
TiK ToK,Kesha,dance pop,2010,120,84,76,-3,29,71,200000,10,14,80
Bad Romance,Lady Gaga,dance pop,2010,119,92,70,-4,8,71,295000,0,4,79
Just the Way You Are,Bruno Mars,pop,2010,109,84,64,-5,9,43,221000,2,4,78
Roar,Katy Perry,dance pop,2013,180,77,55,-5,35,46,223000,0,8,75
Shape of You,Ed Sheeran,pop,2017,96,65,83,-3,9,93,234000,58,8,87
Memories,Maroon 5,pop,2019,91,32,76,-7,8,57,189000,84,5,
";

fn songs_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(SONGS.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_filter_aggregate_export() {
    let file = songs_file();
    let mut cache = DatasetCache::new();
    let dataset = cache
        .get_or_load(&Source::File(file.path().to_path_buf()))
        .unwrap();

    // Memories has no popularity and is dropped.
    assert_eq!(dataset.len(), 7);
    for song in &dataset.songs {
        assert!((song.duration_min - song.duration_ms as f64 / 60_000.0).abs() < 1e-9);
    }

    let spec = FilterSpec::new(2010, 2013, ["dance pop".to_string(), "pop".to_string()]).unwrap();
    let view = filter(&dataset, &spec);
    assert_eq!(view.len(), 4);

    let counts = genre_counts(&view);
    assert_eq!(counts.total(), view.len());
    assert_eq!(counts.ranked()[0], ("dance pop".to_string(), 3));

    let means = yearly_means(&view, &[NumericColumn::Danceability]);
    let years: Vec<i32> = means.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2010, 2013]);
    assert_eq!(means[0].means[0], Some((76.0 + 70.0 + 64.0) / 3.0));

    let summary = DashboardSummary::compute(&view, &spec, &Thresholds::default());
    assert!(summary.insight.is_some());
    assert_eq!(summary.year_span, 4);

    let name = export_file_name("spotify_filtered", &spec);
    assert_eq!(name, "spotify_filtered_2010_2013.csv");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(&name);
    save_csv(&view, &out).unwrap();

    // The export reloads to the same songs.
    let reloaded = load(&out).unwrap();
    assert_eq!(reloaded.len(), view.len());
    for (a, b) in reloaded.songs.iter().zip(view.iter()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.genre, b.genre);
        assert_eq!(a.duration_ms, b.duration_ms);
        assert_eq!(a.extra.get("bpm"), b.extra.get("bpm"));
    }
}

#[test]
fn filter_never_reloads_the_dataset() {
    let file = songs_file();
    let source = Source::File(file.path().to_path_buf());
    let mut cache = DatasetCache::new();
    let first = cache.get_or_load(&source).unwrap();

    for year_max in 2010..=2019 {
        let spec = FilterSpec::new(2010, year_max, first.genres()).unwrap();
        let view = filter(&first, &spec);
        assert!(view.iter().all(|s| s.year <= year_max));
        let again = cache.get_or_load(&source).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }
}

#[test]
fn empty_genre_selection_exports_header_only() {
    let file = songs_file();
    let dataset = Arc::new(load(file.path()).unwrap());
    let spec = FilterSpec::new(2010, 2019, BTreeSet::new()).unwrap();
    let view = filter(&dataset, &spec);
    assert!(view.is_empty());
    let text = String::from_utf8(to_csv_bytes(&view).unwrap()).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("title,artist,genre,year,bpm"));
}

#[test]
fn source_without_genre_column_is_a_schema_error() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "title,artist,year,dur,dnce,nrgy,pop").unwrap();
    writeln!(file, "A,X,2015,200000,70,65,80").unwrap();
    file.flush().unwrap();

    match load(file.path()) {
        Err(LoadError::Schema(SchemaError::MissingColumns { missing, available })) => {
            assert_eq!(missing, vec!["genre".to_string()]);
            assert!(available.contains(&"duration_ms".to_string()));
        }
        other => panic!("expected missing genre, got {other:?}"),
    }
}
