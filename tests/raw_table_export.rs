mod common;

use covmort::aggregate::raw_table;
use covmort::io::table_export::write_raw_table_csv;
use covmort::{apply, FilterOptions};

#[test]
fn raw_table_export_snapshot() {
    let ds = common::us_fr_sample();
    let view = apply(&ds, &FilterOptions::from_dataset(&ds).default_spec());
    let rows = raw_table(&view);

    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_raw_table_csv(tmp.path().join("exports"), "filtered", &rows).expect("write export");
    assert!(path.ends_with("exports/filtered.csv"));

    let s = std::fs::read_to_string(path).expect("read export");
    insta::assert_snapshot!(s);
}

#[test]
fn unsorted_rows_are_rejected() {
    let ds = common::us_fr_sample();
    let view = apply(&ds, &FilterOptions::from_dataset(&ds).default_spec());
    let mut rows = raw_table(&view);
    rows.reverse();

    let tmp = tempfile::tempdir().expect("tempdir");
    assert!(write_raw_table_csv(tmp.path(), "filtered", &rows).is_err());
    // Nothing is created for rejected input.
    assert!(!tmp.path().join("filtered.csv").exists());
}
