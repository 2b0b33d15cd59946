mod common;

use gander::{DataFrame, Error, Series};

use common::{
    larger_sample_data, sample_data_with_categorical_data, sample_data_with_headers,
    sample_data_with_mixed_headers, sample_data_without_headers,
};

#[test]
fn test_dataframe_creation() {
    let df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();

    assert_eq!(df.column_count(), 5);
    assert_eq!(df.row_count(), 4);
    assert_eq!(df.column_names(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(df.columns()[0].values(), &[1.0, 3.0, 7.0, 4.0]);
}

#[test]
fn test_synthetic_headers() {
    let df = DataFrame::from_rows(&sample_data_without_headers()).unwrap();

    assert_eq!(df.row_count(), 4);
    assert_eq!(
        df.column_names(),
        vec!["Column 1", "Column 2", "Column 3", "Column 4", "Column 5"]
    );
    assert_eq!(df.row(0), Some(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
}

#[test]
fn test_mixed_first_row_is_data() {
    let df = DataFrame::from_rows(&sample_data_with_mixed_headers()).unwrap();

    assert_eq!(df.row_count(), 5);
    assert_eq!(df.column_names()[0], "Column 1");
    // "c" and "e" in the first row make those columns categorical
    assert!(!df.columns()[0].is_categorical());
    assert!(df.columns()[2].is_categorical());
    assert!(df.columns()[4].is_categorical());
    assert_eq!(df.columns()[2].label_at(0), Some("c"));
}

#[test]
fn test_ragged_input() {
    let rows = vec![vec!["a", "b"], vec!["1", "2"], vec!["3"]];
    let err = DataFrame::from_rows(&rows).unwrap_err();
    assert!(matches!(err, Error::RaggedInput { row: 2, expected: 2, found: 1 }));
}

#[test]
fn test_categorical_column() {
    let df = DataFrame::from_rows(&sample_data_with_categorical_data()).unwrap();
    let series = &df.columns()[3];

    assert!(series.is_categorical());
    assert_eq!(series.categories().unwrap().len(), 2);
    assert_eq!(series.values(), &[0.0, 1.0, 1.0, 0.0]);
    // header label is not part of the encoding
    assert_eq!(series.categories().unwrap().code("d"), None);
}

#[test]
fn test_column_lookup() {
    let df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();

    assert_eq!(df.column_by_name("c").map(|s| s.sum()), Some(10.0));
    assert!(df.column_by_name("f").is_none());
    assert!(df.contains_column("e"));
    assert_eq!(df.column(1).map(Series::name), Some("b"));
    assert!(df.column(5).is_none());
}

#[test]
fn test_drop_rows() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    df.drop_rows(&[2]).unwrap();

    assert_eq!(df.row_count(), 3);
    assert_eq!(df.row(0), Some(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
    assert_eq!(df.row(1), Some(vec![3.0, 5.0, 2.0, 2.0, 4.0]));
    assert_eq!(df.row(2), Some(vec![4.0, 2.0, 4.0, 7.0, 6.0]));
    assert!(df.columns().iter().all(|s| s.len() == 3));
}

#[test]
fn test_drop_rows_out_of_range() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    let before = df.clone();

    let err = df.drop_rows(&[0, 4]).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 4, size: 4 }));
    assert_eq!(df.row_count(), 4);
    assert_eq!(df, before);
}

#[test]
fn test_drop_rows_unordered_indices() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    df.drop_rows(&[0, 3, 1]).unwrap();

    assert_eq!(df.row_count(), 1);
    assert_eq!(df.row(0), Some(vec![7.0, 6.0, 1.0, 3.0, 3.0]));
}

#[test]
fn test_drop_rows_where() {
    let mut df = DataFrame::from_rows(&larger_sample_data()).unwrap();
    assert_eq!(df.row_count(), 16);

    df.drop_rows_where(|row| row[0] > 3.0);

    assert_eq!(df.row_count(), 8);
    assert!(df.columns()[0].values().iter().all(|&v| v <= 3.0));
    assert_eq!(df.columns()[1].values()[..2], [2.0, 5.0]);
}

#[test]
fn test_drop_columns() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    df.drop_columns(&[0, 2]).unwrap();

    assert_eq!(df.column_names(), vec!["b", "d", "e"]);
    assert_eq!(df.row_count(), 4);
}

#[test]
fn test_drop_columns_out_of_range() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    assert!(df.drop_columns(&[5]).is_err());
    assert_eq!(df.column_count(), 5);
}

#[test]
fn test_drop_columns_by_name() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    df.drop_columns_by_name(&["c", "e", "a"]).unwrap();

    assert_eq!(df.column_names(), vec!["b", "d"]);
}

#[test]
fn test_drop_columns_by_name_is_all_or_nothing() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();

    let err = df.drop_columns_by_name(&["a", "f", "g"]).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(ref name) if name == "f"));
    assert_eq!(err.to_string(), "column 'f' does not exist");
    assert_eq!(df.column_names(), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_drop_columns_by_name_removes_duplicates() {
    let mut df = DataFrame::from_series(vec![
        Series::new("x", vec![1.0, 2.0]),
        Series::new("y", vec![3.0, 4.0]),
        Series::new("x", vec![5.0, 6.0]),
    ])
    .unwrap();

    df.drop_columns_by_name(&["x"]).unwrap();
    assert_eq!(df.column_names(), vec!["y"]);
}

#[test]
fn test_drop_columns_where() {
    let mut df = DataFrame::from_rows(&sample_data_with_headers()).unwrap();
    df.drop_columns_where(|s| s.name() == "c");
    assert_eq!(df.column_names(), vec!["a", "b", "d", "e"]);

    df.drop_columns_where(|s| s.sum() > 15.0);
    assert_eq!(df.column_names(), vec!["a", "b"]);
}

#[test]
fn test_standardize_skips_categorical() {
    let mut df = DataFrame::from_rows(&sample_data_with_categorical_data()).unwrap();
    let codes: Vec<u64> = df.columns()[3].values().iter().map(|v| v.to_bits()).collect();

    df.standardize();

    let after: Vec<u64> = df.columns()[3].values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(codes, after);

    for series in df.columns().iter().filter(|s| !s.is_categorical()) {
        assert!(series.mean().abs() < 1e-10);
        assert!((series.std_dev() - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_describe_numeric_columns() {
    let df = DataFrame::from_rows(&sample_data_with_categorical_data()).unwrap();
    let summaries = df.describe();

    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "e"]);
    assert!((summaries[0].mean - 3.75).abs() < 1e-10);
}

#[test]
fn test_display_head_only() {
    let df = DataFrame::from_rows(&larger_sample_data()).unwrap();
    let rendered = df.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "         a           b           c           d           e  ");
    assert_eq!(lines[1], "      1.00        2.00        3.00        4.00        5.00  ");
    assert_eq!(lines[10], "      3.00        5.00        2.00        2.00        4.00  ");
}

#[test]
fn test_display_categorical_labels() {
    let df = DataFrame::from_rows(&sample_data_with_categorical_data()).unwrap();
    let rendered = df.to_string();
    let first_row = rendered.lines().nth(1).unwrap();

    assert_eq!(first_row, "      1.00        2.00        3.00           a        5.00  ");
}
