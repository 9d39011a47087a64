//! Integration tests for the standardization orchestrator.

use bat_common::string_values;
use bat_model::fields::{ALTERNATES, OUT_FILE, OUT_FILE_FS, SCHEMA_VERSION};
use bat_model::{HarmonizeOutcome, SchemaLabel, StandardizeOptions};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use bat_standardize::{StandardizeError, classify, classify_and_standardize, standardize};

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn values(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    string_values(df, column).unwrap()
}

fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(String::from)).collect()
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|column| column.eq_ignore_ascii_case(name))
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn mixed_generations() -> DataFrame {
    test_df(vec![
        ("auto_id", vec![Some("EPTFUS"), Some("MYLU"), Some("Noise"), Some("LACI")]),
        ("alternate_1", vec![Some("MYOLUC"), Some("EPFU;LANO"), None, Some("LABO")]),
        ("alternate_2", vec![None, None, None, None]),
        ("site", vec![Some("north"), Some("east"), Some("south"), Some("west")]),
    ])
}

#[test]
fn test_legacy_alternates_list_is_split_and_remapped() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYLU")]),
        ("alternates", vec![Some("LACI;LABO;LANO")]),
        ("out_file", vec![Some("rec_001.wav")]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.report.label_counts.get(SchemaLabel::V1LegacySingleColumn), 1);
    assert_eq!(values(data, "auto_id"), owned(&[Some("MYOLUC")]));
    assert_eq!(values(data, "alternate_1"), owned(&[Some("LASCIN")]));
    assert_eq!(values(data, "alternate_2"), owned(&[Some("LASBOR")]));
    assert_eq!(values(data, "alternate_3"), owned(&[Some("LASNOC")]));
    assert!(!has_column(data, ALTERNATES));
    assert!(!has_column(data, SCHEMA_VERSION));
    assert_eq!(values(data, OUT_FILE_FS), owned(&[Some("rec_001.wav")]));
    assert_eq!(result.report.harmonize, HarmonizeOutcome::Renamed);
}

#[test]
fn test_list_leaked_into_first_alternate_is_split() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYOLUC")]),
        ("alternate_1", vec![Some("MYLU;EPFU")]),
        ("alternate_2", vec![None]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.report.label_counts.get(SchemaLabel::V1LegacySingleColumn), 1);
    assert_eq!(values(data, "alternate_1"), owned(&[Some("MYOLUC")]));
    assert_eq!(values(data, "alternate_2"), owned(&[Some("EPTFUS")]));
    assert_eq!(values(data, "alternate_3"), owned(&[None]));
}

#[test]
fn test_short_codes_are_remapped() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYLU")]),
        ("alternate_1", vec![Some("EPFU")]),
        ("alternate_2", vec![None]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.report.label_counts.get(SchemaLabel::V2TransitionalShortCode), 1);
    assert_eq!(values(data, "auto_id"), owned(&[Some("MYOLUC")]));
    assert_eq!(values(data, "alternate_1"), owned(&[Some("EPTFUS")]));
    assert_eq!(values(data, "alternate_2"), owned(&[None]));
    assert_eq!(values(data, "alternate_3"), owned(&[None]));
    assert_eq!(result.report.remapped_values, 2);
}

#[test]
fn test_long_codes_are_left_alone() {
    let df = test_df(vec![
        ("auto_id", vec![Some("EPTFUS")]),
        ("alternate_1", vec![Some("mylu")]),
        ("alternate_2", vec![None]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.report.label_counts.get(SchemaLabel::V3ModernLongCode), 1);
    assert_eq!(values(data, "auto_id"), owned(&[Some("EPTFUS")]));
    // V3 rows are never remapped, even when a short code slipped in.
    assert_eq!(values(data, "alternate_1"), owned(&[Some("mylu")]));
    assert_eq!(values(data, "alternate_3"), owned(&[None]));
    assert_eq!(result.report.remapped_values, 0);
}

#[test]
fn test_legacy_output_path_fills_blank_modern_values() {
    let df = test_df(vec![
        ("auto_id", vec![Some("EPTFUS"), Some("MYOLUC"), Some("LASCIN")]),
        ("out_file", vec![Some("a.wav"), Some("b.wav"), None]),
        ("out_file_fs", vec![None, Some("b_fs.wav"), Some("")]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert!(!has_column(data, OUT_FILE));
    assert_eq!(
        values(data, OUT_FILE_FS),
        owned(&[Some("a.wav"), Some("b_fs.wav"), Some("")])
    );
    assert_eq!(result.report.harmonize, HarmonizeOutcome::Merged { filled: 1 });
}

#[test]
fn test_groups_are_recombined_in_generation_order() {
    let result =
        classify_and_standardize(&mixed_generations(), &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.record_count(), 4);
    assert_eq!(
        values(data, "auto_id"),
        owned(&[Some("MYOLUC"), Some("LASCIN"), Some("EPTFUS"), Some("Noise")])
    );
    assert_eq!(
        values(data, "site"),
        owned(&[Some("east"), Some("west"), Some("north"), Some("south")])
    );
    assert_eq!(
        values(data, "alternate_2"),
        owned(&[Some("LASNOC"), None, None, None])
    );
    assert!(!result.report.order_preserved);
}

#[test]
fn test_preserve_input_order_restores_rows() {
    let options = StandardizeOptions::new().with_preserve_input_order(true);
    let result = classify_and_standardize(&mixed_generations(), &options).unwrap();
    let data = &result.data;

    assert_eq!(
        values(data, "site"),
        owned(&[Some("north"), Some("east"), Some("south"), Some("west")])
    );
    assert_eq!(
        values(data, "auto_id"),
        owned(&[Some("EPTFUS"), Some("MYOLUC"), Some("Noise"), Some("LASCIN")])
    );
    assert!(result.report.order_preserved);
}

#[test]
fn test_unknown_rows_pass_through_untouched() {
    let df = test_df(vec![
        ("auto_id", vec![Some("Noise"), None]),
        ("alternate_1", vec![Some("mylu"), Some("EPFU")]),
        ("alternate_2", vec![None, None]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(result.report.unknown_rows(), 2);
    assert!(result.report.has_unknown_rows());
    assert_eq!(
        values(&result.data, "auto_id"),
        owned(&[Some("Noise"), None])
    );
    assert_eq!(
        values(&result.data, "alternate_1"),
        owned(&[Some("mylu"), Some("EPFU")])
    );
    assert_eq!(result.report.remapped_values, 0);
}

#[test]
fn test_report_summarizes_the_run() {
    let result =
        classify_and_standardize(&mixed_generations(), &StandardizeOptions::default()).unwrap();

    let json = serde_json::to_string_pretty(&result.report).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "total_rows": 4,
      "label_counts": {
        "V1_LEGACY_SINGLE_COLUMN": 1,
        "V2_TRANSITIONAL_SHORT_CODE": 1,
        "V3_MODERN_LONG_CODE": 1,
        "UNKNOWN": 1
      },
      "remapped_values": 5,
      "harmonize": {
        "action": "unchanged"
      },
      "order_preserved": false
    }
    "#);
}

#[test]
fn test_row_count_is_conserved() {
    let df = mixed_generations();
    for preserve in [false, true] {
        let options = StandardizeOptions::new().with_preserve_input_order(preserve);
        let result = classify_and_standardize(&df, &options).unwrap();
        assert_eq!(result.data.height(), df.height());
        assert_eq!(result.report.total_rows, df.height());
        assert_eq!(result.report.label_counts.total(), df.height());
    }
}

#[test]
fn test_modern_data_is_a_fixed_point() {
    let df = test_df(vec![
        ("auto_id", vec![Some("EPTFUS"), Some("MYOLUC")]),
        ("manual_id", vec![None, Some("MYOSEP")]),
        ("alternate_1", vec![Some("LASBOR"), None]),
        ("alternate_2", vec![None, None]),
        ("alternate_3", vec![None, None]),
        ("out_file_fs", vec![Some("a.wav"), Some("b.wav")]),
    ]);

    let once = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let twice = classify_and_standardize(&once.data, &StandardizeOptions::default()).unwrap();

    assert!(once.data.equals_missing(&df));
    assert!(twice.data.equals_missing(&once.data));
}

#[test]
fn test_legacy_fields_never_survive() {
    let df = test_df(vec![
        ("AUTO_ID", vec![Some("MYLU"), Some("EPFU")]),
        ("Alternates", vec![Some("LACI"), None]),
        ("Schema_Version", vec![None, None]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert!(!has_column(&result.data, ALTERNATES));
    assert!(!has_column(&result.data, SCHEMA_VERSION));
    assert_eq!(
        values(&result.data, "AUTO_ID"),
        owned(&[Some("MYOLUC"), Some("EPTFUS")])
    );
}

#[test]
fn test_standardize_uses_existing_labels() {
    let mut df = mixed_generations();
    classify(&mut df).unwrap();

    let result = standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(result.report.label_counts.total(), 4);
    assert_eq!(result.report.unknown_rows(), 1);
    assert!(!has_column(&result.data, SCHEMA_VERSION));
}

#[test]
fn test_unparseable_labels_are_unknown() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYLU"), Some("MYLU")]),
        (
            "schema_version",
            vec![Some("v2_transitional_short_code"), Some("V9_FUTURE")],
        ),
    ]);

    let result = standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(result.report.label_counts.get(SchemaLabel::V2TransitionalShortCode), 1);
    assert_eq!(result.report.unknown_rows(), 1);
    assert_eq!(
        values(&result.data, "auto_id"),
        owned(&[Some("MYOLUC"), Some("MYLU")])
    );
}

#[test]
fn test_missing_labels_are_fatal_without_classification() {
    let err = standardize(&mixed_generations(), &StandardizeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        StandardizeError::MissingField {
            field: "schema_version"
        }
    ));
}

#[test]
fn test_missing_labels_can_be_classified_on_demand() {
    let options = StandardizeOptions::new().with_classify_missing_labels(true);
    let result = standardize(&mixed_generations(), &options).unwrap();
    assert_eq!(result.report.label_counts.total(), 4);
}

#[test]
fn test_empty_frame_standardizes_to_empty() {
    let df = test_df(vec![
        ("auto_id", vec![]),
        ("alternate_1", vec![]),
        ("alternate_2", vec![]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(result.record_count(), 0);
    assert_eq!(result.report.label_counts.total(), 0);
    assert!(!has_column(&result.data, SCHEMA_VERSION));
    assert!(has_column(&result.data, "alternate_3"));
}

#[test]
fn test_empty_legacy_frame_gets_unified_columns() {
    let df = test_df(vec![("auto_id", vec![]), ("alternates", vec![])]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(result.record_count(), 0);
    assert_eq!(
        column_names(&result.data),
        vec!["auto_id", "alternate_1", "alternate_2", "alternate_3"]
    );
}

#[test]
fn test_list_leaked_into_second_alternate_keeps_the_first() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYOLUC")]),
        ("alternate_1", vec![Some("EPFU")]),
        ("alternate_2", vec![Some("LANO;LABO;LACI")]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();
    let data = &result.data;

    assert_eq!(result.report.label_counts.get(SchemaLabel::V1LegacySingleColumn), 1);
    assert_eq!(values(data, "alternate_1"), owned(&[Some("EPTFUS")]));
    assert_eq!(values(data, "alternate_2"), owned(&[Some("LASNOC")]));
    assert_eq!(values(data, "alternate_3"), owned(&[Some("LASBOR")]));
}

#[test]
fn test_added_alternates_sit_next_to_existing_ones() {
    let df = test_df(vec![
        ("Auto_ID", vec![Some("MYLU")]),
        ("Alternate_1", vec![Some("EPFU")]),
        ("out_file_fs", vec![Some("a.wav")]),
        ("out_file_zc", vec![Some("a.zc")]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(
        column_names(&result.data),
        vec![
            "Auto_ID",
            "Alternate_1",
            "alternate_2",
            "alternate_3",
            "out_file_fs",
            "out_file_zc"
        ]
    );
}

#[test]
fn test_legacy_list_columns_replace_the_alternates_column() {
    let df = test_df(vec![
        ("auto_id", vec![Some("MYLU")]),
        ("alternates", vec![Some("LACI;LABO")]),
        ("out_file", vec![Some("a.wav")]),
    ]);

    let result = classify_and_standardize(&df, &StandardizeOptions::default()).unwrap();

    assert_eq!(
        column_names(&result.data),
        vec!["auto_id", "alternate_1", "alternate_2", "alternate_3", "out_file_fs"]
    );
}
