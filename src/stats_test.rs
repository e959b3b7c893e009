use super::*;

fn all_tables() -> Vec<(&'static str, MetricTable)> {
    let mut tables = vec![
        ("questions_per_video", QUESTIONS_PER_VIDEO),
        ("question_length", QUESTION_LENGTH),
        ("correct_options", CORRECT_OPTIONS),
        ("non_stopwords", NON_STOPWORDS),
    ];
    for split in Split::ALL {
        tables.push(("category", *CATEGORY_BY_SPLIT.get(split)));
        tables.push(("modality", *MODALITY_BY_SPLIT.get(split)));
    }
    for row in MODALITY_CATEGORY.row_labels() {
        if let Some(table) = MODALITY_CATEGORY.row(row) {
            tables.push(("modality_category", *table));
        }
    }
    tables
}

// --- MetricTable ---

#[test]
fn metric_table_preserves_insertion_order() {
    let table = MetricTable::new(&[("b", 2), ("a", 1), ("c", 3)]);
    assert_eq!(table.labels(), vec!["b", "a", "c"]);
    assert_eq!(table.counts(), vec![2, 1, 3]);
}

#[test]
fn metric_table_get_present_and_absent() {
    let table = MetricTable::new(&[("x", 7)]);
    assert_eq!(table.get("x"), Some(7));
    assert_eq!(table.get("y"), None);
}

#[test]
fn metric_table_len_and_empty() {
    assert_eq!(MetricTable::new(&[("x", 1), ("y", 2)]).len(), 2);
    assert!(MetricTable::new(&[]).is_empty());
}

#[test]
fn metric_table_detects_duplicate_label() {
    let table = MetricTable::new(&[("a", 1), ("b", 2), ("a", 3)]);
    assert_eq!(table.duplicate_label(), Some("a"));
}

#[test]
fn metric_table_iter_yields_pairs() {
    let table = MetricTable::new(&[("a", 1), ("b", 2)]);
    let pairs: Vec<_> = table.iter().collect();
    assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
}

// --- Embedded tables ---

#[test]
fn embedded_tables_have_unique_labels() {
    for (name, table) in all_tables() {
        assert_eq!(table.duplicate_label(), None, "duplicate label in {name}");
    }
}

#[test]
fn embedded_tables_are_not_empty() {
    for (name, table) in all_tables() {
        assert!(!table.is_empty(), "{name} is empty");
    }
}

#[test]
fn category_train_action_count() {
    assert_eq!(CATEGORY_BY_SPLIT.train.get("action"), Some(37_006));
}

#[test]
fn category_axis_comes_from_train() {
    assert_eq!(
        CATEGORY_BY_SPLIT.axis(),
        vec!["description", "action", "count", "temporal", "location", "relative-position"]
    );
}

#[test]
fn modality_axis_comes_from_train() {
    assert_eq!(MODALITY_BY_SPLIT.axis(), vec!["visual", "audio-visual", "audio"]);
}

#[test]
fn every_split_covers_the_train_axis() {
    for tables in [&CATEGORY_BY_SPLIT, &MODALITY_BY_SPLIT] {
        for split in Split::ALL {
            for label in tables.axis() {
                assert!(tables.get(split).get(label).is_some(), "{} missing {label}", split.as_str());
            }
        }
    }
}

#[test]
fn split_names() {
    let names: Vec<_> = Split::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, vec!["train", "val", "test"]);
}

#[test]
fn question_buckets_keep_numeric_order() {
    assert_eq!(QUESTIONS_PER_VIDEO.len(), 17);
    assert_eq!(QUESTIONS_PER_VIDEO.labels().first(), Some(&"0"));
    assert_eq!(QUESTION_LENGTH.len(), 29);
    assert_eq!(QUESTION_LENGTH.labels().last(), Some(&"31"));
    assert_eq!(QUESTION_LENGTH.get("30"), None);
}

#[test]
fn top_twenty_tables_have_twenty_entries() {
    assert_eq!(CORRECT_OPTIONS.len(), 20);
    assert_eq!(NON_STOPWORDS.len(), 20);
}

// --- CrossTable ---

#[test]
fn cross_table_reads_present_cell() {
    assert_eq!(MODALITY_CATEGORY.get("audio", "relative-position"), 2);
    assert_eq!(MODALITY_CATEGORY.get("audio-visual", "action"), 27_075);
}

#[test]
fn cross_table_missing_cells_are_zero() {
    assert_eq!(MODALITY_CATEGORY.get("audio", "smell"), 0);
    assert_eq!(MODALITY_CATEGORY.get("haptic", "action"), 0);
}

#[test]
fn cross_table_sparse_rows_fill_with_zero() {
    const SPARSE: CrossTable = CrossTable::new(&[("r1", MetricTable::new(&[("a", 4)]))]);
    let matrix = SPARSE.matrix(&["r1", "r2"], &["a", "b"]);
    assert_eq!(matrix, vec![vec![4, 0], vec![0, 0]]);
}

#[test]
fn cross_table_matrix_follows_requested_axes() {
    let matrix = MODALITY_CATEGORY.matrix(&HEATMAP_MODALITIES, &HEATMAP_CATEGORIES);
    assert_eq!(matrix.len(), 3);
    assert!(matrix.iter().all(|row| row.len() == 6));
    // audio-visual row stores temporal first natively; the heatmap axis puts description first.
    assert_eq!(matrix[2][0], 5_145);
    assert_eq!(matrix[2][3], 15_159);
}

#[test]
fn cross_table_row_labels_native_order() {
    assert_eq!(MODALITY_CATEGORY.row_labels(), vec!["visual", "audio", "audio-visual"]);
}
