//! Embedded dataset statistics.
//!
//! Every table here is a build-time constant. Tables keep their labels as an
//! ordered slice of `(label, count)` pairs because the order is the display
//! order: bars are drawn in the sequence the table lists them, and the train
//! split decides the category/modality axis for the cross-split charts.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// Dataset partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// Series order used by every cross-split chart.
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Val => "val",
            Self::Test => "test",
        }
    }
}

/// An ordered label → count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTable {
    entries: &'static [(&'static str, u64)],
}

impl MetricTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, u64)]) -> Self {
        Self { entries }
    }

    /// Number of labels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(label, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Labels in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(label, _)| *label).collect()
    }

    /// Counts in display order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    /// Count for `label`, if the table has it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, count)| *count)
    }

    /// First label that appears more than once, if any.
    #[must_use]
    pub fn duplicate_label(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .enumerate()
            .find(|(i, (label, _))| self.entries[..*i].iter().any(|(earlier, _)| earlier == label))
            .map(|(_, (label, _))| *label)
    }
}

/// One table per dataset split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTables {
    pub train: MetricTable,
    pub val: MetricTable,
    pub test: MetricTable,
}

impl SplitTables {
    #[must_use]
    pub fn get(&self, split: Split) -> &MetricTable {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }

    /// The shared axis: labels of the train table, in its order.
    #[must_use]
    pub fn axis(&self) -> Vec<&'static str> {
        self.train.labels()
    }
}

/// Row → (column → count) table. Absent cells read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossTable {
    rows: &'static [(&'static str, MetricTable)],
}

impl CrossTable {
    #[must_use]
    pub const fn new(rows: &'static [(&'static str, MetricTable)]) -> Self {
        Self { rows }
    }

    /// The row table for `row`, if present.
    #[must_use]
    pub fn row(&self, row: &str) -> Option<&MetricTable> {
        self.rows
            .iter()
            .find(|(label, _)| *label == row)
            .map(|(_, table)| table)
    }

    /// Row labels in their native order.
    #[must_use]
    pub fn row_labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|(label, _)| *label).collect()
    }

    /// Count at (`row`, `col`), or 0 when either key is absent.
    #[must_use]
    pub fn get(&self, row: &str, col: &str) -> u64 {
        self.row(row).and_then(|table| table.get(col)).unwrap_or(0)
    }

    /// Dense matrix over the given axes: one inner vector per row label.
    #[must_use]
    pub fn matrix(&self, rows: &[&str], cols: &[&str]) -> Vec<Vec<u64>> {
        rows.iter()
            .map(|row| cols.iter().map(|col| self.get(row, col)).collect())
            .collect()
    }
}

// =============================================================
// Dataset tables
// =============================================================

/// Question category counts per split.
pub static CATEGORY_BY_SPLIT: SplitTables = SplitTables {
    train: MetricTable::new(&[
        ("description", 49_241),
        ("action", 37_006),
        ("count", 33_276),
        ("temporal", 32_855),
        ("location", 14_907),
        ("relative-position", 9_826),
    ]),
    val: MetricTable::new(&[
        ("description", 6_182),
        ("action", 4_938),
        ("count", 3_953),
        ("temporal", 3_915),
        ("location", 1_977),
        ("relative-position", 1_298),
    ]),
    test: MetricTable::new(&[
        ("description", 7_243),
        ("action", 5_745),
        ("count", 4_668),
        ("temporal", 4_589),
        ("location", 2_361),
        ("relative-position", 1_476),
    ]),
};

/// Question modality counts per split.
pub static MODALITY_BY_SPLIT: SplitTables = SplitTables {
    train: MetricTable::new(&[("visual", 101_551), ("audio-visual", 39_545), ("audio", 36_031)]),
    val: MetricTable::new(&[("visual", 13_356), ("audio-visual", 4_684), ("audio", 4_221)]),
    test: MetricTable::new(&[("visual", 15_719), ("audio-visual", 5_429), ("audio", 4_937)]),
};

const VISUAL_BY_CATEGORY: MetricTable = MetricTable::new(&[
    ("description", 32_050),
    ("count", 27_995),
    ("action", 20_056),
    ("temporal", 18_785),
    ("location", 19_146),
    ("relative-position", 12_593),
]);

const AUDIO_BY_CATEGORY: MetricTable = MetricTable::new(&[
    ("description", 25_471),
    ("count", 11_696),
    ("temporal", 7_393),
    ("action", 558),
    ("location", 43),
    ("relative-position", 2),
]);

const AUDIO_VISUAL_BY_CATEGORY: MetricTable = MetricTable::new(&[
    ("temporal", 15_159),
    ("action", 27_075),
    ("description", 5_145),
    ("count", 2_206),
    ("location", 56),
    ("relative-position", 5),
]);

/// Modality × category counts across all splits.
pub static MODALITY_CATEGORY: CrossTable = CrossTable::new(&[
    ("visual", VISUAL_BY_CATEGORY),
    ("audio", AUDIO_BY_CATEGORY),
    ("audio-visual", AUDIO_VISUAL_BY_CATEGORY),
]);

/// Heatmap column order.
pub const HEATMAP_CATEGORIES: [&str; 6] = ["description", "count", "action", "temporal", "location", "relative-position"];

/// Heatmap row order.
pub const HEATMAP_MODALITIES: [&str; 3] = ["visual", "audio", "audio-visual"];

/// Videos bucketed by how many questions they carry.
pub static QUESTIONS_PER_VIDEO: MetricTable = MetricTable::new(&[
    ("0", 1),
    ("1", 23),
    ("2", 797),
    ("3", 1_016),
    ("4", 42),
    ("5", 3_963),
    ("6", 1_113),
    ("7", 8_772),
    ("8", 3_517),
    ("9", 2_317),
    ("10", 2_482),
    ("11", 189),
    ("12", 3_423),
    ("13", 1_128),
    ("14", 65),
    ("15", 13),
    ("16", 2),
]);

/// Questions bucketed by length in words.
pub static QUESTION_LENGTH: MetricTable = MetricTable::new(&[
    ("2", 2),
    ("3", 20),
    ("4", 119),
    ("5", 1_664),
    ("6", 4_796),
    ("7", 22_199),
    ("8", 44_246),
    ("9", 38_099),
    ("10", 35_744),
    ("11", 28_268),
    ("12", 20_511),
    ("13", 10_586),
    ("14", 7_159),
    ("15", 4_712),
    ("16", 2_811),
    ("17", 1_652),
    ("18", 1_085),
    ("19", 866),
    ("20", 367),
    ("21", 223),
    ("22", 134),
    ("23", 109),
    ("24", 48),
    ("25", 39),
    ("26", 17),
    ("27", 10),
    ("28", 4),
    ("29", 3),
    ("31", 2),
]);

/// The twenty most frequent correct answer options.
pub static CORRECT_OPTIONS: MetricTable = MetricTable::new(&[
    ("Two", 10_540),
    ("Music", 5_588),
    ("Three", 5_156),
    ("Four", 3_770),
    ("Twice", 3_335),
    ("One", 3_022),
    ("Once", 2_956),
    ("Red", 2_386),
    ("Blue", 1_913),
    ("Three times", 1_596),
    ("White", 1_428),
    ("Five", 1_368),
    ("Four times", 1_302),
    ("Black", 1_250),
    ("Male speech", 1_203),
    ("Yellow", 1_187),
    ("Speech", 1_141),
    ("Green", 1_129),
    ("To the left", 1_087),
    ("Singing", 962),
]);

/// The twenty most frequent non-stopwords in question text.
pub static NON_STOPWORDS: MetricTable = MetricTable::new(&[
    ("video", 114_802),
    ("sound", 64_825),
    ("man", 37_783),
    ("heard", 33_978),
    ("accompanies", 21_770),
    ("visible", 17_348),
    ("located", 17_095),
    ("movement", 16_774),
    ("happens", 16_635),
    ("times", 14_378),
    ("doing", 14_274),
    ("color", 13_704),
    ("s", 13_309),
    ("does", 12_952),
    ("background", 11_671),
    ("relative", 10_662),
    ("woman", 10_187),
    ("position", 10_181),
    ("event", 8_664),
    ("person", 8_174),
]);
