//! Property tests for the converter.

use ortho_model::{CorrespondenceRule, CorrespondenceTable};
use ortho_transform::{ConvertOptions, OrthoConverter};
use proptest::prelude::*;

/// Latin variants mapped onto a small Cyrillic alphabet.
fn rutul_like_table() -> CorrespondenceTable {
    CorrespondenceTable::new(vec![
        CorrespondenceRule::new("kh", "х"),
        CorrespondenceRule::new("k", "к"),
        CorrespondenceRule::new("a", "а"),
        CorrespondenceRule::new("o", "о"),
        CorrespondenceRule::new("t", "т"),
        CorrespondenceRule::new("i", "и"),
        CorrespondenceRule::inactive("л", "л"),
    ])
}

fn converter(segment: bool) -> OrthoConverter {
    OrthoConverter::new(
        &rutul_like_table(),
        &ConvertOptions::default().with_segment(segment),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn unsegmented_output_keeps_word_count(text in "[khaotiAKT\\- ]{0,40}") {
        let converted = converter(false).convert(&text);
        prop_assert_eq!(
            converted.split_whitespace().count(),
            text.split_whitespace().count()
        );
    }

    #[test]
    fn canonical_text_is_unchanged(text in "[хкаотил\\-— ]{0,40}") {
        prop_assert_eq!(converter(false).convert(&text), text);
    }

    #[test]
    fn segmentation_is_stable(text in "[khaotiл ]{0,40}") {
        let converter = converter(true);
        let once = converter.convert(&text);
        let twice = converter.segment_text(&once);
        prop_assert_eq!(
            twice.split_whitespace().collect::<Vec<_>>(),
            once.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn active_rule_leaves_no_match_behind(text in "[kKaAxy ]{0,40}") {
        let table = CorrespondenceTable::new(vec![CorrespondenceRule::new("k", "к")]);
        let converter = OrthoConverter::new(&table, &ConvertOptions::default()).unwrap();
        let converted = converter.convert(&text);
        prop_assert!(!converted.contains(['k', 'K']));
    }
}

#[test]
fn segmented_symbols_are_canonical() {
    let converter = converter(true);

    let segmented = converter.convert("khat kot");

    assert_eq!(segmented, "х а т  к о т");
    for symbol in segmented.split_whitespace() {
        assert!(converter.alphabet().contains_symbol(symbol), "{symbol}");
    }
}
