//! Property tests for the fallback policy
//!
//! However a turn's inputs are interleaved, substitution happens exactly
//! once, on the turn's first empty-elements result.

use genui_pipeline::{RecordedSteps, RenderUiPreprocessor};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn prop_repeated_empty_specs_substitute_once(count in 1usize..8) {
        let mut preprocessor = RenderUiPreprocessor::new(RecordedSteps::new());

        let mut substitutions = 0;
        for _ in 0..count {
            preprocessor.preprocess(json!({ "root": "x", "elements": {} }));
            if preprocessor.was_auto_populated() {
                substitutions += 1;
            }
        }

        prop_assert_eq!(substitutions, 1);
        prop_assert_eq!(preprocessor.empty_elements_attempts(), count as u32);
    }

    #[test]
    fn prop_substitution_lands_on_first_empty(pattern in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut preprocessor = RenderUiPreprocessor::new(RecordedSteps::new());

        let first_empty = pattern.iter().position(|is_empty| *is_empty);
        for (index, is_empty) in pattern.iter().enumerate() {
            let input = if *is_empty {
                json!({ "root": "x", "elements": {} })
            } else {
                json!({ "root": "t", "elements": { "t": { "type": "Text", "props": { "text": "hi" } } } })
            };

            preprocessor.preprocess(input);
            prop_assert_eq!(preprocessor.was_auto_populated(), first_empty == Some(index));
        }
    }
}
