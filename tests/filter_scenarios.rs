//! End-to-end filter composition scenarios.
//!
//! Exercises the full pipeline — resource-pair catalog parsing, range-table
//! construction, classification, and every predicate arm — the way a picker
//! UI would drive it.

use seqpicker::blocks::{self, BlockDef};
use seqpicker::{EngineConfig, FilterEngine, SequenceDescription};

fn two_block_engine() -> FilterEngine {
    let blocks = vec![
        BlockDef::new("Basic Latin", 0x0000, 0x0080),
        BlockDef::new("Latin-1 Supplement", 0x0080, 0x0100),
    ];
    let descriptions = vec![
        // → Basic Latin (0x41)
        SequenceDescription::new(vec!["a".into()], "A", "latin letter a zero 0"),
        // → Latin-1 Supplement (0xA0)
        SequenceDescription::new(vec!["nbsp".into()], "\u{00A0}", "no-break space 00A0"),
        // 0x200 exceeds every range_end: constructed but never surfaced.
        SequenceDescription::new(vec!["far".into()], "\u{0200}", "letter with double grave 0"),
    ];
    FilterEngine::new(blocks, descriptions, &EngineConfig::default()).expect("engine")
}

fn visible_code_points(engine: &FilterEngine) -> Vec<u32> {
    engine.visible().map(|r| r.result_code_point()).collect()
}

fn unselect(engine: &mut FilterEngine, name: &str) {
    let id = engine
        .categories()
        .find(|(_, c)| c.name == name)
        .map(|(id, _)| id)
        .expect("surfaced category");
    engine.set_category_selected(id, false).expect("known id");
}

#[test]
fn composition_scenario_from_the_picker() {
    let mut engine = two_block_engine();

    // C1 selected, C2 unselected; the 0x200 record is hidden outright.
    unselect(&mut engine, "Latin-1 Supplement");
    assert_eq!(visible_code_points(&engine), vec![0x0041]);

    // Search "0" without restriction: any matching record, category ignored.
    engine.set_search_text("0");
    assert_eq!(visible_code_points(&engine), vec![0x0041, 0x00A0]);

    // Same text restricted to the selection: only C1's record survives.
    engine.set_search_in_selection(true);
    assert_eq!(visible_code_points(&engine), vec![0x0041]);

    // Clearing the text falls back to selection-only visibility.
    engine.set_search_text("");
    engine.set_search_in_selection(false);
    assert_eq!(visible_code_points(&engine), vec![0x0041]);
}

#[test]
fn refresh_with_unchanged_state_reproduces_the_visible_set() {
    let mut engine = two_block_engine();
    engine.set_search_text("0");
    let first = engine.visible_indices().to_vec();
    let generation = engine.generation();

    engine.refresh();
    assert_eq!(engine.visible_indices(), first.as_slice());
    assert!(engine.generation() > generation);
}

#[test]
fn resource_catalog_drives_the_full_pipeline() {
    let blocks = blocks::from_resource_pairs([
        ("ResourceManager", "System.Resources.ResourceManager"),
        ("U0000U0080", "Basic Latin"),
        ("U0080U0100", "Latin-1 Supplement"),
        ("Culture", ""),
    ])
    .expect("catalog");

    let descriptions = vec![
        SequenceDescription::new(vec!["o".into(), "c".into()], "©", "copyright sign"),
        SequenceDescription::new(vec!["void".into()], "", "empty output"),
    ];

    let engine = seqpicker::initialize(&EngineConfig::default(), blocks, descriptions)
        .expect("engine");

    assert_eq!(engine.sequences().len(), 1);
    let names: Vec<&str> = engine.categories().map(|(_, c)| c.name.as_str()).collect();
    assert_eq!(names, vec!["Latin-1 Supplement"]);
    assert_eq!(visible_code_points(&engine), vec![0x00A9]);
}
