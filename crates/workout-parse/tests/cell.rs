//! Tests for the cell parser pipeline.

use workout_model::{KG_TO_LB, ParsedPart, ParserConfig, Side};
use workout_parse::parse_cell;

fn parse(cell: &str) -> Vec<ParsedPart> {
    parse_cell(cell, &ParserConfig::default())
}

#[test]
fn kilograms_convert_exactly() {
    let parts = parse("20kg 10");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].weight_lbs, Some(20.0 * KG_TO_LB));
    assert_eq!(parts[0].weight_unit_raw, "kg");
    assert_eq!(parts[0].reps, 10.0);
}

#[test]
fn multiplier_produces_identical_parts() {
    let parts = parse("8*3");
    assert_eq!(parts.len(), 3);
    for part in &parts {
        assert_eq!(part.reps, 8.0);
        assert_eq!(part.side, None);
        assert_eq!(part.setting, None);
        assert_eq!(part.segment_note, None);
        assert_eq!(part.weight_lbs, None);
    }
}

#[test]
fn group_setting_is_inherited() {
    let parts = parse("50lb (3) 6+3+3");
    assert_eq!(parts.len(), 3);
    let reps: Vec<f64> = parts.iter().map(|p| p.reps).collect();
    assert_eq!(reps, vec![6.0, 3.0, 3.0]);
    for part in &parts {
        assert_eq!(part.setting.as_deref(), Some("3"));
        assert_eq!(part.weight_lbs, Some(50.0));
    }
}

#[test]
fn trailing_group_setting_expands() {
    let parts = parse("40lb (10+8+6)(4)");
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.setting.as_deref() == Some("4")));
    assert_eq!(parts[0].reps_raw_part.as_deref(), Some("10(4)"));
}

#[test]
fn side_prefix_matches_side_suffix() {
    let prefix = parse("R12");
    let suffix = parse("12R");
    assert_eq!(prefix, suffix);
    assert_eq!(prefix.len(), 1);
    assert_eq!(prefix[0].reps, 12.0);
    assert_eq!(prefix[0].side, Some(Side::Right));
}

#[test]
fn side_weight_pairs_take_the_fast_path() {
    let parts = parse("L10kgs 13 R10kgs 15");
    assert_eq!(parts.len(), 2);
    let expected = 10.0 * KG_TO_LB;

    assert_eq!(parts[0].side, Some(Side::Left));
    assert_eq!(parts[0].reps, 13.0);
    assert!((parts[0].weight_lbs.unwrap() - expected).abs() < 1e-9);
    assert!((parts[0].weight_lbs.unwrap() - 22.05).abs() < 0.01);

    assert_eq!(parts[1].side, Some(Side::Right));
    assert_eq!(parts[1].reps, 15.0);
    assert!((parts[1].weight_lbs.unwrap() - expected).abs() < 1e-9);
    assert!(parts.iter().all(|p| p.feeling.is_none()));
}

#[test]
fn bare_weight_defaults_to_twelve_reps() {
    let parts = parse("135lb");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].reps, 12.0);
    assert_eq!(parts[0].weight_lbs, Some(135.0));
    assert_eq!(parts[0].reps_raw_part, None);
    assert_eq!(parts[0].feeling, None);
}

#[test]
fn bare_weight_keeps_text_as_feeling() {
    let parts = parse("135lb felt easy");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].reps, 12.0);
    assert_eq!(parts[0].feeling.as_deref(), Some("felt easy"));
}

#[test]
fn default_reps_come_from_config() {
    let config = ParserConfig::new().with_default_reps(10.0);
    let parts = parse_cell("100lb", &config);
    assert_eq!(parts[0].reps, 10.0);
}

#[test]
fn empty_cells_yield_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("   \t ").is_empty());
}

#[test]
fn text_without_weight_or_reps_is_dropped() {
    assert!(parse("skipped today").is_empty());
}

#[test]
fn llp_suffix_is_a_feeling() {
    let parts = parse("60lb 10+8LLP");
    assert_eq!(parts.len(), 2);
    for part in &parts {
        assert_ne!(part.segment_note.as_deref(), Some("LLP"));
        assert_eq!(part.feeling.as_deref(), Some("LLP"));
    }
}

#[test]
fn other_suffixes_are_segment_notes() {
    let parts = parse("60lb 10+8HA");
    assert_eq!(parts[0].segment_note, None);
    assert_eq!(parts[1].segment_note.as_deref(), Some("HA"));
    assert_eq!(parts[1].feeling, None);
}

#[test]
fn feelings_join_tail_then_fragments() {
    let parts = parse("60lb 10+8LLP+ugh great pump");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].feeling.as_deref(), Some("great pump | LLP | ugh"));
}

#[test]
fn custom_vocabulary_promotes_other_suffixes() {
    let config = ParserConfig::new().with_global_feelings(["HA"]);
    let parts = parse_cell("60lb 10+8HA+6LLP", &config);
    assert_eq!(parts[1].segment_note, None);
    assert_eq!(parts[2].segment_note.as_deref(), Some("LLP"));
    assert_eq!(parts[0].feeling.as_deref(), Some("HA"));
}

#[test]
fn end_to_end_bench_cell() {
    let parts = parse("135lb R12+L9");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].weight_lbs, Some(135.0));
    assert_eq!(parts[0].reps, 12.0);
    assert_eq!(parts[0].side, Some(Side::Right));
    assert_eq!(parts[0].reps_raw_part.as_deref(), Some("12R"));
    assert_eq!(parts[1].reps, 9.0);
    assert_eq!(parts[1].side, Some(Side::Left));
    assert_eq!(parts[1].weight_unit_raw, "lb");
}

#[test]
fn spacing_around_operators_is_ignored() {
    let spaced = parse("100lb 10 + 8 * 2");
    let tight = parse("100lb 10+8*2");
    assert_eq!(spaced, tight);
    assert_eq!(tight.len(), 3);
}

#[test]
fn fractional_reps_are_kept() {
    let parts = parse("30lb 10+4.5");
    assert_eq!(parts[1].reps, 4.5);
}

#[test]
fn pair_with_trailing_sets_falls_back_to_segments() {
    let parts = parse("R20lb 10+8");
    assert_eq!(parts.len(), 2);
    let reps: Vec<f64> = parts.iter().map(|p| p.reps).collect();
    assert_eq!(reps, vec![10.0, 8.0]);
    for part in &parts {
        assert_eq!(part.weight_lbs, Some(20.0));
        assert_eq!(part.feeling, None);
    }
}

#[test]
fn pair_after_leading_weight_drops_the_weight_text() {
    let parts = parse("20kg L10kgs 13");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].side, Some(Side::Left));
    assert_eq!(parts[0].reps, 13.0);
    assert!((parts[0].weight_lbs.unwrap() - 10.0 * KG_TO_LB).abs() < 1e-9);
    assert_eq!(parts[0].feeling, None);
}

#[test]
fn two_sided_pairs_still_cover_the_whole_cell() {
    let parts = parse("L10kgs 13 R10kgs 15");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].reps_raw_part.as_deref(), Some("13L"));
    assert_eq!(parts[1].reps_raw_part.as_deref(), Some("15R"));
}

#[test]
fn oversized_multiplier_adds_no_default_set() {
    let parts = parse("50lb 10*150");
    assert!(parts.is_empty());
}

#[test]
fn zero_multiplier_adds_no_default_set() {
    assert!(parse("50lb 10*0").is_empty());
}

#[test]
fn rejected_multiplier_keeps_other_segments() {
    let parts = parse("50lb 8+10*150");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].reps, 8.0);
    assert_eq!(parts[0].feeling.as_deref(), Some("10*150"));
}

#[test]
fn setting_without_reps_keeps_setting_and_word_order() {
    let parts = parse("50lb (3) felt good");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].reps, 12.0);
    assert_eq!(parts[0].setting.as_deref(), Some("3"));
    assert_eq!(parts[0].feeling.as_deref(), Some("felt good"));
}
