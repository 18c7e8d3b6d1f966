use super::*;

fn modulo_2_or_7(width: u32, height: u32) -> UniverseCore {
    UniverseCore::new(width, height, SeedPattern::Modulo { a: 2, b: 7 }).unwrap()
}

fn from_cells(width: u32, height: u32, cells: &[(u32, u32)]) -> UniverseCore {
    UniverseCore::new(width, height, SeedPattern::Cells { cells: cells.to_vec() }).unwrap()
}

fn alive_coords(universe: &UniverseCore) -> Vec<(u32, u32)> {
    universe
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .filter_map(|(i, _)| universe.coords(i))
        .collect()
}

#[test]
fn eight_by_eight_origin_dies_after_one_tick() {
    let mut universe = modulo_2_or_7(8, 8);
    assert_eq!(universe.get(0, 0), Ok(Cell::Alive));
    assert_eq!(universe.live_neighbor_count(0, 0), Ok(4));
    assert_eq!(universe.live_count(), 37);

    universe.tick();

    assert_eq!(universe.get(0, 0), Ok(Cell::Dead));
    assert_eq!(universe.live_count(), 24);
    assert_eq!(universe.generation(), 1);
}

#[test]
fn blinker_matches_hand_computed_states() {
    let mut universe = from_cells(5, 5, &[(1, 1), (2, 1), (3, 1)]);
    universe.tick();

    assert_eq!(universe.get(1, 1), Ok(Cell::Dead));
    assert_eq!(universe.get(2, 1), Ok(Cell::Alive));
    assert_eq!(universe.get(3, 1), Ok(Cell::Dead));
    assert_eq!(universe.get(2, 0), Ok(Cell::Alive));
    assert_eq!(universe.get(2, 2), Ok(Cell::Alive));
    assert_eq!(universe.get(4, 2), Ok(Cell::Dead));
    assert_eq!(universe.live_count(), 3);
}

#[test]
fn three_by_three_line_fills_the_torus() {
    // Every cell sees the whole column through the wrap; an in-place update
    // would kill the line before the side cells are evaluated.
    let mut universe = from_cells(3, 3, &[(0, 1), (1, 1), (2, 1)]);
    universe.tick();
    assert!(universe.cells().iter().all(|c| c.is_alive()));
}

#[test]
fn three_live_corners_give_birth_in_the_fourth() {
    let mut universe = from_cells(4, 4, &[(0, 0), (0, 3), (3, 0)]);
    assert_eq!(universe.live_neighbor_count(3, 3), Ok(3));

    universe.tick();

    assert_eq!(alive_coords(&universe), vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
}

#[test]
fn four_corners_form_a_still_block_across_the_wrap() {
    let corners = [(0, 0), (0, 3), (3, 0), (3, 3)];
    let mut universe = from_cells(4, 4, &corners);
    universe.tick_n(3);
    assert_eq!(alive_coords(&universe), corners.to_vec());
}

#[test]
fn toggle_changes_exactly_one_index() {
    let mut universe = modulo_2_or_7(8, 6);
    let before = universe.cells().to_vec();

    let new_state = universe.toggle_cell(3, 5).unwrap();
    let idx = universe.index(3, 5).unwrap();
    assert_eq!(idx, 3 * 8 + 5);
    assert_eq!(new_state, before[idx].toggled());

    for (i, (&a, &b)) in before.iter().zip(universe.cells()).enumerate() {
        if i == idx {
            assert_ne!(a, b);
        } else {
            assert_eq!(a, b, "cell {} changed", i);
        }
    }
    assert_eq!(universe.generation(), 0);
}

#[test]
fn out_of_range_toggle_leaves_grid_untouched() {
    let mut universe = modulo_2_or_7(8, 6);
    let before = universe.cells_snapshot();

    let err = universe.toggle_cell(6, 0).unwrap_err();
    assert_eq!(err, EngineError::IndexOutOfRange { row: 6, col: 0, height: 6, width: 8 });
    assert!(universe.toggle_cell(0, 8).is_err());
    assert!(universe.toggle_cell(u32::MAX, u32::MAX).is_err());

    assert_eq!(universe.cells_snapshot(), before);
}

#[test]
fn set_cell_writes_one_cell_or_rejects_without_change() {
    let mut universe = from_cells(4, 3, &[(1, 1)]);

    universe.set_cell(2, 3, Cell::Alive).unwrap();
    universe.set_cell(1, 1, Cell::Dead).unwrap();
    assert_eq!(alive_coords(&universe), vec![(2, 3)]);
    assert_eq!(universe.get(2, 3), Ok(Cell::Alive));
    assert_eq!(universe.generation(), 0);

    let before = universe.cells_snapshot();
    assert_eq!(
        universe.set_cell(3, 0, Cell::Alive),
        Err(EngineError::IndexOutOfRange { row: 3, col: 0, height: 3, width: 4 })
    );
    assert!(universe.set_cell(0, 4, Cell::Alive).is_err());
    assert_eq!(universe.cells_snapshot(), before);
    assert_eq!(universe.grid().live_count(), 1);
}

#[test]
fn set_cells_is_all_or_nothing() {
    let mut universe = from_cells(5, 5, &[]);
    let err = universe.set_cells(&[(0, 0), (1, 1), (5, 5)]).unwrap_err();
    assert!(matches!(err, EngineError::IndexOutOfRange { row: 5, col: 5, .. }));
    assert_eq!(universe.live_count(), 0);

    universe.set_cells(&[(0, 0), (1, 1)]).unwrap();
    assert_eq!(alive_coords(&universe), vec![(0, 0), (1, 1)]);
}

#[test]
fn repeated_runs_are_identical() {
    let run = || {
        let mut universe = UniverseCore::new(
            32,
            24,
            SeedPattern::Random { seed: 2024, density_percent: 35 },
        )
        .unwrap();
        universe.tick_n(25);
        universe.cells().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn invalid_dimensions_produce_no_universe() {
    assert_eq!(
        UniverseCore::new(0, 10, SeedPattern::Empty).err(),
        Some(EngineError::InvalidDimensions { width: 0, height: 10 })
    );
    assert!(UniverseCore::with_pattern_fn(10, 0, |_, _, _| Cell::Alive).is_err());
}

#[test]
fn degenerate_grids_tick_without_error() {
    // 1x1 alive sees itself eight times and dies of overcrowding.
    let mut single = UniverseCore::with_pattern_fn(1, 1, |_, _, _| Cell::Alive).unwrap();
    single.tick();
    assert_eq!(single.get(0, 0), Ok(Cell::Dead));

    let mut square = UniverseCore::with_pattern_fn(2, 2, |_, _, _| Cell::Alive).unwrap();
    square.tick();
    assert_eq!(square.live_count(), 0);

    let mut line = UniverseCore::with_pattern_fn(3, 1, |_, _, _| Cell::Alive).unwrap();
    line.tick();
    assert_eq!(line.live_count(), 0);
}

#[test]
fn pattern_fn_sees_row_and_col() {
    let universe = UniverseCore::with_pattern_fn(4, 3, |_, row, col| Cell::from(row == col)).unwrap();
    assert_eq!(alive_coords(&universe), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn reset_restores_generation_zero_and_clear_kills_all() {
    let mut universe = modulo_2_or_7(16, 16);
    let initial = universe.cells().to_vec();

    universe.tick_n(5);
    universe.toggle_cell(0, 0).unwrap();
    assert_ne!(universe.cells(), &initial[..]);

    universe.reset();
    assert_eq!(universe.cells(), &initial[..]);
    assert_eq!(universe.generation(), 0);

    universe.tick();
    universe.clear();
    assert_eq!(universe.live_count(), 0);
    assert_eq!(universe.generation(), 0);
}

#[test]
fn render_has_one_line_per_row_and_no_trailing_newline() {
    let universe = from_cells(5, 5, &[(1, 1), (2, 1), (3, 1)]);
    let expected = ["◻◻◻◻◻", "◻◼◻◻◻", "◻◼◻◻◻", "◻◼◻◻◻", "◻◻◻◻◻"].join("\n");
    assert_eq!(universe.render(), expected);
    assert!(!universe.render().ends_with('\n'));
}

#[test]
fn render_does_not_mutate() {
    let universe = modulo_2_or_7(6, 4);
    let before = universe.cells_snapshot();
    let _ = universe.render();
    assert_eq!(universe.cells_snapshot(), before);
    assert_eq!(universe.render().lines().count(), 4);
}

#[test]
fn perf_stats_follow_the_last_tick() {
    let mut universe = from_cells(5, 5, &[(1, 1), (2, 1), (3, 1)]);
    universe.tick();
    assert_eq!(universe.get_perf_stats(), PerfStats::default());

    universe.enable_perf_metrics(true);
    universe.tick();
    let stats = universe.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.cells_processed(), 25);
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);
    assert_eq!(stats.live_cells(), 3);
    assert_eq!(stats.generation(), 2);

    universe.enable_perf_metrics(false);
    assert_eq!(universe.get_perf_stats(), PerfStats::default());
}

#[test]
fn default_universe_is_classic_64_square() {
    let universe = UniverseCore::default();
    assert_eq!((universe.width(), universe.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert_eq!(universe.live_count(), 2341);
    assert_eq!(
        universe.cells(),
        modulo_2_or_7(DEFAULT_WIDTH, DEFAULT_HEIGHT).cells()
    );
}

#[test]
fn config_json_builds_universe() {
    let json = r#"{
        "width": 6,
        "height": 6,
        "seed": { "kind": "cells", "cells": [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]] },
        "perf_metrics": true
    }"#;
    let universe = UniverseCore::from_config_json(json).unwrap();
    assert_eq!(universe.width(), 6);
    assert_eq!(universe.live_count(), 5);
    assert!(universe.perf_metrics_enabled());
}

#[test]
fn config_defaults_and_errors() {
    let config = UniverseConfig::from_json("{}").unwrap();
    assert_eq!(config, UniverseConfig::default());

    let round_trip = UniverseConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(round_trip, config);

    assert!(matches!(
        UniverseConfig::from_json(r#"{"width": "wide"}"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        UniverseConfig::from_json(r#"{"depth": 3}"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        UniverseConfig::from_json(r#"{"seed": {"kind": "modulo", "a": 0, "b": 2}}"#),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        UniverseCore::from_config_json(r#"{"width": 0}"#),
        Err(EngineError::InvalidDimensions { width: 0, height: 64 })
    ));
}

#[test]
fn cells_ptr_moves_with_the_double_buffer() {
    let mut universe = modulo_2_or_7(8, 8);
    let before = universe.cells_ptr();
    universe.tick();
    assert_ne!(universe.cells_ptr(), before);
    assert_eq!(universe.cells_ptr(), universe.cells().as_ptr());
    assert_eq!(universe.cells_len(), 64);
}
