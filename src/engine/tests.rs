// src/engine/tests.rs

use super::*;
use crate::grid::CHECKER_WHITE;
use crate::platform::mock::{CaptureSink, MemoryStore};

use anyhow::{anyhow, Result};

/// A store whose every operation fails, for error-propagation tests.
struct BrokenStore;

impl PersistenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("store offline"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("store offline"))
    }
}

fn fresh_engine() -> (GridEngine, MemoryStore) {
    let store = MemoryStore::new();
    let engine = GridEngine::new(Box::new(store.clone())).expect("engine construction");
    (engine, store)
}

#[test]
fn fresh_engine_starts_with_checkerboard_and_saves_it() {
    let (engine, store) = fresh_engine();
    assert_eq!(*engine.grid(), Grid::checkerboard());
    // The initial clear persists, same as an explicit clear_canvas would.
    let blob = store.stored(STORAGE_KEY).expect("initial save");
    let saved: Grid = serde_json::from_str(&blob).unwrap();
    assert_eq!(saved, Grid::checkerboard());
}

#[test]
fn defaults_are_pencil_and_black() {
    let (engine, _store) = fresh_engine();
    assert_eq!(engine.active_tool(), Tool::Pencil);
    assert_eq!(engine.active_color(), Color::BLACK);
}

#[test]
fn pencil_paints_only_the_target_cell() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#ff00aa"));
    engine.paint_cell(5, 9).unwrap();

    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let expected = if (row, col) == (5, 9) {
                Color::from_hex("#ff00aa")
            } else {
                blank_cell_color(row, col)
            };
            assert_eq!(engine.grid().get(row, col), expected);
        }
    }
}

#[test]
fn bucket_fills_all_cells_regardless_of_target() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#00ff00"));
    engine.set_active_tool(Tool::Bucket);
    engine.paint_cell(3, 12).unwrap();

    assert!(engine
        .grid()
        .iter_cells()
        .all(|c| c == Color::from_hex("#00ff00")));
}

#[test]
fn eraser_restores_checkerboard_default() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#123456"));
    engine.paint_cell(7, 7).unwrap();
    assert_eq!(engine.grid().get(7, 7), Color::from_hex("#123456"));

    engine.set_active_tool(Tool::Eraser);
    engine.paint_cell(7, 7).unwrap();
    assert_eq!(engine.grid().get(7, 7), blank_cell_color(7, 7));
}

#[test]
fn eraser_on_untouched_cell_is_a_no_op_value_wise() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_tool(Tool::Eraser);
    engine.paint_cell(0, 1).unwrap();
    assert_eq!(engine.grid().get(0, 1), CHECKER_WHITE);
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let (mut engine, store) = fresh_engine();
    let before = store.stored(STORAGE_KEY).unwrap();

    for (row, col) in [(GRID_DIM, 0), (0, GRID_DIM), (usize::MAX, usize::MAX)] {
        match engine.paint_cell(row, col) {
            Err(EngineError::OutOfRange { row: r, col: c }) => {
                assert_eq!((r, c), (row, col));
            }
            other => panic!("expected OutOfRange, got {:?}", other.map(|_| ())),
        }
    }
    // A rejected paint must not mutate or persist anything.
    assert_eq!(*engine.grid(), Grid::checkerboard());
    assert_eq!(store.stored(STORAGE_KEY).unwrap(), before);
}

#[test]
fn clear_canvas_is_idempotent() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#ff0000"));
    engine.set_active_tool(Tool::Bucket);
    engine.paint_cell(0, 0).unwrap();

    engine.clear_canvas().unwrap();
    let first = engine.grid().clone();
    engine.clear_canvas().unwrap();
    assert_eq!(*engine.grid(), first);
    assert_eq!(first, Grid::checkerboard());
}

#[test]
fn every_mutation_persists_the_whole_grid() {
    let (mut engine, store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#0000ff"));
    engine.paint_cell(2, 2).unwrap();

    let saved: Grid = serde_json::from_str(&store.stored(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(saved, *engine.grid());
    assert_eq!(saved.get(2, 2), Color::from_hex("#0000ff"));
}

#[test]
fn painted_canvas_survives_a_restart() {
    let store = MemoryStore::new();
    {
        let mut engine = GridEngine::new(Box::new(store.clone())).unwrap();
        engine.set_active_color(Color::from_hex("#c0ffee"));
        engine.paint_cell(1, 2).unwrap();
        engine.paint_cell(14, 15).unwrap();
    }

    let engine = GridEngine::new(Box::new(store)).unwrap();
    assert_eq!(engine.grid().get(1, 2), Color::from_hex("#c0ffee"));
    assert_eq!(engine.grid().get(14, 15), Color::from_hex("#c0ffee"));
    assert_eq!(engine.grid().get(0, 0), blank_cell_color(0, 0));
}

#[test_log::test]
fn corrupted_blob_self_heals_to_checkerboard() {
    let store = MemoryStore::new();
    store.seed(STORAGE_KEY, "definitely not json");

    let engine = GridEngine::new(Box::new(store.clone())).unwrap();
    assert_eq!(*engine.grid(), Grid::checkerboard());
    // The healed grid overwrites the corrupt blob.
    let saved: Grid = serde_json::from_str(&store.stored(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(saved, Grid::checkerboard());
}

#[test_log::test]
fn wrong_shaped_blob_is_treated_as_corrupt() {
    let store = MemoryStore::new();
    store.seed(STORAGE_KEY, "[[\"#ffffff\", \"#000000\"]]");

    let engine = GridEngine::new(Box::new(store)).unwrap();
    assert_eq!(*engine.grid(), Grid::checkerboard());
}

#[test]
fn malformed_stored_colors_degrade_to_black() {
    // A correctly shaped grid whose strings are not colors still loads;
    // each bad cell becomes opaque black per the hex parsing contract.
    let rows: Vec<Vec<String>> = vec![vec!["oops".to_string(); GRID_DIM]; GRID_DIM];
    let store = MemoryStore::new();
    store.seed(STORAGE_KEY, &serde_json::to_string(&rows).unwrap());

    let engine = GridEngine::new(Box::new(store)).unwrap();
    assert!(engine.grid().iter_cells().all(|c| c == Color::BLACK));
}

#[test]
fn unavailable_store_fails_construction() {
    match GridEngine::new(Box::new(BrokenStore)) {
        Err(EngineError::Store(e)) => assert_eq!(e.to_string(), "store offline"),
        other => panic!("expected Store error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn export_emits_row_major_rgba_with_suggested_filename() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#ff0000"));
    engine.set_active_tool(Tool::Bucket);
    engine.paint_cell(0, 0).unwrap();

    let mut sink = CaptureSink::new();
    engine.export_to(&mut sink).unwrap();

    let emitted = &sink.emitted()[0];
    assert_eq!(emitted.width, GRID_DIM);
    assert_eq!(emitted.height, GRID_DIM);
    assert_eq!(emitted.suggested_filename, EXPORT_FILENAME);
    assert_eq!(emitted.rgba.len(), 1024);
    for pixel in emitted.rgba.chunks_exact(4) {
        assert_eq!(pixel, [255, 0, 0, 255]);
    }
}

#[test]
fn export_image_is_pure_and_matches_grid_order() {
    let (mut engine, _store) = fresh_engine();
    engine.set_active_color(Color::from_hex("#010203"));
    engine.paint_cell(0, 2).unwrap();

    let image = engine.export_image();
    assert_eq!(image.width, GRID_DIM);
    assert_eq!(image.height, GRID_DIM);
    // Cell (0, 2) sits at byte offset 2 * 4 in the flat buffer.
    assert_eq!(&image.rgba[8..12], [1, 2, 3, 255]);
    // Exporting twice yields the same buffer; nothing mutates.
    assert_eq!(engine.export_image(), image);
}
