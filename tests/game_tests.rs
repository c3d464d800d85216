//! Game loop tests - the move -> spawn -> terminal-check cycle, spawning
//! edge cases, and history recording through the store trait.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use z048::core::{spawn_tile, Board, Game, GameConfig, GameError};
use z048::history::{HistoryStore, MemoryHistory};
use z048::types::Direction;

#[test]
fn test_game_starts_with_two_spawned_tiles() {
    let game = Game::new(GameConfig::default(), 7).unwrap();
    let tiles = game.board().occupied_cells();
    assert_eq!(tiles.len(), 2);
    for (_, _, value) in tiles {
        assert!(value == 2 || value == 4, "unexpected opening tile {value}");
    }
}

#[test]
fn test_spawn_into_the_single_remaining_cell() {
    let mut board = Board::from_rows(&[vec![2, 4], vec![0, 8]]).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let pos = spawn_tile(&mut board, &mut rng, None).unwrap();
    assert_eq!(pos, (1, 0));
    let value = board.get(1, 0).unwrap();
    assert!(value == 2 || value == 4);
}

#[test]
fn test_spawn_out_of_space() {
    let mut board = Board::from_rows(&[vec![2, 4], vec![8, 16]]).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    assert_eq!(
        spawn_tile(&mut board, &mut rng, None),
        Err(GameError::OutOfSpace)
    );
}

#[test]
fn test_forced_spawn_rejects_non_power_of_two() {
    let mut board = Board::new(4, 4, 0.8).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        spawn_tile(&mut board, &mut rng, Some(12)),
        Err(GameError::Configuration { .. })
    ));
    assert_eq!(board.empty_count(), 16);
}

#[test]
fn test_step_without_movement_changes_nothing() {
    let board = Board::from_rows(&[vec![2, 0, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
    let mut game = Game::from_board(board, 2);

    // The lone tile is already in the top-left corner.
    for dir in [Direction::Up, Direction::Left] {
        let outcome = game.step(dir);
        assert!(!outcome.moved);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.spawned, None);
        assert_eq!(game.board().occupied_cells().len(), 1);
    }

    let outcome = game.step(Direction::Right);
    assert!(outcome.moved);
    assert_eq!(game.board().occupied_cells().len(), 2);
}

#[test]
fn test_full_random_game_records_history() {
    let store = MemoryHistory::new();
    let config = GameConfig {
        rows: 3,
        cols: 3,
        spawn_bias: 0.8,
    };

    for seed in 0..20u64 {
        let mut game = Game::new(config, seed).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        while !game.is_over() {
            let legal = game.legal_directions();
            assert!(!legal.is_empty());
            let pick = rng.gen_range(0..legal.len());
            game.step(legal[pick]);
        }
        assert!(!game.board().has_empty());
        store.record(game.max_tile()).unwrap();
    }

    let history = store.load().unwrap();
    assert_eq!(history.values().sum::<u32>(), 20);
    for tile in history.keys() {
        assert!(tile.is_power_of_two() && *tile >= 4, "odd final tile {tile}");
    }
}

#[test]
fn test_snapshot_tracks_the_game() {
    let mut game = Game::new(GameConfig::default(), 31).unwrap();
    let start = game.snapshot();
    assert_eq!(start.tiles.len(), 2);
    assert_eq!(start.moves, 0);

    let mut moved = 0;
    for dir in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
        if game.step(dir).moved {
            moved += 1;
        }
    }
    let snap = game.snapshot();
    assert_eq!(snap.moves, moved);
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.seed, 31);
}
