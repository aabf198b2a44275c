//! Engine behaviour through the public API.

use rust_2048::{
    Board, Direction, Game, GameConfig, GameResult, Position, ScriptedRng, Snapshot, Spawn, Tile,
    CELLS,
};

fn board_game(rows: [[u32; 4]; 4], rng: ScriptedRng) -> Game<ScriptedRng> {
    Game::from_board(GameConfig::default(), rng, Board::from_rows(rows))
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_invariant_across_seeds() {
    for seed in 0..200 {
        let game = Game::new(seed);
        let placed: Vec<_> = game
            .board()
            .cells()
            .iter()
            .filter(|tile| !tile.is_empty())
            .collect();

        assert_eq!(placed.len(), 2, "seed {seed}");
        assert!(placed.iter().all(|t| **t == Tile::new(2) || **t == Tile::new(4)));
        assert_eq!(game.score(), 0);
        assert!(!game.is_won());
        assert!(!game.is_lost());
    }
}

#[test]
fn test_reset_after_win_clears_flags() {
    let mut game = board_game([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], ScriptedRng::default());
    game.apply_move(Direction::Left);
    assert!(game.is_won());

    game.reset();
    assert!(!game.is_won());
    assert_eq!(game.score(), 0);
    assert_eq!(game.result(), None);
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_single_pass_merge() {
    let mut game = board_game([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]], ScriptedRng::new([0], [false]));
    let outcome = game.apply_move(Direction::Left);

    assert_eq!(outcome.score_gained, 8);
    assert_eq!(outcome.merges, 2);
    assert_eq!(game.score(), 8);
    assert_eq!(game.cell(0, 0), Tile::new(4));
    assert_eq!(game.cell(1, 0), Tile::new(4));
    // The spawn took the first empty cell of the row.
    assert_eq!(game.cell(2, 0), Tile::new(2));
    assert_eq!(game.cell(3, 0), Tile::EMPTY);
}

#[test]
fn test_no_op_move_leaves_everything() {
    let rows = [[2, 4, 8, 16], [4, 0, 0, 0], [0; 4], [0; 4]];
    let mut game = board_game(rows, ScriptedRng::new([0], [true]));
    let before = *game.state();

    let outcome = game.apply_move(Direction::Left);

    assert!(!outcome.effective);
    assert!(outcome.spawned.is_none());
    assert_eq!(*game.state(), before);
    // The spawn decisions were never drawn.
    assert_eq!(game.rng().remaining(), (1, 1));
}

#[test]
fn test_each_direction_moves_toward_its_edge() {
    let rows = [[0; 4], [0, 2, 0, 0], [0; 4], [0; 4]];
    let expected = [
        (Direction::Left, Position::new(0, 1)),
        (Direction::Right, Position::new(3, 1)),
        (Direction::Up, Position::new(1, 0)),
        (Direction::Down, Position::new(1, 3)),
    ];

    for (direction, target) in expected {
        let game = board_game(rows, ScriptedRng::default());
        let shifted = game.preview(direction);
        assert_eq!(shifted.board.at(target), Tile::new(2), "{direction}");
        assert_eq!(shifted.board.empty_count(), CELLS - 1);
    }
}

#[test]
fn test_score_accumulates_across_moves() {
    let rows = [[4, 4, 8, 0], [0; 4], [0; 4], [0; 4]];
    // Spawns land in the bottom-right corner, away from the top row.
    let mut game = board_game(rows, ScriptedRng::new([usize::MAX, usize::MAX], [false, false]));

    game.apply_move(Direction::Left);
    assert_eq!(game.score(), 8);

    game.apply_move(Direction::Left);
    assert_eq!(game.score(), 8 + 16);
    assert_eq!(game.cell(0, 0), Tile::new(16));
}

// =============================================================================
// Terminal States
// =============================================================================

#[test]
fn test_win_trigger_persists() {
    let rows = [[1024, 1024, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]];
    let mut game = board_game(rows, ScriptedRng::default());

    let outcome = game.apply_move(Direction::Left);
    assert!(outcome.effective);
    assert_eq!(outcome.score_gained, 2048);
    assert!(game.is_won());
    assert_eq!(game.result(), Some(GameResult::Won));

    for direction in Direction::ALL {
        game.apply_move(direction);
        assert!(game.is_won());
    }
}

#[test]
fn test_win_needs_a_merge() {
    // Holding a 2048 that was placed, not merged, is not a win.
    let game = board_game([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]], ScriptedRng::default());
    assert!(!game.is_won());
}

#[test]
fn test_custom_win_tile() {
    let config = GameConfig::new().with_win_tile(16);
    let board = Board::from_rows([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut game = Game::from_board(config, ScriptedRng::default(), board);

    game.apply_move(Direction::Right);
    assert!(game.is_won());
}

#[test]
fn test_loss_detected_after_filling_move() {
    let rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [0, 4, 2, 4]];
    let mut game = board_game(rows, ScriptedRng::new([0], [false]));
    assert!(!game.is_lost());

    let outcome = game.apply_move(Direction::Left);

    assert_eq!(
        outcome.spawned,
        Some(Spawn {
            position: Position::new(3, 3),
            tile: Tile::new(2),
        })
    );
    assert!(game.is_lost());
    assert!(!game.can_move());
    assert_eq!(game.result(), Some(GameResult::Lost));
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_loss_flips_with_one_cell() {
    let stuck = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let game = board_game(stuck, ScriptedRng::default());
    assert!(game.is_lost());
    assert!(!game.can_move());

    let mut paired = stuck;
    paired[3][3] = 4;
    let game = board_game(paired, ScriptedRng::default());
    assert!(!game.is_lost());
    assert!(game.can_move());
}

// =============================================================================
// Randomness
// =============================================================================

#[test]
fn test_scripted_end_to_end() {
    // Reset: first empty cell twice, both 2s. After the move: sixth empty cell, a 4.
    let rng = ScriptedRng::new([0, 0, 5], [false, false, true]);
    let mut game = Game::from_rng(GameConfig::default(), rng);

    assert_eq!(
        game.board().to_rows(),
        [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]
    );

    let outcome = game.apply_move(Direction::Left);

    assert!(outcome.effective);
    assert_eq!(outcome.score_gained, 4);
    assert_eq!(
        outcome.spawned,
        Some(Spawn {
            position: Position::new(2, 1),
            tile: Tile::new(4),
        })
    );
    assert_eq!(
        game.board().to_rows(),
        [[4, 0, 0, 0], [0, 0, 4, 0], [0; 4], [0; 4]]
    );
    assert_eq!(game.score(), 4);
}

#[test]
fn test_seeded_games_are_deterministic() {
    let moves = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Up,
    ];

    let mut game1 = Game::new(2024);
    let mut game2 = Game::new(2024);
    for direction in moves {
        assert_eq!(game1.apply_move(direction), game2.apply_move(direction));
    }
    assert_eq!(game1.state(), game2.state());
}

#[test]
fn test_spawn_distribution() {
    let config = GameConfig::new().with_starting_tiles(1);
    let mut game = Game::with_config(config, 99);

    let trials = 20_000;
    let mut fours = 0;
    let mut positions = [0u32; CELLS];

    for _ in 0..trials {
        game.reset();
        let (index, tile) = game
            .board()
            .cells()
            .iter()
            .enumerate()
            .find(|(_, tile)| !tile.is_empty())
            .expect("reset places a tile");
        positions[index] += 1;
        if tile.value() == 4 {
            fours += 1;
        } else {
            assert_eq!(tile.value(), 2);
        }
    }

    let four_rate = f64::from(fours) / f64::from(trials);
    assert!((0.085..0.115).contains(&four_rate), "four rate {four_rate}");

    let expected = f64::from(trials) / CELLS as f64;
    for count in positions {
        let ratio = f64::from(count) / expected;
        assert!((0.8..1.2).contains(&ratio), "position ratio {ratio}");
    }
}

// =============================================================================
// History, Replay, Snapshots
// =============================================================================

fn play_sequence(game: &mut Game, count: usize) {
    for i in 0..count {
        game.apply_move(Direction::ALL[i % 4]);
    }
}

#[test]
fn test_history_records_every_move() {
    let mut game = Game::new(5);
    play_sequence(&mut game, 12);

    assert_eq!(game.history().len(), 12);
    let effective = game.history().iter().filter(|r| r.outcome.effective).count();
    assert_eq!(effective as u32, game.state().moves);
}

#[test]
fn test_replay_matches_original() {
    let mut game = Game::new(31);
    play_sequence(&mut game, 40);

    let directions: Vec<_> = game.history().iter().map(|r| r.direction).collect();
    let replayed = Game::replay(GameConfig::default(), 31, &directions);

    assert_eq!(replayed.state(), game.state());
    assert_eq!(replayed.history(), game.history());
}

#[test]
fn test_snapshot_resumes_identically() {
    let mut game = Game::new(77);
    play_sequence(&mut game, 10);

    let bytes = game.snapshot().to_bytes().unwrap();
    play_sequence(&mut game, 25);

    let snapshot = Snapshot::from_bytes(&bytes).unwrap();
    let mut restored = Game::restore(&snapshot);
    assert_eq!(restored.history().len(), 10);
    play_sequence(&mut restored, 25);

    assert_eq!(restored.state(), game.state());
}
