use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{CellState, EngineError, GameEngine, GameStatus, MoveOutcome};

fn started_engine(seed: u64, size: i32) -> Option<GameEngine> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    match engine.start_new_game(&mut rng, "Alice", "Bob", size) {
        Ok(()) => Some(engine),
        // placement can exhaust its budget for an unlucky seed
        Err(EngineError::PlacementExhausted) => None,
        Err(err) => panic!("unexpected start error: {}", err),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn start_yields_player_zero_in_progress(seed in any::<u64>(), size in 10..=20i32) {
        let Some(engine) = started_engine(seed, size) else { return Ok(()); };
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert_eq!(engine.current_player(), 0);
        prop_assert!(engine.board(0).is_some());
        prop_assert!(engine.board(1).is_some());
    }

    #[test]
    fn turn_advances_exactly_on_miss(seed in any::<u64>(), move_seed in any::<u64>(), moves in 1..80usize) {
        let Some(mut engine) = started_engine(seed, 10) else { return Ok(()); };
        let mut move_rng = SmallRng::seed_from_u64(move_seed);

        let mut expected_player = 0;
        for _ in 0..moves {
            if engine.status() != GameStatus::InProgress {
                break;
            }
            let x = move_rng.random_range(-1..11);
            let y = move_rng.random_range(-1..11);
            let before = engine.current_player();
            prop_assert_eq!(before, expected_player);

            match engine.make_move(x, y).unwrap() {
                MoveOutcome::Miss => expected_player = (expected_player + 1) % 2,
                MoveOutcome::Hit | MoveOutcome::Sunk => {}
            }
            prop_assert_eq!(engine.current_player(), expected_player);
        }
    }

    #[test]
    fn outcomes_match_target_cell_state(seed in any::<u64>(), x in 0..10i32, y in 0..10i32) {
        let Some(mut engine) = started_engine(seed, 10) else { return Ok(()); };
        let target = engine.board(1).unwrap().cell(x, y).unwrap();
        let outcome = engine.make_move(x, y).unwrap();
        match target {
            CellState::Ship => prop_assert!(
                outcome == MoveOutcome::Hit || outcome == MoveOutcome::Sunk
            ),
            _ => prop_assert_eq!(outcome, MoveOutcome::Miss),
        }
    }

    #[test]
    fn completed_game_rejects_further_moves(seed in any::<u64>()) {
        let Some(mut engine) = started_engine(seed, 10) else { return Ok(()); };

        // sweep every cell of the opponent board as player 0; hits retain
        // the turn and misses hand it to player 1, who immediately wastes
        // a turn off-board to hand it back
        'sweep: for y in 0..10 {
            for x in 0..10 {
                if engine.status() != GameStatus::InProgress {
                    break 'sweep;
                }
                if engine.current_player() == 1 {
                    prop_assert_eq!(engine.make_move(-1, -1).unwrap(), MoveOutcome::Miss);
                }
                engine.make_move(x, y).unwrap();
            }
        }

        prop_assert_eq!(engine.status(), GameStatus::Completed);
        prop_assert_eq!(
            engine.make_move(0, 0).unwrap_err(),
            EngineError::InvalidState
        );
    }
}
