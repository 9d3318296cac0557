//! Core game engine: two named players, two boards and the turn-sequencing
//! state machine.

use crate::board::GameBoard;
use crate::common::{EngineError, GameStatus, MoveOutcome};
use crate::config::{fleet, MAX_MAP_SIZE, MAX_PLACE_ATTEMPTS, NUM_PLAYERS};
use log::{debug, info};
use rand::Rng;

/// Game engine holding at most one active game.
///
/// Each board holds that player's own fleet and is attacked by the opponent.
/// Starting a new game discards any prior state. The engine is synchronous
/// and not designed for interleaved mutation; a concurrent host must
/// serialize calls behind a single lock.
pub struct GameEngine {
    status: GameStatus,
    current_player: usize,
    players: [String; NUM_PLAYERS],
    boards: [Option<GameBoard>; NUM_PLAYERS],
}

impl GameEngine {
    /// Create an engine with no game started.
    pub fn new() -> Self {
        GameEngine {
            status: GameStatus::Unknown,
            current_player: 0,
            players: core::array::from_fn(|_| String::new()),
            boards: core::array::from_fn(|_| None),
        }
    }

    /// Current engine status. Pure read.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Name of the player at `index`, if a game has been started.
    pub fn player_name(&self, index: usize) -> Option<&str> {
        self.players
            .get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Board belonging to the player at `index`, if a game has been started.
    pub fn board(&self, index: usize) -> Option<&GameBoard> {
        self.boards.get(index).and_then(Option::as_ref)
    }

    /// Start a new game, replacing any previous one.
    ///
    /// Both names must be non-blank and `map_size` must be positive and at
    /// most [`MAX_MAP_SIZE`]; violations return
    /// [`EngineError::InvalidArgument`] without touching engine state. Board
    /// generation is atomic: either both boards are fully populated and the
    /// status becomes `InProgress` with player 0 to move, or the placement
    /// error propagates and the status resets to `Unknown`.
    pub fn start_new_game<R: Rng>(
        &mut self,
        rng: &mut R,
        player1: &str,
        player2: &str,
        map_size: i32,
    ) -> Result<(), EngineError> {
        if player1.trim().is_empty() {
            return Err(EngineError::InvalidArgument("player 1 name cannot be blank"));
        }
        if player2.trim().is_empty() {
            return Err(EngineError::InvalidArgument("player 2 name cannot be blank"));
        }
        if map_size <= 0 {
            return Err(EngineError::InvalidArgument(
                "map size must be a positive integer",
            ));
        }
        if map_size > MAX_MAP_SIZE {
            return Err(EngineError::InvalidArgument("map size cannot exceed 20"));
        }

        self.status = GameStatus::Initializing;
        let boards = match Self::generate_boards(rng, map_size) {
            Ok(boards) => boards,
            Err(err) => {
                self.status = GameStatus::Unknown;
                return Err(err);
            }
        };

        self.players = [player1.to_owned(), player2.to_owned()];
        self.boards = boards.map(Some);
        self.current_player = 0;
        self.status = GameStatus::InProgress;

        info!(
            "New game started between {} and {} on a {}x{} map.",
            player1, player2, map_size, map_size
        );
        for (index, board) in self.boards.iter().enumerate() {
            if let Some(board) = board {
                debug!("{}'s board:\n{}", self.players[index], board);
            }
        }
        info!("It's now {}'s turn.", self.players[self.current_player]);
        Ok(())
    }

    /// Submit a move for the current player against the opponent's board.
    ///
    /// Fails with [`EngineError::InvalidState`] unless a game is in
    /// progress. Coordinates outside the board waste the turn and count as a
    /// miss. A miss passes the turn to the opponent; a hit retains it. When
    /// a hit sinks the last ship of the opponent's fleet, the status moves
    /// to `Completed` and the current player is the winner.
    pub fn make_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::InvalidState);
        }
        let attacker = self.current_player;
        let defender = (attacker + 1) % NUM_PLAYERS;
        let board = self.boards[defender]
            .as_mut()
            .ok_or(EngineError::InvalidState)?;

        if !board.is_inside(x, y) {
            self.advance_turn();
            return Ok(MoveOutcome::Miss);
        }

        if !board.register_hit(x, y) {
            debug!("{}'s board:\n{}", self.players[defender], board);
            self.advance_turn();
            return Ok(MoveOutcome::Miss);
        }

        let sunk = board.is_ship_sunk(x, y);
        let fleet_destroyed = sunk && board.all_ships_sunk();
        debug!("{}'s board:\n{}", self.players[defender], board);

        info!("{} hit a ship at ({}, {})!", self.players[attacker], x, y);
        if !sunk {
            return Ok(MoveOutcome::Hit);
        }
        info!("{} sunk a ship!", self.players[attacker]);
        if fleet_destroyed {
            self.status = GameStatus::Completed;
            info!("{} wins the game!", self.players[attacker]);
        }
        Ok(MoveOutcome::Sunk)
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % NUM_PLAYERS;
        info!("It's now {}'s turn.", self.players[self.current_player]);
    }

    fn generate_boards<R: Rng>(
        rng: &mut R,
        map_size: i32,
    ) -> Result<[GameBoard; NUM_PLAYERS], EngineError> {
        let mut boards: [GameBoard; NUM_PLAYERS] =
            core::array::from_fn(|_| GameBoard::new(map_size));
        for board in boards.iter_mut() {
            for definition in fleet() {
                for _ in 0..definition.count {
                    board.place_randomly(rng, &definition.shape, MAX_PLACE_ATTEMPTS)?;
                }
            }
        }
        Ok(boards)
    }
}
