//! Thin HTTP adapter around the game engine.
//!
//! The routes translate engine results to transport-level representations
//! and carry no game logic of their own. The engine state machine is not
//! designed for interleaved mutation, so every handler funnels through one
//! mutex guarding the engine and its RNG.

use actix_web::{http::StatusCode, web, HttpResponse};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::common::{EngineError, GameStatus, MoveOutcome};
use crate::config::MAX_MAP_SIZE;
use crate::engine::GameEngine;

/// Map size floor enforced at the transport boundary only; the engine itself
/// accepts any positive size up to [`MAX_MAP_SIZE`].
const MIN_REQUEST_MAP_SIZE: i32 = 10;

/// One game slot: the engine and the RNG feeding its board generation.
struct GameSlot {
    engine: GameEngine,
    rng: SmallRng,
}

/// Shared application state for the HTTP handlers.
pub struct AppState {
    slot: Mutex<GameSlot>,
}

impl AppState {
    /// Create the shared state, optionally with a fixed RNG seed for
    /// reproducible board generation.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        AppState {
            slot: Mutex::new(GameSlot {
                engine: GameEngine::new(),
                rng,
            }),
        }
    }
}

/// New game description.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub player1_name: String,
    pub player2_name: String,
    /// Game map size. Must be between 10 and 20.
    pub map_size: i32,
}

/// Move coordinates on the opponent's board.
#[derive(Debug, Serialize, Deserialize)]
pub struct MoveRequest {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoveResponse {
    pub result: MoveOutcome,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: GameStatus,
}

/// HTTP error response with a JSON body carrying a stable code.
fn http_error_response(code: &str, message: &str, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": { "code": code, "message": message }
    }))
}

fn engine_error_response(err: EngineError) -> HttpResponse {
    let (code, status) = match err {
        EngineError::InvalidArgument(_) => ("INVALID_ARGUMENT", StatusCode::BAD_REQUEST),
        EngineError::PlacementExhausted => {
            ("PLACEMENT_EXHAUSTED", StatusCode::INTERNAL_SERVER_ERROR)
        }
        EngineError::InvalidState => ("INVALID_STATE", StatusCode::CONFLICT),
    };
    http_error_response(code, &err.to_string(), status)
}

fn lock_error_response() -> HttpResponse {
    http_error_response(
        "ENGINE_UNAVAILABLE",
        "engine state is unavailable",
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

async fn start_new_game(
    state: web::Data<AppState>,
    body: web::Json<NewGameRequest>,
) -> HttpResponse {
    if !(MIN_REQUEST_MAP_SIZE..=MAX_MAP_SIZE).contains(&body.map_size) {
        return http_error_response(
            "INVALID_ARGUMENT",
            "map size must be between 10 and 20",
            StatusCode::BAD_REQUEST,
        );
    }
    let Ok(mut slot) = state.slot.lock() else {
        return lock_error_response();
    };
    let GameSlot { engine, rng } = &mut *slot;
    match engine.start_new_game(rng, &body.player1_name, &body.player2_name, body.map_size) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => engine_error_response(err),
    }
}

async fn make_move(state: web::Data<AppState>, body: web::Json<MoveRequest>) -> HttpResponse {
    // Convenience range check at the boundary; the engine's own bounds check
    // still governs correctness for coordinates beyond the actual map.
    if !(0..=MAX_MAP_SIZE).contains(&body.x) || !(0..=MAX_MAP_SIZE).contains(&body.y) {
        return http_error_response(
            "INVALID_ARGUMENT",
            "coordinates must be between 0 and 20",
            StatusCode::BAD_REQUEST,
        );
    }
    let Ok(mut slot) = state.slot.lock() else {
        return lock_error_response();
    };
    match slot.engine.make_move(body.x, body.y) {
        Ok(result) => HttpResponse::Ok().json(MoveResponse { result }),
        Err(err) => engine_error_response(err),
    }
}

async fn game_status(state: web::Data<AppState>) -> HttpResponse {
    let Ok(slot) = state.slot.lock() else {
        return lock_error_response();
    };
    let status: GameStatus = slot.engine.status();
    HttpResponse::Ok().json(StatusResponse { status })
}

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/game/start").route(web::post().to(start_new_game)))
        .service(web::resource("/game/move").route(web::post().to(make_move)))
        .service(web::resource("/game/status").route(web::get().to(game_status)));
}
