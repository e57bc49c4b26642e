//! Turn engine tests.
//!
//! These tests drive matches through the public `TurnEngine` API:
//! - Turn order and rotation
//! - Castle and tile placement rules
//! - Drawing and the held-tile slot
//! - Passing
//! - Rejections leave the snapshot untouched

use kingdoms::board::{Cell, Position};
use kingdoms::core::{Action, GameError, GameState, LogEvent, MatchConfig, MoveRejection, PlayerId, Shortage};
use kingdoms::rules::{can_act, TurnEngine};

fn p(id: &str) -> PlayerId {
    PlayerId::new(id)
}

fn new_match(players: usize) -> GameState {
    GameState::new(&MatchConfig::seated(42, players)).unwrap()
}

/// Strip a player of everything they could place.
fn empty_handed(state: &mut GameState, index: usize) {
    state.players[index].castles.clear();
    state.players[index].starting_tile = None;
}

/// Turns rotate through every seat and wrap around.
#[test]
fn test_turn_rotation() {
    let engine = TurnEngine::new();
    let mut state = new_match(3);
    let order = ["p1", "p2", "p3", "p1"];

    for (col, who) in order.iter().enumerate() {
        assert_eq!(state.current_player().id, p(who));
        let castle = state.current_player().unplaced_castles().next().unwrap().id;
        state = engine
            .apply(&state, &p(who), Action::PlaceCastle { castle, at: Position::new(0, col) })
            .unwrap();
    }

    assert_eq!(state.current_player().id, p("p2"));
    assert_eq!(state.version, 4);
}

/// Acting out of turn is rejected.
#[test]
fn test_not_your_turn() {
    let engine = TurnEngine::new();
    let state = new_match(2);

    assert_eq!(
        engine.apply(&state, &p("p2"), Action::DrawTile),
        Err(GameError::InvalidMove(MoveRejection::NotYourTurn))
    );
    assert_eq!(
        engine.apply(&state, &p("stranger"), Action::DrawTile),
        Err(GameError::InvalidMove(MoveRejection::UnknownPlayer))
    );
}

/// Placing a castle puts it on the board and marks it placed.
#[test]
fn test_place_castle() {
    let engine = TurnEngine::new();
    let state = new_match(2);
    let castle = state.players[0].castles[0];
    let at = Position::new(2, 3);

    let next = engine
        .apply(&state, &p("p1"), Action::PlaceCastle { castle: castle.id, at })
        .unwrap();

    let on_board = next.board.get(at).and_then(Cell::castle).copied().unwrap();
    assert_eq!(on_board.id, castle.id);
    assert_eq!(on_board.position, Some(at));
    assert_eq!(next.players[0].castle(castle.id).unwrap().position, Some(at));
    assert!(matches!(
        next.log.back().map(|e| &e.event),
        Some(LogEvent::CastlePlaced { rank: 1, .. })
    ));
}

/// Castle placement rejections, in the order they are checked.
#[test]
fn test_place_castle_rejections() {
    let engine = TurnEngine::new();
    let state = new_match(2);
    let mine = state.players[0].castles[0].id;
    let theirs = state.players[1].castles[0].id;
    let at = Position::new(0, 0);

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: theirs, at }),
        Err(GameError::InvalidMove(MoveRejection::NotYourCastle))
    );
    assert_eq!(
        engine.apply(
            &state,
            &p("p1"),
            Action::PlaceCastle { castle: kingdoms::core::CastleId(9999), at }
        ),
        Err(GameError::InvalidMove(MoveRejection::UnknownCastle))
    );
    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: mine, at: Position::new(5, 0) }),
        Err(GameError::InvalidMove(MoveRejection::OutOfBounds))
    );

    // Occupy (0, 0), come back around to p1 and try to reuse it.
    let state = engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: mine, at }).unwrap();
    let state = engine.apply(&state, &p("p2"), Action::PlaceStartingTile { at: Position::new(4, 5) }).unwrap();
    let other = state.players[0].unplaced_castles().next().unwrap().id;

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: other, at }),
        Err(GameError::InvalidMove(MoveRejection::CellOccupied))
    );
    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: mine, at: Position::new(1, 1) }),
        Err(GameError::InvalidMove(MoveRejection::CastleAlreadyPlaced))
    );
}

/// A player whose castles are all placed gets `NoCastles`.
#[test]
fn test_no_castles_left() {
    let engine = TurnEngine::new();
    let mut state = new_match(2);
    let at = Position::new(4, 4);
    for castle in &mut state.players[0].castles {
        castle.position = Some(at);
    }
    let id = state.players[0].castles[0].id;

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceCastle { castle: id, at: Position::new(0, 0) }),
        Err(GameError::ResourceUnavailable(Shortage::NoCastles))
    );
}

/// Drawing fills the held slot and keeps the turn.
#[test]
fn test_draw_keeps_turn() {
    let engine = TurnEngine::new();
    let state = new_match(2);
    let front = *state.tile_supply.front().unwrap();

    let drawn = engine.apply(&state, &p("p1"), Action::DrawTile).unwrap();
    assert_eq!(drawn.held_tile, Some(front));
    assert_eq!(drawn.tile_supply.len(), state.tile_supply.len() - 1);
    assert_eq!(drawn.current_player().id, p("p1"));

    let at = Position::new(1, 1);
    let placed = engine.apply(&drawn, &p("p1"), Action::PlaceHeldTile { at }).unwrap();
    assert!(placed.held_tile.is_none());
    assert_eq!(placed.board.get(at).and_then(Cell::tile).map(|t| t.id), Some(front.id));
    assert_eq!(placed.current_player().id, p("p2"));
}

/// While a tile is held, nothing but placing it is accepted.
#[test]
fn test_held_tile_must_be_placed_first() {
    let engine = TurnEngine::new();
    let drawn = engine.apply(&new_match(2), &p("p1"), Action::DrawTile).unwrap();
    let castle = drawn.players[0].castles[0].id;

    for action in [
        Action::DrawTile,
        Action::Pass,
        Action::PlaceStartingTile { at: Position::new(0, 0) },
        Action::PlaceCastle { castle, at: Position::new(0, 0) },
    ] {
        assert_eq!(
            engine.apply(&drawn, &p("p1"), action),
            Err(GameError::InvalidMove(MoveRejection::TilePending))
        );
    }
}

/// Placing a tile that was never drawn is a resource error.
#[test]
fn test_place_without_held_tile() {
    let engine = TurnEngine::new();
    assert_eq!(
        engine.apply(&new_match(2), &p("p1"), Action::PlaceHeldTile { at: Position::new(0, 0) }),
        Err(GameError::ResourceUnavailable(Shortage::NoHeldTile))
    );
}

/// Drawing from an empty supply fails.
#[test]
fn test_draw_from_empty_supply() {
    let engine = TurnEngine::new();
    let mut state = new_match(2);
    state.tile_supply.clear();

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::DrawTile),
        Err(GameError::ResourceUnavailable(Shortage::NoTiles))
    );
}

/// The starting tile can be placed once.
#[test]
fn test_starting_tile_once() {
    let engine = TurnEngine::new();
    let state = new_match(2);
    let tile = state.players[0].starting_tile.unwrap();

    let state = engine
        .apply(&state, &p("p1"), Action::PlaceStartingTile { at: Position::new(0, 0) })
        .unwrap();
    assert!(state.players[0].starting_tile.is_none());
    assert_eq!(state.board.get(Position::new(0, 0)).and_then(Cell::tile).map(|t| t.id), Some(tile.id));

    let state = engine.apply(&state, &p("p2"), Action::DrawTile).unwrap();
    let state = engine.apply(&state, &p("p2"), Action::PlaceHeldTile { at: Position::new(0, 1) }).unwrap();

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::PlaceStartingTile { at: Position::new(0, 2) }),
        Err(GameError::ResourceUnavailable(Shortage::NoStartingTile))
    );
}

/// Passing is only allowed when nothing else is possible.
#[test]
fn test_pass_rules() {
    let engine = TurnEngine::new();
    let state = new_match(2);

    assert_eq!(
        engine.apply(&state, &p("p1"), Action::Pass),
        Err(GameError::InvalidMove(MoveRejection::CannotPass))
    );

    let mut stuck = state.clone();
    empty_handed(&mut stuck, 0);
    stuck.tile_supply.clear();
    assert!(!can_act(&stuck, &p("p1")));
    assert!(can_act(&stuck, &p("p2")));

    let passed = engine.apply(&stuck, &p("p1"), Action::Pass).unwrap();
    assert_eq!(passed.current_player().id, p("p2"));
    assert_eq!(passed.version, stuck.version + 1);
    assert_eq!(engine.legal_actions(&stuck, &p("p1")), vec![Action::Pass]);
}

/// A rejected action changes nothing, including the version.
#[test]
fn test_rejection_leaves_state_unchanged() {
    let engine = TurnEngine::new();
    let state = new_match(3);
    let before = state.clone();

    let _ = engine.apply(&state, &p("p1"), Action::Pass);
    let _ = engine.apply(&state, &p("p2"), Action::DrawTile);
    let _ = engine.apply(&state, &p("p1"), Action::PlaceHeldTile { at: Position::new(0, 0) });

    assert_eq!(state, before);
}

/// Accepted actions return a new version and leave the input alone.
#[test]
fn test_apply_returns_new_snapshot() {
    let engine = TurnEngine::new();
    let state = new_match(2);
    let before = state.clone();

    let next = engine.apply(&state, &p("p1"), Action::DrawTile).unwrap();
    assert_eq!(next.version, 1);
    assert_eq!(state, before);
    assert_eq!(next.log.len(), state.log.len() + 1);
}

/// Every listed legal action is accepted by the engine.
#[test]
fn test_legal_actions_are_accepted() {
    let engine = TurnEngine::new();
    let state = new_match(4);
    let actor = p("p1");

    for action in engine.legal_actions(&state, &actor) {
        assert!(engine.apply(&state, &actor, action).is_ok(), "{action} was rejected");
    }
}

/// A player who leaves is removed and the turn stays sensible.
#[test]
fn test_player_leaves_mid_match() {
    let engine = TurnEngine::new();
    let state = new_match(3);
    let state = engine.apply(&state, &p("p1"), Action::PlaceStartingTile { at: Position::new(0, 0) }).unwrap();
    assert_eq!(state.current_player().id, p("p2"));

    let next = engine.remove_player(&state, &p("p2")).unwrap();
    assert_eq!(next.player_count(), 2);
    assert_eq!(next.current_player().id, p("p3"));
    assert!(next.player(&p("p2")).is_none());
    assert_eq!(next.log.back().map(|e| &e.event), Some(&LogEvent::PlayerLeft));

    assert_eq!(
        engine.apply(&next, &p("p2"), Action::DrawTile),
        Err(GameError::InvalidMove(MoveRejection::UnknownPlayer))
    );
}
