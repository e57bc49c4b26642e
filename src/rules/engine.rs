//! Turn engine: validates and applies player actions.
//!
//! One player acts at a time (`current_player_index`). Every completed
//! action hands the turn to the next seat, round-robin. Drawing a tile is
//! the exception: it fills the held slot and the same player must place
//! that tile before doing anything else.
//!
//! Rejections leave the input snapshot untouched; accepted actions return
//! a new snapshot with `version` bumped.

use tracing::debug;

use crate::board::Position;
use crate::core::action::{Action, LogEvent};
use crate::core::error::{GameError, MoveRejection, Shortage};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Can this player do anything other than pass?
///
/// True when an empty cell exists and the player has an unplaced castle,
/// the supply is nonempty, the player still holds a starting tile, or the
/// player is holding a drawn tile. Unknown players cannot act.
#[must_use]
pub fn can_act(state: &GameState, player: &PlayerId) -> bool {
    let Some(index) = state.player_index(player) else {
        return false;
    };
    if !state.board.has_empty_cell() {
        return false;
    }

    let seat = &state.players[index];
    let holds_drawn = state.held_tile.is_some() && index == state.current_player_index;

    seat.has_unplaced_castle() || !state.tile_supply.is_empty() || seat.starting_tile.is_some() || holds_drawn
}

/// Is there any seated player who can still act?
#[must_use]
pub fn anyone_can_act(state: &GameState) -> bool {
    state.players.iter().any(|p| can_act(state, &p.id))
}

/// Applies the five player actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine;

impl TurnEngine {
    /// Create a turn engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply `action` on behalf of `actor`.
    ///
    /// Returns the next snapshot, or the reason the action was rejected.
    pub fn apply(&self, state: &GameState, actor: &PlayerId, action: Action) -> Result<GameState, GameError> {
        match self.try_apply(state, actor, action) {
            Ok(next) => {
                debug!(player = %actor, %action, version = next.version, "applied action");
                Ok(next)
            }
            Err(err) => {
                debug!(player = %actor, %action, version = state.version, error = %err, "rejected action");
                Err(err)
            }
        }
    }

    fn try_apply(&self, state: &GameState, actor: &PlayerId, action: Action) -> Result<GameState, GameError> {
        if state.is_finished() {
            return Err(MoveRejection::MatchFinished.into());
        }
        let index = state.player_index(actor).ok_or(MoveRejection::UnknownPlayer)?;
        if index != state.current_player_index {
            return Err(MoveRejection::NotYourTurn.into());
        }
        if state.held_tile.is_some() && !matches!(action, Action::PlaceHeldTile { .. }) {
            return Err(MoveRejection::TilePending.into());
        }

        let mut next = state.next_version();
        let event = match action {
            Action::PlaceCastle { castle, at } => {
                let owned = match state.players[index].castle(castle) {
                    Some(owned) => *owned,
                    None if state.players.iter().any(|p| p.castle(castle).is_some()) => {
                        return Err(MoveRejection::NotYourCastle.into());
                    }
                    None => return Err(MoveRejection::UnknownCastle.into()),
                };
                if !state.players[index].has_unplaced_castle() {
                    return Err(Shortage::NoCastles.into());
                }
                if owned.is_placed() {
                    return Err(MoveRejection::CastleAlreadyPlaced.into());
                }

                let placed = next.board.place_castle(at, owned)?;
                if let Some(slot) = next.players[index].castle_mut(castle) {
                    slot.position = placed.position;
                }
                LogEvent::CastlePlaced { castle, rank: placed.rank, at }
            }
            Action::DrawTile => {
                if !next.board.has_empty_cell() {
                    return Err(Shortage::BoardFull.into());
                }
                let tile = next.tile_supply.pop_front().ok_or(Shortage::NoTiles)?;
                next.held_tile = Some(tile);
                LogEvent::TileDrawn { tile }
            }
            Action::PlaceHeldTile { at } => {
                let tile = next.held_tile.ok_or(Shortage::NoHeldTile)?;
                let placed = next.board.place_tile(at, tile)?;
                next.held_tile = None;
                LogEvent::TilePlaced { tile: placed, at }
            }
            Action::PlaceStartingTile { at } => {
                let tile = next.players[index].starting_tile.ok_or(Shortage::NoStartingTile)?;
                let placed = next.board.place_tile(at, tile)?;
                next.players[index].starting_tile = None;
                LogEvent::StartingTilePlaced { tile: placed, at }
            }
            Action::Pass => {
                if can_act(state, actor) {
                    return Err(MoveRejection::CannotPass.into());
                }
                LogEvent::Passed
            }
        };

        next.record(Some(actor.clone()), event);
        if action.advances_turn() {
            next.advance_turn();
        }
        Ok(next)
    }

    /// Every action `player` could legally submit right now.
    ///
    /// Empty when it is not the player's turn or the match is over. Actions
    /// whose resources are missing are left out rather than reported.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, player: &PlayerId) -> Vec<Action> {
        if state.is_finished() || state.current_player().id != *player {
            return Vec::new();
        }

        let empty: Vec<Position> = state.board.empty_positions().collect();
        if state.held_tile.is_some() {
            return empty.into_iter().map(|at| Action::PlaceHeldTile { at }).collect();
        }

        let seat = state.current_player();
        let mut actions = Vec::new();
        for castle in seat.unplaced_castles() {
            actions.extend(empty.iter().map(|&at| Action::PlaceCastle { castle: castle.id, at }));
        }
        if seat.starting_tile.is_some() {
            actions.extend(empty.iter().map(|&at| Action::PlaceStartingTile { at }));
        }
        if !state.tile_supply.is_empty() && !empty.is_empty() {
            actions.push(Action::DrawTile);
        }
        if actions.is_empty() {
            actions.push(Action::Pass);
        }
        actions
    }

    /// Remove a departing player from the roster.
    ///
    /// The turn keeps pointing at the same logical player: the index drops
    /// by one when an earlier seat leaves, and when the current player
    /// leaves the turn passes to the next seat. A tile the departing player
    /// had drawn goes back to the front of the supply. Their castles stay
    /// on the board but no longer score for anyone.
    pub fn remove_player(&self, state: &GameState, player: &PlayerId) -> Result<GameState, GameError> {
        if state.is_finished() {
            return Err(MoveRejection::MatchFinished.into());
        }
        let index = state.player_index(player).ok_or(MoveRejection::UnknownPlayer)?;
        if state.player_count() == 1 {
            return Err(MoveRejection::LastPlayer.into());
        }

        let mut next = state.next_version();
        if index == next.current_player_index {
            if let Some(tile) = next.held_tile.take() {
                next.tile_supply.push_front(tile);
            }
        }

        next.players.remove(index);
        if index < next.current_player_index {
            next.current_player_index -= 1;
        } else if next.current_player_index >= next.players.len() {
            next.current_player_index = 0;
        }

        next.record(Some(player.clone()), LogEvent::PlayerLeft);
        debug!(player = %player, version = next.version, "player left");
        Ok(next)
    }
}
