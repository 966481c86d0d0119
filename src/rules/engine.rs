//! Turn engine.
//!
//! `GameSession` owns all per-game state and drives a round:
//!
//! ```text
//! PlayerMain ─advance_turn─▶ PlayerCombat ▶ PlayerActivation
//!            ▶ OpponentMain ▶ OpponentCombat ▶ OpponentActivation ▶ PlayerMain
//! ```
//!
//! with `GameOver` entered after any combat pass that leaves a combatant at
//! zero health. `advance_turn` runs the whole cycle synchronously; outside
//! of it the session is always in `PlayerMain` or `GameOver`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::combat::{CombatReport, CombatResolver};
use super::removal::{PendingRemoval, RemovalQueue};
use super::strategy::{GreedyAttackStrategy, SummonChoice, SummonStrategy, SummonView};
use crate::cards::{standard_pool, CardPool, Creature};
use crate::core::{Combatant, GameConfig, GameRng, RandomSource, Side, SideMap, SLOT_COUNT};
use crate::error::GameError;
use crate::events::{EventSink, GameEvent, NullSink};
use crate::zones::Battlefield;

/// Where the session is within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerMain,
    PlayerCombat,
    PlayerActivation,
    OpponentMain,
    OpponentCombat,
    OpponentActivation,
    GameOver,
}

/// What happened during one `advance_turn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Shared turn counter after the advance.
    pub turn: u32,
    pub player_combat: CombatReport,
    /// `None` if the game ended before the opponent acted.
    pub opponent_combat: Option<CombatReport>,
    pub opponent_summon: Option<SummonChoice>,
    pub winner: Option<Side>,
}

/// One game between the player and the scripted opponent.
///
/// Generic over the opponent's strategy `S`, its random source `R`, and the
/// notification sink `K`, so hosts and tests can substitute each one.
///
/// ## Example
///
/// ```
/// use slot_duel::{GameConfig, GameSession, Side, PLAYER_ROW};
///
/// let mut game = GameSession::new(GameConfig::default());
/// game.start_game();
/// assert_eq!(game.combatant(Side::Player).mana(), 1);
///
/// // Skeleton: 1 mana
/// game.summon(PLAYER_ROW, 0, 0, Side::Player).unwrap();
/// let report = game.advance_turn().unwrap();
/// assert_eq!(report.turn, 2);
/// game.drain_removals();
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<S = GreedyAttackStrategy, R = GameRng, K = NullSink> {
    config: GameConfig,
    field: Battlefield,
    combatants: SideMap<Combatant>,
    turn: u32,
    opponent_turn: u32,
    phase: Phase,
    removals: RemovalQueue,
    strategy: S,
    rng: R,
    sink: K,
}

impl GameSession {
    /// A session with the greedy opponent seeded from `config.seed`, and no
    /// event sink.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let strategy = GreedyAttackStrategy::new(config.skip_undefended_chance);
        let rng = GameRng::new(config.seed).for_context("opponent");
        Self::with_parts(config, strategy, rng, NullSink)
    }
}

impl<S: SummonStrategy, R: RandomSource, K: EventSink> GameSession<S, R, K> {
    /// Assemble a session from explicit collaborators.
    pub fn with_parts(config: GameConfig, strategy: S, rng: R, sink: K) -> Self {
        let combatants = SideMap::new(|side| match side {
            Side::Player => Combatant::new(config.player_name.clone(), config.starting_health),
            Side::Opponent => Combatant::new(config.opponent_name.clone(), config.starting_health),
        });

        Self {
            config,
            field: Battlefield::new(),
            combatants,
            turn: 1,
            opponent_turn: 0,
            phase: Phase::PlayerMain,
            removals: RemovalQueue::new(),
            strategy,
            rng,
            sink,
        }
    }

    pub fn with_strategy<S2: SummonStrategy>(self, strategy: S2) -> GameSession<S2, R, K> {
        GameSession {
            config: self.config,
            field: self.field,
            combatants: self.combatants,
            turn: self.turn,
            opponent_turn: self.opponent_turn,
            phase: self.phase,
            removals: self.removals,
            strategy,
            rng: self.rng,
            sink: self.sink,
        }
    }

    pub fn with_rng<R2: RandomSource>(self, rng: R2) -> GameSession<S, R2, K> {
        GameSession {
            config: self.config,
            field: self.field,
            combatants: self.combatants,
            turn: self.turn,
            opponent_turn: self.opponent_turn,
            phase: self.phase,
            removals: self.removals,
            strategy: self.strategy,
            rng,
            sink: self.sink,
        }
    }

    pub fn with_sink<K2: EventSink>(self, sink: K2) -> GameSession<S, R, K2> {
        GameSession {
            config: self.config,
            field: self.field,
            combatants: self.combatants,
            turn: self.turn,
            opponent_turn: self.opponent_turn,
            phase: self.phase,
            removals: self.removals,
            strategy: self.strategy,
            rng: self.rng,
            sink,
        }
    }

    /// Start with the standard starter pool.
    pub fn start_game(&mut self) {
        self.start_with_pool(standard_pool());
    }

    /// Reset the board and wallets and install `pool`.
    ///
    /// Turn 1: the player gets turn-1 mana, the opponent none until its
    /// first phase.
    pub fn start_with_pool(&mut self, pool: CardPool) {
        self.field = Battlefield::with_pool(pool);
        self.combatants = SideMap::new(|side| {
            let name = match side {
                Side::Player => &self.config.player_name,
                Side::Opponent => &self.config.opponent_name,
            };
            Combatant::new(name.clone(), self.config.starting_health)
        });
        self.turn = 1;
        self.opponent_turn = 0;
        self.phase = Phase::PlayerMain;
        self.removals = RemovalQueue::new();

        let mana = self.config.mana_for_turn(self.turn);
        self.combatants[Side::Player].refill_mana(mana);

        debug!("game started: {} vs {}", self.combatants[Side::Player], self.combatants[Side::Opponent]);
        self.sink.notify(&GameEvent::GameStarted);
    }

    // === Actions ===

    /// Summon the card at `(row, col)` into `slot` for `side`.
    ///
    /// On failure nothing changes: no mana is spent, no slot is filled, and
    /// the pool template is never touched.
    pub fn summon(&mut self, row: usize, col: usize, slot: usize, side: Side) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let invalid = GameError::InvalidCoordinates { row, col, slot };
        if slot >= SLOT_COUNT {
            return Err(invalid);
        }
        let card = self.field.pool().get(row, col).cloned().ok_or(invalid)?;

        let wallet = &mut self.combatants[side];
        if !wallet.can_afford(&card) {
            return Err(GameError::InsufficientMana {
                required: card.mana_cost,
                available: wallet.mana(),
            });
        }
        if !self.field.is_vacant(slot, side) {
            return Err(GameError::SlotOccupied { side, slot });
        }

        let paid = wallet.pay(&card);
        debug_assert!(paid, "summon paid for an unaffordable card");
        let placed = self.field.place_creature(Creature::summon(&card, side), slot, side);
        debug_assert!(placed, "summon placed into a filled slot");

        debug!("{} summoned {} into slot {} ({} mana left)", side, card, slot, wallet.mana());
        self.sink.notify(&GameEvent::CreatureSummoned { side, slot, card });
        Ok(())
    }

    /// End the player's phase and play out the rest of the round.
    ///
    /// Any removals still pending from the previous round are drained first.
    /// Removals from the opponent's combat pass are left pending for the
    /// host to show and then `drain_removals`.
    pub fn advance_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.drain_removals();

        self.turn += 1;
        let mana = self.config.mana_for_turn(self.turn);
        self.combatants[Side::Player].refill_mana(mana);
        debug!("turn {}: player mana refilled to {}", self.turn, mana);
        self.sink.notify(&GameEvent::TurnAdvanced { turn: self.turn });

        let mut report = TurnReport {
            turn: self.turn,
            player_combat: CombatReport::default(),
            opponent_combat: None,
            opponent_summon: None,
            winner: None,
        };

        report.player_combat = self.combat_pass(Side::Player);
        if let Some(winner) = self.check_game_over() {
            report.winner = Some(winner);
            return Ok(report);
        }
        self.activate(Side::Player);

        // Player-pass deaths are cleared before the opponent looks at the board
        self.drain_removals();
        report.opponent_summon = self.opponent_phase();

        report.opponent_combat = Some(self.combat_pass(Side::Opponent));
        if let Some(winner) = self.check_game_over() {
            report.winner = Some(winner);
            return Ok(report);
        }
        self.activate(Side::Opponent);

        self.phase = Phase::PlayerMain;
        Ok(report)
    }

    /// Clear every creature waiting for removal. Returns how many were cleared.
    ///
    /// Calling it again with no new deaths changes nothing.
    pub fn drain_removals(&mut self) -> usize {
        if !self.removals.has_pending() {
            return 0;
        }
        self.removals.drain(&mut self.field, &mut self.sink).len()
    }

    // === Phases ===

    fn combat_pass(&mut self, side: Side) -> CombatReport {
        self.phase = match side {
            Side::Player => Phase::PlayerCombat,
            Side::Opponent => Phase::OpponentCombat,
        };

        let report = CombatResolver::resolve(
            &mut self.field,
            side,
            &mut self.combatants[side.opposite()],
            &mut self.removals,
            &mut self.sink,
        );
        debug!(
            "{} combat: {} exchanges, {} direct damage, {} deaths",
            side, report.exchanges, report.direct_damage, report.deaths
        );
        report
    }

    fn activate(&mut self, side: Side) {
        self.phase = match side {
            Side::Player => Phase::PlayerActivation,
            Side::Opponent => Phase::OpponentActivation,
        };

        for slot in self.field.activate_all(side) {
            self.sink.notify(&GameEvent::CreatureActivated { side, slot });
        }
    }

    /// Refill the opponent's wallet and let the strategy attempt one summon.
    fn opponent_phase(&mut self) -> Option<SummonChoice> {
        self.phase = Phase::OpponentMain;
        self.opponent_turn += 1;
        let mana = self.config.mana_for_turn(self.opponent_turn);
        self.combatants[Side::Opponent].refill_mana(mana);

        let view = SummonView {
            pool: self.field.pool(),
            row: self.config.opponent_row,
            own: self.field.creatures_of(Side::Opponent),
            enemy: self.field.creatures_of(Side::Player),
            wallet: &self.combatants[Side::Opponent],
        };
        let choice = self.strategy.choose_summon(&view, &mut self.rng)?;

        match self.summon(self.config.opponent_row, choice.col, choice.slot, Side::Opponent) {
            Ok(()) => Some(choice),
            Err(err) => {
                warn!("opponent strategy chose an illegal summon {:?}: {}", choice, err);
                None
            }
        }
    }

    fn check_game_over(&mut self) -> Option<Side> {
        let winner = self.winner()?;
        self.phase = Phase::GameOver;
        info!("game over on turn {}: {} wins", self.turn, winner);
        self.sink.notify(&GameEvent::GameOver { winner });
        Some(winner)
    }

    // === Queries ===

    /// True as soon as either combatant is at zero health.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.combatants.iter().any(|(_, c)| c.is_defeated())
    }

    /// The side still standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if self.combatants[Side::Player].is_defeated() {
            Some(Side::Opponent)
        } else if self.combatants[Side::Opponent].is_defeated() {
            Some(Side::Player)
        } else {
            None
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else {
            self.phase
        }
    }

    /// Shared turn counter (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of opponent phases played.
    #[must_use]
    pub fn opponent_turn(&self) -> u32 {
        self.opponent_turn
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    #[must_use]
    pub fn battlefield(&self) -> &Battlefield {
        &self.field
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn has_pending_removals(&self) -> bool {
        self.removals.has_pending()
    }

    #[must_use]
    pub fn pending_removals(&self) -> &[PendingRemoval] {
        self.removals.pending()
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }
}
