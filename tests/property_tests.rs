//! Property tests over random action sequences.

use proptest::prelude::*;

use slot_duel::{
    GameConfig, GameError, GameSession, ScriptedRolls, Side, GameRng, PLAYER_ROW, SLOT_COUNT,
};

#[derive(Clone, Debug)]
enum Step {
    Summon { row: usize, col: usize, slot: usize },
    Advance,
    Drain,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..3, 0usize..10, 0usize..10).prop_map(|(row, col, slot)| Step::Summon { row, col, slot }),
        Just(Step::Advance),
        Just(Step::Drain),
    ]
}

proptest! {
    /// Mana, health, and slot invariants hold after every step.
    #[test]
    fn prop_session_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..80)) {
        let mut game = GameSession::new(GameConfig::default().with_seed(seed));
        game.start_game();

        for step in steps {
            let opponent_before = game.battlefield().occupied_count(Side::Opponent);
            let mana_before = game.combatant(Side::Player).mana();
            let field_before = game.battlefield().clone();

            match step {
                Step::Summon { row, col, slot } => {
                    if game.summon(row, col, slot, Side::Player).is_err() {
                        prop_assert_eq!(game.combatant(Side::Player).mana(), mana_before);
                        prop_assert_eq!(game.battlefield(), &field_before);
                    } else {
                        prop_assert!(game.combatant(Side::Player).mana() <= mana_before);
                    }
                }
                Step::Advance => match game.advance_turn() {
                    Ok(report) => {
                        let turn = game.turn();
                        prop_assert_eq!(report.turn, turn);
                        prop_assert_eq!(game.combatant(Side::Player).mana(), turn.min(10));
                        prop_assert!(game.combatant(Side::Opponent).mana() <= game.opponent_turn().min(10));
                        // At most one opponent summon per round
                        prop_assert!(game.battlefield().occupied_count(Side::Opponent) <= opponent_before + 1);
                        prop_assert_eq!(report.winner.is_some(), game.is_game_over());
                    }
                    Err(err) => {
                        prop_assert_eq!(err, GameError::GameOver);
                        prop_assert!(game.is_game_over());
                    }
                },
                Step::Drain => {
                    game.drain_removals();
                    let drained = game.battlefield().clone();
                    prop_assert_eq!(game.drain_removals(), 0);
                    prop_assert_eq!(game.battlefield(), &drained);
                    prop_assert!(!game.has_pending_removals());
                }
            }

            for side in Side::ALL {
                prop_assert!(game.combatant(side).health() <= 30);
                prop_assert!(game.battlefield().occupied_count(side) <= SLOT_COUNT);
            }
        }
    }

    /// A freshly summoned creature deals no damage in the round it was summoned.
    #[test]
    fn prop_summoning_sickness(col in 0usize..8, slot in 0usize..SLOT_COUNT, turns in 0usize..6) {
        let mut game = GameSession::new(GameConfig::default())
            .with_rng(ScriptedRolls::constant(0.0));
        game.start_game();

        // Ramp up mana without committing anything; the opponent only fills defended lanes
        for _ in 0..turns {
            game.advance_turn().unwrap();
            game.drain_removals();
        }
        let before = game.combatant(Side::Opponent).health();

        if game.summon(PLAYER_ROW, col, slot, Side::Player).is_ok() {
            let report = game.advance_turn().unwrap();
            prop_assert_eq!(report.player_combat.exchanges, 0);
            prop_assert_eq!(report.player_combat.direct_damage, 0);
            prop_assert_eq!(game.combatant(Side::Opponent).health(), before);
        }
    }

    /// Same seed, same opponent choices.
    #[test]
    fn prop_seeded_opponent_is_deterministic(seed in any::<u64>()) {
        let run = |seed: u64| {
            let mut game = GameSession::new(GameConfig::default()).with_rng(GameRng::new(seed));
            game.start_game();
            (0..6)
                .map(|_| {
                    let choice = game.advance_turn().ok().and_then(|r| r.opponent_summon);
                    game.drain_removals();
                    choice
                })
                .collect::<Vec<_>>()
        };

        prop_assert_eq!(run(seed), run(seed));
    }
}
