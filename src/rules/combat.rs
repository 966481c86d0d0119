//! Combat resolution.
//!
//! One combat pass walks every slot index in order. The acting side's
//! creature in slot `i` fights the defending side's creature in slot `i`,
//! or hits the defending combatant directly when that slot has no living
//! occupant.

use log::trace;
use serde::{Deserialize, Serialize};

use super::removal::RemovalQueue;
use crate::core::{Combatant, Side, SLOT_COUNT};
use crate::events::{EventSink, GameEvent};
use crate::zones::Battlefield;

/// Tally of one combat pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// Creature-versus-creature exchanges.
    pub exchanges: usize,
    /// Total attack sent straight at the defending combatant, saturating.
    pub direct_damage: u32,
    /// Creatures (either side) that died this pass.
    pub deaths: usize,
}

/// Stateless slot-paired combat resolver.
pub struct CombatResolver;

impl CombatResolver {
    /// Run one combat pass for `side`.
    ///
    /// Only alive, active creatures attack. In an exchange both creatures
    /// use their attack value from before the exchange. Dead creatures are
    /// deactivated and queued in `removals`; their slots are not cleared.
    ///
    /// All slots are processed even if `defender` reaches zero health
    /// partway through.
    pub fn resolve<K: EventSink + ?Sized>(
        field: &mut Battlefield,
        side: Side,
        defender: &mut Combatant,
        removals: &mut RemovalQueue,
        sink: &mut K,
    ) -> CombatReport {
        let mut report = CombatReport::default();
        let (attackers, defenders) = field.sides_mut(side);

        for slot in 0..SLOT_COUNT {
            if let Some(attacker) = attackers[slot].as_mut().filter(|c| c.can_attack()) {
                match defenders[slot].as_mut().filter(|c| c.is_alive()) {
                    Some(blocker) => {
                        let dealt = attacker.attack();
                        let taken = blocker.attack();

                        blocker.receive_damage(dealt);
                        attacker.receive_damage(taken);

                        trace!("{} slot {}: {} trades with {}", side, slot, attacker, blocker);
                        report.exchanges += 1;
                        sink.notify(&GameEvent::CombatExchange {
                            side,
                            slot,
                            attacker: attacker.card.clone(),
                            defender: blocker.card.clone(),
                            damage_dealt: dealt,
                            damage_taken: taken,
                        });
                    }
                    None => {
                        let amount = attacker.attack();
                        defender.take_damage(amount);

                        trace!(
                            "{} slot {}: {} hits {} for {}",
                            side, slot, attacker, defender.name, amount
                        );
                        report.direct_damage = report.direct_damage.saturating_add(amount);
                        sink.notify(&GameEvent::CombatantDamaged {
                            side: side.opposite(),
                            amount,
                            remaining_health: defender.health(),
                        });
                    }
                }
            }

            // Any dead occupant is queued, including one that was summoned
            // with no health and never fought.
            let lane = [(side, &attackers[slot]), (side.opposite(), &defenders[slot])];
            for (owner, cell) in lane {
                let dead = cell.as_ref().is_some_and(|c| !c.is_alive());
                if dead && removals.mark(owner, slot) {
                    report.deaths += 1;
                    sink.notify(&GameEvent::CreaturePendingRemoval { side: owner, slot });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Creature};
    use crate::events::{EventLog, NullSink};

    fn place(field: &mut Battlefield, side: Side, slot: usize, card: Card, active: bool) {
        let mut creature = Creature::summon(&card, side);
        if active {
            creature.activate();
        }
        assert!(field.place_creature(creature, slot, side));
    }

    #[test]
    fn test_exchange_uses_pre_exchange_attack() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 0, Card::new("A", 1, 3, 5), true);
        place(&mut field, Side::Opponent, 0, Card::new("B", 1, 4, 2), false);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);

        assert_eq!(report.exchanges, 1);
        assert_eq!(report.deaths, 1);
        assert_eq!(field.creature(Side::Player, 0).unwrap().current_health(), 1);
        assert_eq!(field.creature(Side::Opponent, 0).unwrap().current_health(), -1);
        assert_eq!(opponent.health(), 30);

        // Dead defender stays until drained
        assert!(!field.creature(Side::Opponent, 0).unwrap().is_active());
        removals.drain(&mut field, &mut NullSink);
        assert!(field.is_vacant(0, Side::Opponent));
        assert!(field.creature(Side::Player, 0).is_some());
    }

    #[test]
    fn test_direct_damage_through_open_lane() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 4, Card::new("Goblin", 1, 2, 1), true);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        let mut log = EventLog::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut log);

        assert_eq!(opponent.health(), 28);
        assert_eq!(report.direct_damage, 2);
        assert_eq!(
            log.events(),
            &[GameEvent::CombatantDamaged { side: Side::Opponent, amount: 2, remaining_health: 28 }]
        );
    }

    #[test]
    fn test_inactive_attacker_does_nothing() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 0, Card::new("Goblin", 1, 2, 1), false);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);

        assert_eq!(report, CombatReport::default());
        assert_eq!(opponent.health(), 30);
    }

    #[test]
    fn test_dead_defender_counts_as_open_lane() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 2, Card::new("Orc", 2, 3, 2), true);
        place(&mut field, Side::Opponent, 2, Card::new("Rat", 1, 1, 1), false);
        field.creature_mut(Side::Opponent, 2).unwrap().receive_damage(1);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);

        assert_eq!(opponent.health(), 27);
        assert_eq!(field.creature(Side::Player, 2).unwrap().current_health(), 2);
    }

    #[test]
    fn test_mutual_kill_queues_attacker_first() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Opponent, 6, Card::new("Troll", 3, 4, 3), true);
        place(&mut field, Side::Player, 6, Card::new("Bull", 3, 3, 3), true);

        let mut player = Combatant::new("Player", 30);
        let mut removals = RemovalQueue::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Opponent, &mut player, &mut removals, &mut NullSink);

        assert_eq!(report.deaths, 2);
        let order: Vec<_> = removals.pending().iter().map(|p| p.side).collect();
        assert_eq!(order, vec![Side::Opponent, Side::Player]);
    }

    #[test]
    fn test_processes_every_slot_after_lethal() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 0, Card::new("Dragon", 4, 6, 5), true);
        place(&mut field, Side::Player, 7, Card::new("Rat", 1, 1, 1), true);

        let mut opponent = Combatant::new("AI", 5);
        let mut removals = RemovalQueue::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);

        assert_eq!(opponent.health(), 0);
        assert_eq!(report.direct_damage, 7);
    }

    #[test]
    fn test_zero_health_occupant_is_queued() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 0, Card::new("Husk", 1, 1, 0), false);
        place(&mut field, Side::Opponent, 5, Card::new("Husk", 1, 1, 0), false);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        let mut log = EventLog::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut log);

        assert_eq!(report.deaths, 2);
        assert_eq!(report.exchanges, 0);
        assert_eq!(opponent.health(), 30);
        assert_eq!(
            log.events(),
            &[
                GameEvent::CreaturePendingRemoval { side: Side::Player, slot: 0 },
                GameEvent::CreaturePendingRemoval { side: Side::Opponent, slot: 5 },
            ]
        );

        // Already queued, so a second pass reports nothing new
        let again =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);
        assert_eq!(again.deaths, 0);
        assert_eq!(removals.len(), 2);

        removals.drain(&mut field, &mut NullSink);
        assert!(field.is_vacant(0, Side::Player));
        assert!(field.is_vacant(5, Side::Opponent));
    }

    #[test]
    fn test_direct_damage_total_saturates() {
        let mut field = Battlefield::new();
        place(&mut field, Side::Player, 0, Card::new("Titan", 1, u32::MAX, 1), true);
        place(&mut field, Side::Player, 1, Card::new("Titan", 1, u32::MAX, 1), true);

        let mut opponent = Combatant::new("AI", 30);
        let mut removals = RemovalQueue::new();
        let report =
            CombatResolver::resolve(&mut field, Side::Player, &mut opponent, &mut removals, &mut NullSink);

        assert_eq!(report.direct_damage, u32::MAX);
        assert_eq!(opponent.health(), 0);
    }
}
