//! Enter-field triggers.
//!
//! Every card fires its class trigger exactly once, when it is added to a
//! field (initial draw or replacement draw):
//!
//! | class      | effect                                                         |
//! |------------|----------------------------------------------------------------|
//! | `Attack`   | +25% buff on itself                                            |
//! | `Defense`  | `REFLECT_50` shield on 2 random allies, proc: `TOTAL_REFLECT_100` |
//! | `Support`  | heal 2 random allies by 15% of their base power, proc: 35%      |
//! | `Strategy` | +20% buff on every card on the field, itself included          |
//! | others     | nothing                                                        |
//!
//! Random allies are drawn from the other field cards in field order. Procs
//! are rolled once per trigger, after the targets are chosen, and only for
//! rarities the `RarityConfig` allows; ineligible cards consume no randomness
//! for the roll.

use im::Vector;

use super::status::{Shield, ShieldKind};
use crate::cards::{Card, CardClass};
use crate::core::{BattleConfig, CardId, RandomSource};

/// Something an enter-field trigger did, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum TriggeredEffect {
    /// `target` gained `pct` buff.
    PowerBuff {
        source: CardId,
        target: CardId,
        pct: f64,
    },
    /// `target` received a shield.
    ShieldGranted {
        source: CardId,
        target: CardId,
        kind: ShieldKind,
    },
    /// `target` gained `amount` hp.
    Healed {
        source: CardId,
        target: CardId,
        amount: i64,
    },
    /// The source's rarity proc fired.
    Proc { source: CardId, class: CardClass },
}

impl TriggeredEffect {
    /// The card whose trigger produced this effect.
    #[must_use]
    pub fn source(&self) -> &CardId {
        match self {
            TriggeredEffect::PowerBuff { source, .. }
            | TriggeredEffect::ShieldGranted { source, .. }
            | TriggeredEffect::Healed { source, .. }
            | TriggeredEffect::Proc { source, .. } => source,
        }
    }
}

/// Fire the enter-field trigger of `entering`, which must already be on `field`.
///
/// Returns the effects applied. A card that is not on the field triggers nothing.
pub fn trigger_enter_field<R: RandomSource + ?Sized>(
    field: &mut Vector<Card>,
    entering: &CardId,
    config: &BattleConfig,
    rng: &mut R,
) -> Vec<TriggeredEffect> {
    let Some(index) = field.iter().position(|card| &card.id == entering) else {
        return Vec::new();
    };
    let (class, rarity) = (field[index].class, field[index].rarity);
    let mut effects = Vec::new();

    match class {
        CardClass::Attack => {
            if let Some(card) = field.get_mut(index) {
                card.buff_power_pct_total += config.attack_buff_pct;
            }
            effects.push(TriggeredEffect::PowerBuff {
                source: entering.clone(),
                target: entering.clone(),
                pct: config.attack_buff_pct,
            });
        }
        CardClass::Defense => {
            let targets = rng.sample(&allies(field, index), config.shield_targets);
            let proc = roll_proc(config, rarity, rng);
            if proc {
                effects.push(TriggeredEffect::Proc {
                    source: entering.clone(),
                    class,
                });
            }
            let kind = if proc {
                ShieldKind::TotalReflect100
            } else {
                ShieldKind::Reflect50
            };
            for target in targets {
                if let Some(card) = field.get_mut(target) {
                    card.status_effects.set_shield(Shield::new(kind));
                    effects.push(TriggeredEffect::ShieldGranted {
                        source: entering.clone(),
                        target: card.id.clone(),
                        kind,
                    });
                }
            }
        }
        CardClass::Support => {
            let targets = rng.sample(&allies(field, index), config.heal_targets);
            let proc = roll_proc(config, rarity, rng);
            if proc {
                effects.push(TriggeredEffect::Proc {
                    source: entering.clone(),
                    class,
                });
            }
            let pct = if proc {
                config.proc_heal_pct
            } else {
                config.heal_pct
            };
            for target in targets {
                if let Some(card) = field.get_mut(target) {
                    let amount = (card.base_power() as f64 * pct).round() as i64;
                    card.hp += amount;
                    effects.push(TriggeredEffect::Healed {
                        source: entering.clone(),
                        target: card.id.clone(),
                        amount,
                    });
                }
            }
        }
        CardClass::Strategy => {
            for card in field.iter_mut() {
                card.buff_power_pct_total += config.strategy_buff_pct;
                effects.push(TriggeredEffect::PowerBuff {
                    source: entering.clone(),
                    target: card.id.clone(),
                    pct: config.strategy_buff_pct,
                });
            }
        }
        CardClass::Control | CardClass::Continuous | CardClass::Evade | CardClass::Chain => {}
    }

    for effect in &effects {
        log::trace!("enter-field {entering}: {effect:?}");
    }
    effects
}

/// Field positions of every card except `index`.
fn allies(field: &Vector<Card>, index: usize) -> Vec<usize> {
    (0..field.len()).filter(|&i| i != index).collect()
}

fn roll_proc<R: RandomSource + ?Sized>(
    config: &BattleConfig,
    rarity: crate::cards::Rarity,
    rng: &mut R,
) -> bool {
    config.rarity.can_proc(rarity) && rng.chance(config.proc_chance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;
    use crate::core::LcgRng;

    /// Always returns the same float.
    struct FixedRng(f64);

    impl RandomSource for FixedRng {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    /// Counts how many floats were drawn.
    struct CountingRng(u32);

    impl RandomSource for CountingRng {
        fn next_f64(&mut self) -> f64 {
            self.0 += 1;
            0.5
        }
    }

    fn card(id: &str, class: CardClass, rarity: Rarity, power: i64) -> Card {
        Card::new(id, id, class, rarity, power)
    }

    fn field(cards: Vec<Card>) -> Vector<Card> {
        cards.into_iter().collect()
    }

    #[test]
    fn test_attack_buffs_self_only() {
        let mut field = field(vec![
            card("ally", CardClass::Chain, Rarity::Common, 5),
            card("atk", CardClass::Attack, Rarity::Common, 10),
        ]);
        let effects = trigger_enter_field(
            &mut field,
            &"atk".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        assert_eq!(effects.len(), 1);
        assert_eq!(field[1].buff_power_pct_total, 0.25);
        assert_eq!(field[0].buff_power_pct_total, 0.0);
    }

    #[test]
    fn test_strategy_buffs_whole_field() {
        let mut field = field(vec![
            card("a", CardClass::Chain, Rarity::Common, 5),
            card("b", CardClass::Evade, Rarity::Common, 5),
            card("s", CardClass::Strategy, Rarity::Common, 5),
        ]);
        let effects = trigger_enter_field(
            &mut field,
            &"s".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        assert_eq!(effects.len(), 3);
        assert!(field.iter().all(|c| c.buff_power_pct_total == 0.2));
    }

    #[test]
    fn test_defense_shields_other_allies() {
        let mut field = field(vec![
            card("d", CardClass::Defense, Rarity::Common, 5),
            card("a", CardClass::Chain, Rarity::Common, 5),
            card("b", CardClass::Chain, Rarity::Common, 5),
        ]);
        trigger_enter_field(
            &mut field,
            &"d".into(),
            &BattleConfig::default(),
            &mut LcgRng::new(3),
        );

        assert!(field[0].status_effects.shield().is_none());
        assert_eq!(
            field[1].status_effects.shield().unwrap().kind,
            ShieldKind::Reflect50
        );
        assert_eq!(
            field[2].status_effects.shield().unwrap().kind,
            ShieldKind::Reflect50
        );
    }

    #[test]
    fn test_defense_proc_upgrades_shield() {
        let mut field = field(vec![
            card("d", CardClass::Defense, Rarity::Epic, 5),
            card("a", CardClass::Chain, Rarity::Common, 5),
        ]);
        // 0.0 always passes the 5% roll
        let effects = trigger_enter_field(
            &mut field,
            &"d".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        assert!(matches!(effects[0], TriggeredEffect::Proc { .. }));
        assert_eq!(
            field[1].status_effects.shield().unwrap().kind,
            ShieldKind::TotalReflect100
        );
    }

    #[test]
    fn test_low_rarity_never_procs() {
        let mut field = field(vec![
            card("d", CardClass::Defense, Rarity::Rare, 5),
            card("a", CardClass::Chain, Rarity::Common, 5),
        ]);
        let mut rng = CountingRng(0);
        let effects =
            trigger_enter_field(&mut field, &"d".into(), &BattleConfig::default(), &mut rng);

        // Single ally: no sampling, no roll
        assert_eq!(rng.0, 0);
        assert_eq!(effects.len(), 1);
        assert_eq!(
            field[1].status_effects.shield().unwrap().kind,
            ShieldKind::Reflect50
        );
    }

    #[test]
    fn test_support_heals_by_base_power() {
        let mut field = field(vec![
            card("a", CardClass::Chain, Rarity::Common, 10),
            card("s", CardClass::Support, Rarity::Common, 4),
        ]);
        trigger_enter_field(
            &mut field,
            &"s".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        // round(10 * 0.15) = 2 (1.5 rounds away from zero)
        assert_eq!(field[0].hp, 12);
        assert_eq!(field[1].hp, 4);
    }

    #[test]
    fn test_support_proc_heals_more() {
        let mut field = field(vec![
            card("a", CardClass::Chain, Rarity::Common, 20),
            card("s", CardClass::Support, Rarity::Legendary, 4),
        ]);
        trigger_enter_field(
            &mut field,
            &"s".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        assert_eq!(field[0].hp, 27);
    }

    #[test]
    fn test_support_heals_two_of_three() {
        let mut field = field(vec![
            card("a", CardClass::Chain, Rarity::Common, 20),
            card("b", CardClass::Chain, Rarity::Common, 20),
            card("c", CardClass::Chain, Rarity::Common, 20),
            card("s", CardClass::Support, Rarity::Common, 4),
        ]);
        let effects = trigger_enter_field(
            &mut field,
            &"s".into(),
            &BattleConfig::default(),
            &mut LcgRng::new(11),
        );

        assert_eq!(effects.len(), 2);
        let healed = field.iter().filter(|c| c.hp == 23).count();
        assert_eq!(healed, 2);
    }

    #[test]
    fn test_passive_classes_do_nothing() {
        let mut field = field(vec![card("c", CardClass::Control, Rarity::Diamond, 5)]);
        let before = field.clone();
        let effects = trigger_enter_field(
            &mut field,
            &"c".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );

        assert!(effects.is_empty());
        assert_eq!(field, before);
    }

    #[test]
    fn test_missing_card_triggers_nothing() {
        let mut field = field(vec![card("a", CardClass::Attack, Rarity::Common, 5)]);
        let effects = trigger_enter_field(
            &mut field,
            &"ghost".into(),
            &BattleConfig::default(),
            &mut FixedRng(0.0),
        );
        assert!(effects.is_empty());
    }
}
