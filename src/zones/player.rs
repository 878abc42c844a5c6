//! Players: draw pile and field lifecycle.
//!
//! A player owns one `Deck`. On construction the deck is shuffled into a draw
//! pile and up to `FIELD_CAPACITY` cards are drawn onto the field, firing each
//! card's enter-field trigger in draw order. Whenever a card leaves the field
//! exactly one replacement draw is attempted, which is how a field refills
//! mid-match.
//!
//! ## Invariants
//!
//! - `field.len() <= FIELD_CAPACITY`
//! - a player has lost iff the field is empty
//!
//! The top of the draw pile is its last element.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::cards::Card;
use crate::core::{BattleConfig, BattleError, CardId, PlayerId, RandomSource, Result, FIELD_CAPACITY};
use crate::effects::{trigger_enter_field, TriggeredEffect};

/// A card that just entered the field, with what its trigger did.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnCard {
    pub card_id: CardId,
    pub triggered: Vec<TriggeredEffect>,
}

/// Result of `Player::remove_card`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemovalOutcome {
    /// The card taken off the field, if it was there.
    pub removed: Option<Card>,
    /// The replacement, if the pile had one and the field had room.
    pub drawn: Option<DrawnCard>,
}

/// One side of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRepr")]
pub struct Player {
    id: PlayerId,
    deck: Deck,
    draw_pile: Vector<Card>,
    field: Vector<Card>,
}

/// Wire form of a `Player`, validated through `Player::from_parts`.
#[derive(Deserialize)]
struct PlayerRepr {
    id: PlayerId,
    deck: Deck,
    draw_pile: Vec<Card>,
    field: Vec<Card>,
}

impl TryFrom<PlayerRepr> for Player {
    type Error = BattleError;

    fn try_from(repr: PlayerRepr) -> Result<Self> {
        Self::from_parts(repr.id, repr.deck, repr.draw_pile, repr.field)
    }
}

impl Player {
    /// Shuffle the deck into a draw pile and fill the field.
    pub fn new<R: RandomSource + ?Sized>(
        id: impl Into<PlayerId>,
        deck: Deck,
        config: &BattleConfig,
        rng: &mut R,
    ) -> Self {
        let id = id.into();
        let mut pile: Vec<Card> = deck.iter().cloned().collect();
        rng.shuffle(&mut pile);
        log::trace!(
            "{id} shuffled draw pile: {:?}",
            pile.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
        );

        let mut player = Self {
            id,
            deck,
            draw_pile: pile.into_iter().collect(),
            field: Vector::new(),
        };
        while player.draw_to_field(config, rng).is_some() {}
        player
    }

    /// Assemble a player from explicit zones, without shuffling or triggers.
    ///
    /// Used to set up positions directly, e.g. puzzles and tests. The last
    /// card of `draw_pile` is drawn first.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::FieldOverflow` if `field` exceeds the capacity.
    pub fn from_parts(
        id: impl Into<PlayerId>,
        deck: Deck,
        draw_pile: Vec<Card>,
        field: Vec<Card>,
    ) -> Result<Self> {
        if field.len() > FIELD_CAPACITY {
            return Err(BattleError::FieldOverflow {
                len: field.len(),
                capacity: FIELD_CAPACITY,
            });
        }
        Ok(Self {
            id: id.into(),
            deck,
            draw_pile: draw_pile.into_iter().collect(),
            field: field.into_iter().collect(),
        })
    }

    // === Accessors ===

    /// Player id.
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// The deck this player was built from.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards left to draw; the last one is on top.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    /// Active cards.
    #[must_use]
    pub fn field(&self) -> &Vector<Card> {
        &self.field
    }

    /// A field card by id.
    #[must_use]
    pub fn field_card(&self, card_id: &CardId) -> Option<&Card> {
        self.field.iter().find(|card| &card.id == card_id)
    }

    pub(crate) fn field_card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.field.iter_mut().find(|card| &card.id == card_id)
    }

    pub(crate) fn field_mut(&mut self) -> &mut Vector<Card> {
        &mut self.field
    }

    /// An empty field means this player has lost.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.field.is_empty()
    }

    /// Is at least one field card not frozen?
    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.field.iter().any(|card| !card.status_effects.is_frozen())
    }

    // === Field lifecycle ===

    /// Move the top of the draw pile onto the field and fire its trigger.
    ///
    /// Returns `None` when the field is full or the pile is empty.
    pub fn draw_to_field<R: RandomSource + ?Sized>(
        &mut self,
        config: &BattleConfig,
        rng: &mut R,
    ) -> Option<DrawnCard> {
        if self.field.len() >= FIELD_CAPACITY {
            return None;
        }
        let card = self.draw_pile.pop_back()?;
        let card_id = card.id.clone();
        self.field.push_back(card);
        log::trace!("{} drew {card_id} onto the field", self.id);

        let triggered = trigger_enter_field(&mut self.field, &card_id, config, rng);
        Some(DrawnCard { card_id, triggered })
    }

    /// Take a card off the field, then attempt one replacement draw.
    ///
    /// The draw is attempted even if `card_id` was not on the field.
    pub fn remove_card<R: RandomSource + ?Sized>(
        &mut self,
        card_id: &CardId,
        config: &BattleConfig,
        rng: &mut R,
    ) -> RemovalOutcome {
        let removed = self
            .field
            .iter()
            .position(|card| &card.id == card_id)
            .map(|index| self.field.remove(index));
        if removed.is_some() {
            log::trace!("{} lost {card_id} from the field", self.id);
        }

        RemovalOutcome {
            removed,
            drawn: self.draw_to_field(config, rng),
        }
    }
}
