//! Decks: validated, fixed-size card lists.
//!
//! A `Deck` holds exactly `DECK_SIZE` cards with distinct ids. Cards are cloned
//! on construction, so mutating the caller's cards afterwards is never visible
//! through the deck.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog};
use crate::core::{BattleError, CardId, Result, DECK_SIZE};

/// An immutable six-card deck.
///
/// ## Example
///
/// ```
/// use card_clash::cards::{Card, CardClass, Rarity};
/// use card_clash::zones::Deck;
///
/// let cards: Vec<Card> = (0..6)
///     .map(|i| Card::new(format!("c{i}"), "Card", CardClass::Attack, Rarity::Common, 5))
///     .collect();
///
/// let deck = Deck::new(&cards).unwrap();
/// assert_eq!(deck.len(), 6);
///
/// assert!(Deck::new(&cards[..5]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeckRepr")]
pub struct Deck {
    cards: Vector<Card>,
}

/// Wire form of a `Deck`, validated through `Deck::new` on the way in.
#[derive(Deserialize)]
struct DeckRepr {
    cards: Vec<Card>,
}

impl TryFrom<DeckRepr> for Deck {
    type Error = BattleError;

    fn try_from(repr: DeckRepr) -> Result<Self> {
        Self::new(&repr.cards)
    }
}

impl Deck {
    /// Validate and copy `cards` into a deck.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::InvalidDeck` if there are not exactly six cards
    /// or two cards share an id.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(BattleError::invalid_deck(format!(
                "expected {DECK_SIZE} cards, got {}",
                cards.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(&card.id) {
                return Err(BattleError::invalid_deck(format!(
                    "duplicate card id {}",
                    card.id
                )));
            }
        }

        Ok(Self {
            cards: cards.iter().cloned().collect(),
        })
    }

    /// Build a deck of fresh level-0 cards from catalog ids.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::UnknownCard` for an id the catalog lacks, or
    /// `BattleError::InvalidDeck` if the ids do not form a valid deck.
    pub fn from_catalog(catalog: &CardCatalog, ids: &[CardId]) -> Result<Self> {
        let cards = ids
            .iter()
            .map(|id| catalog.instantiate(id))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&cards)
    }

    /// The cards, in construction order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards (always `DECK_SIZE`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false` for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
