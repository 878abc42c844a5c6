//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition known to the process and
//! provides lookup by `CardId`, rarity filtering and the `definition -> Card`
//! factory. Iteration follows registration order so sampling from the catalog
//! is reproducible.
//!
//! A built-in catalog is embedded at compile time and parsed once on first use.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::definition::{CardDefinition, Rarity};
use crate::core::{BattleError, CardId, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/cards.json");

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    cards: Vec<CardDefinition>,
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use card_clash::cards::{CardCatalog, CardClass, CardDefinition, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new("bulwark", "Bulwark", CardClass::Defense, Rarity::Rare, 12))
///     .unwrap();
///
/// let card = catalog.instantiate(&"bulwark".into()).unwrap();
/// assert_eq!(card.power, 12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::DuplicateDefinition` if two definitions share an id.
    pub fn from_definitions(defs: impl IntoIterator<Item = CardDefinition>) -> Result<Self> {
        let mut catalog = Self::new();
        for def in defs {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON of the form `{ "cards": [ ... ] }`.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::Catalog` for malformed JSON and
    /// `BattleError::DuplicateDefinition` for repeated ids.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_definitions(file.cards)
    }

    /// The catalog shipped with the crate, parsed once per process.
    #[must_use]
    pub fn builtin() -> &'static CardCatalog {
        static CATALOG: OnceLock<CardCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Self::from_json(BUILTIN_CATALOG).unwrap_or_else(|err| {
                log::error!("built-in card catalog failed to load: {err}");
                Self::default()
            })
        })
    }

    /// Register a card definition.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::DuplicateDefinition` if the id is already taken.
    pub fn register(&mut self, def: CardDefinition) -> Result<()> {
        if self.cards.contains_key(&def.id) {
            return Err(BattleError::DuplicateDefinition(def.id));
        }
        self.order.push(def.id.clone());
        self.cards.insert(def.id.clone(), def);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Create a fresh card instance from a definition.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::UnknownCard` if the id is not registered.
    pub fn instantiate(&self, id: &CardId) -> Result<Card> {
        self.get(id)
            .map(Card::from_definition)
            .ok_or_else(|| BattleError::UnknownCard(id.clone()))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }

    /// Definitions whose rarity is in `allowed`, in registration order.
    #[must_use]
    pub fn with_rarities(&self, allowed: &[Rarity]) -> Vec<&CardDefinition> {
        self.iter().filter(|def| allowed.contains(&def.rarity)).collect()
    }
}
