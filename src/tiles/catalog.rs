//! In-memory tile catalog and scene-free presentations
//!
//! `TileCatalog` maps numeric ids and names to templates and hands out
//! `SceneTile` presentations. Every presentation reports to a shared
//! `SceneLedger`, which is how callers without a real scene observe
//! creation, destruction and visibility.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::io::configuration::{EMPTY_TILE_ID, EMPTY_TILE_NAME};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Position;
use crate::tiles::factory::{Presentation, TileFactory};
use crate::tiles::tile::TileKind;

/// Catalog entry describing one kind of tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTemplate {
    /// Numeric catalog id
    pub id: i32,
    /// Symbolic name
    pub name: String,
    /// Tile data stamped onto every presentation of this template
    pub kind: TileKind,
}

#[derive(Debug, Default)]
struct LedgerState {
    created: u64,
    destroyed: Vec<u64>,
}

/// Shared record of every presentation a catalog has produced
#[derive(Debug, Clone, Default)]
pub struct SceneLedger {
    state: Rc<RefCell<LedgerState>>,
}

impl SceneLedger {
    /// Number of presentations created so far
    pub fn created(&self) -> u64 {
        self.state.borrow().created
    }

    /// Number of presentations destroyed so far
    pub fn destroyed(&self) -> usize {
        self.state.borrow().destroyed.len()
    }

    /// Presentations created and not yet destroyed
    pub fn live(&self) -> u64 {
        let state = self.state.borrow();
        state.created - state.destroyed.len() as u64
    }

    /// Whether the presentation with `serial` has been destroyed
    pub fn is_destroyed(&self, serial: u64) -> bool {
        self.state.borrow().destroyed.contains(&serial)
    }

    fn next_serial(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.created += 1;
        state.created
    }

    fn record_destroyed(&self, serial: u64) {
        self.state.borrow_mut().destroyed.push(serial);
    }
}

/// Presentation produced by [`TileCatalog`]
#[derive(Debug)]
pub struct SceneTile {
    serial: u64,
    template_id: i32,
    kind: TileKind,
    position: Position,
    parent: Option<Position>,
    active: bool,
    ledger: SceneLedger,
}

impl SceneTile {
    /// Creation serial, unique within a ledger
    pub const fn serial(&self) -> u64 {
        self.serial
    }

    /// Catalog id this tile was made from
    pub const fn template_id(&self) -> i32 {
        self.template_id
    }

    /// Grid transform this tile is attached under, if any
    pub const fn parent(&self) -> Option<Position> {
        self.parent
    }

    /// Whether the tile is visible
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl Presentation for SceneTile {
    fn tile_kind(&self) -> Option<TileKind> {
        Some(self.kind)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_parent(&mut self, parent: Position) {
        self.parent = Some(parent);
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn destroy(self) {
        self.ledger.record_destroyed(self.serial);
    }
}

/// Tile collection addressable by id or by name
#[derive(Debug, Default)]
pub struct TileCatalog {
    templates: Vec<TileTemplate>,
    by_id: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
    ledger: SceneLedger,
}

impl TileCatalog {
    /// Empty catalog with no templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the filler tile and the standard ship modules
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        let defaults = [
            (EMPTY_TILE_ID, EMPTY_TILE_NAME, TileKind::Empty),
            (1, "hull", TileKind::Populated(1)),
            (2, "engine", TileKind::Populated(2)),
            (3, "reactor", TileKind::Populated(3)),
            (4, "turret", TileKind::Populated(4)),
            (5, "shield", TileKind::Populated(5)),
        ];
        let expected = defaults.len();
        for (id, name, kind) in defaults {
            catalog.insert(TileTemplate {
                id,
                name: name.to_string(),
                kind,
            });
        }
        debug_assert_eq!(catalog.by_id.len(), expected, "duplicate default id");
        debug_assert_eq!(catalog.by_name.len(), expected, "duplicate default name");
        catalog
    }

    /// Add a template
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the id is negative, the name is blank,
    /// or either is already registered.
    pub fn register(&mut self, id: i32, name: &str, kind: TileKind) -> Result<()> {
        if id < 0 {
            return Err(invalid_parameter("id", &id, &"catalog ids are non-negative"));
        }
        if name.trim().is_empty() {
            return Err(invalid_parameter("name", &name, &"catalog names cannot be blank"));
        }
        if self.by_id.contains_key(&id) {
            return Err(invalid_parameter("id", &id, &"already registered"));
        }
        if self.by_name.contains_key(name) {
            return Err(invalid_parameter("name", &name, &"already registered"));
        }

        self.insert(TileTemplate {
            id,
            name: name.to_string(),
            kind,
        });
        Ok(())
    }

    /// Template registered under `id`
    pub fn template_by_id(&self, id: i32) -> Option<&TileTemplate> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.templates.get(index))
    }

    /// Template registered under `name`
    pub fn template_by_name(&self, name: &str) -> Option<&TileTemplate> {
        self.by_name
            .get(name)
            .and_then(|&index| self.templates.get(index))
    }

    /// All templates in registration order
    pub fn templates(&self) -> &[TileTemplate] {
        &self.templates
    }

    /// Ids of every non-filler template, in registration order
    pub fn populated_ids(&self) -> Vec<i32> {
        self.templates
            .iter()
            .filter(|template| !template.kind.is_empty())
            .map(|template| template.id)
            .collect()
    }

    /// Ledger shared by every presentation this catalog produces
    pub fn ledger(&self) -> SceneLedger {
        self.ledger.clone()
    }

    fn insert(&mut self, template: TileTemplate) {
        let index = self.templates.len();
        self.by_id.insert(template.id, index);
        self.by_name.insert(template.name.clone(), index);
        self.templates.push(template);
    }

    fn instantiate(&self, template: &TileTemplate, position: Position) -> SceneTile {
        SceneTile {
            serial: self.ledger.next_serial(),
            template_id: template.id,
            kind: template.kind,
            position,
            parent: None,
            active: true,
            ledger: self.ledger.clone(),
        }
    }
}

impl TileFactory for TileCatalog {
    type Presentation = SceneTile;

    fn create_by_id(&mut self, id: i32, position: Position) -> Option<SceneTile> {
        let template = self.template_by_id(id)?;
        Some(self.instantiate(template, position))
    }

    fn create_by_name(&mut self, name: &str, position: Position) -> Option<SceneTile> {
        let template = self.template_by_name(name)?;
        Some(self.instantiate(template, position))
    }
}
