//! Tests for the in-memory catalog and its scene ledger

#[cfg(test)]
mod tests {
    use tilegrid::GridError;
    use tilegrid::io::configuration::{EMPTY_TILE_ID, EMPTY_TILE_NAME};
    use tilegrid::tiles::{Presentation, TileCatalog, TileFactory, TileKind};
    use tilegrid::Position;

    // Tests default templates are reachable by id and name
    // Verified by omitting the filler from with_defaults
    #[test]
    fn test_defaults_include_filler_and_modules() {
        let catalog = TileCatalog::with_defaults();

        assert_eq!(
            catalog.template_by_id(EMPTY_TILE_ID).map(|t| t.kind),
            Some(TileKind::Empty)
        );
        assert_eq!(
            catalog.template_by_name(EMPTY_TILE_NAME).map(|t| t.id),
            Some(EMPTY_TILE_ID)
        );
        assert_eq!(catalog.populated_ids(), vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.templates().len(), 6);
    }

    // Tests every default template is reachable by both its id and its name
    // Verified by giving two defaults the same name
    #[test]
    fn test_default_entries_are_distinct() {
        let catalog = TileCatalog::with_defaults();

        for template in catalog.templates() {
            assert_eq!(catalog.template_by_id(template.id), Some(template));
            assert_eq!(catalog.template_by_name(&template.name), Some(template));
        }
    }

    // Tests registration validation
    // Verified by removing the duplicate-name check
    #[test]
    fn test_register_rejects_bad_entries() {
        let mut catalog = TileCatalog::new();

        assert!(catalog.register(7, "armor", TileKind::Populated(7)).is_ok());
        assert!(matches!(
            catalog.register(-3, "negative", TileKind::Populated(1)),
            Err(GridError::InvalidParameter { parameter: "id", .. })
        ));
        assert!(matches!(
            catalog.register(8, "  ", TileKind::Populated(1)),
            Err(GridError::InvalidParameter { parameter: "name", .. })
        ));
        assert!(matches!(
            catalog.register(7, "other", TileKind::Populated(1)),
            Err(GridError::InvalidParameter { parameter: "id", .. })
        ));
        assert!(matches!(
            catalog.register(9, "armor", TileKind::Populated(1)),
            Err(GridError::InvalidParameter { parameter: "name", .. })
        ));
        assert_eq!(catalog.templates().len(), 1);
    }

    // Tests that produced tiles carry template data and the requested position
    // Verified by instantiating at the origin regardless of position
    #[test]
    fn test_factory_produces_scene_tiles() {
        let mut catalog = TileCatalog::with_defaults();
        let at = Position::new(10.0, -20.0);

        let by_id = catalog.create_by_id(3, at);
        let by_name = catalog.create_by_name("turret", at);

        assert!(by_id.as_ref().is_some_and(|t| t.template_id() == 3
            && t.tile_kind() == Some(TileKind::Populated(3))
            && t.position() == at
            && t.is_active()
            && t.parent().is_none()));
        assert!(by_name.as_ref().is_some_and(|t| t.template_id() == 4));
        assert!(catalog.create_by_id(42, at).is_none());
        assert!(catalog.create_by_name("warp drive", at).is_none());
    }

    // Tests ledger counts across creation and destruction
    // Verified by recording destruction on drop instead of destroy
    #[test]
    fn test_ledger_tracks_lifecycle() {
        let mut catalog = TileCatalog::with_defaults();
        let ledger = catalog.ledger();

        let first = catalog.create_by_id(1, Position::ORIGIN);
        let second = catalog.create_by_id(2, Position::ORIGIN);
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.live(), 2);

        let first_serial = first.as_ref().map_or(0, |t| t.serial());
        if let Some(tile) = first {
            tile.destroy();
        }
        drop(second);

        assert!(ledger.is_destroyed(first_serial));
        assert_eq!(ledger.destroyed(), 1);
        assert_eq!(ledger.live(), 1);
    }
}
