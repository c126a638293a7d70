//! Tests for the presentation and factory seams

#[cfg(test)]
mod tests {
    use crate::{Marker, MarkerFactory, markers_destroyed};
    use tilegrid::Position;
    use tilegrid::tiles::{Presentation, TileFactory, TileKind};

    // Tests that a factory can hand out presentations without tile data
    // Verified by stamping Empty on every marker
    #[test]
    fn test_factory_output_may_lack_tile_data() {
        let mut factory = MarkerFactory;

        let filler = factory.create_by_id(100, Position::ORIGIN);
        let bare = factory.create_by_name("bare", Position::ORIGIN);

        assert_eq!(filler.and_then(|p| p.tile_kind()), Some(TileKind::Empty));
        assert!(bare.is_some_and(|p| p.tile_kind().is_none()));
        assert!(factory.create_by_name("missing", Position::ORIGIN).is_none());
    }

    // Tests destroy is routed to the implementation and position updates stick
    // Verified by making set_position a no-op
    #[test]
    fn test_destroy_and_position() {
        let before = markers_destroyed();
        let mut marker = Marker {
            kind: Some(TileKind::Populated(1)),
            position: Position::ORIGIN,
        };
        marker.set_position(Position::new(2.0, 2.0));
        marker.set_parent(Position::ORIGIN);
        marker.set_active(true);

        assert_eq!(marker.position(), Position::new(2.0, 2.0));
        marker.destroy();
        assert_eq!(markers_destroyed(), before + 1);
    }
}
