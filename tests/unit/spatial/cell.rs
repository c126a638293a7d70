//! Tests for cell occupancy transitions

#[cfg(test)]
mod tests {
    use crate::{Marker, MarkerFactory};
    use tilegrid::Position;
    use tilegrid::spatial::{Cell, Occupancy};
    use tilegrid::tiles::{Tile, TileFactory, TileId, TileKind};

    fn marker_tile(id: u64, kind: TileKind) -> Tile<Marker> {
        Tile::new(
            TileId(id),
            kind,
            Marker {
                kind: Some(kind),
                position: Position::ORIGIN,
            },
        )
    }

    // Tests that a new cell is vacant and knows its coordinates
    // Verified by initializing occupancy to a placeholder tile
    #[test]
    fn test_new_cell_is_vacant() {
        let cell: Cell<Marker> = Cell::new(3, 4);

        assert_eq!(cell.coordinates(), (3, 4));
        assert!(!cell.is_occupied());
        assert!(cell.tile().is_none());
        assert!(matches!(cell.occupancy(), Occupancy::Empty));
    }

    // Tests that occupy hands back the previous occupant
    // Verified by discarding the replaced value in occupy
    #[test]
    fn test_occupy_returns_previous() {
        let mut cell = Cell::new(0, 0);

        assert!(cell.occupy(marker_tile(1, TileKind::Empty)).is_none());
        let previous = cell.occupy(marker_tile(2, TileKind::Populated(1)));

        assert_eq!(previous.map(|tile| tile.id()), Some(TileId(1)));
        assert_eq!(cell.tile().map(Tile::id), Some(TileId(2)));
        assert_eq!(cell.tile().map(Tile::kind), Some(TileKind::Populated(1)));
    }

    // Tests that vacate empties the cell exactly once
    // Verified by cloning occupancy instead of replacing it
    #[test]
    fn test_vacate_clears_cell() {
        let mut cell = Cell::new(1, 1);
        cell.occupy(marker_tile(7, TileKind::Populated(2)));

        assert_eq!(cell.vacate().map(|tile| tile.id()), Some(TileId(7)));
        assert!(!cell.is_occupied());
        assert!(cell.vacate().is_none());
    }

    // Tests cells holding factory-made presentations
    // Verified by returning None from the marker factory
    #[test]
    fn test_cell_holds_factory_output() {
        let mut factory = MarkerFactory;
        let mut cell = Cell::new(0, 0);
        let made = factory.create_by_id(100, Position::new(1.0, 2.0));

        if let Some(presentation) = made {
            cell.occupy(Tile::new(TileId(1), TileKind::Empty, presentation));
        }

        assert_eq!(
            cell.tile().map(Tile::position),
            Some(Position::new(1.0, 2.0))
        );
    }
}
