//! Tests for world positions and planar distance

#[cfg(test)]
mod tests {
    use tilegrid::Position;

    // Tests that depth never contributes to planar distance
    // Verified by including z in the hypot computation
    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Position::with_depth(0.0, 0.0, 100.0);
        let b = Position::with_depth(3.0, 4.0, -50.0);

        assert!((a.planar_distance(b) - 5.0).abs() < f32::EPSILON);
        assert!((b.planar_distance(a) - 5.0).abs() < f32::EPSILON);
    }

    // Tests component-wise arithmetic including depth
    // Verified by dropping z from Add
    #[test]
    fn test_add_and_sub_are_component_wise() {
        let a = Position::with_depth(1.0, 2.0, 3.0);
        let b = Position::with_depth(0.5, -2.0, 1.0);

        assert_eq!(a + b, Position::with_depth(1.5, 0.0, 4.0));
        assert_eq!(a - b, Position::with_depth(0.5, 4.0, 2.0));
        assert_eq!(a + b - b, a);
    }

    // Tests the origin constant and planar constructor
    // Verified by giving new() a non-zero depth
    #[test]
    fn test_origin_and_new() {
        assert_eq!(Position::ORIGIN, Position::default());
        assert!(Position::new(7.0, -1.0).z.abs() < f32::EPSILON);
        assert_eq!(Position::new(1.0, 2.0).to_string(), "(1, 2, 0)");
    }
}
