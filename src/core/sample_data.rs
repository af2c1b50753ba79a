use crate::core::Point;

/// Fixed demonstration data set used by examples and callers that supply no
/// real data (for instance the GET routes of an embedding web API).
///
/// The content is literal and frozen: golden-output tests and downstream
/// caches rely on `sample_points` producing the same five points in the same
/// order in every version. Do not edit without updating those fixtures.
#[must_use]
pub fn sample_points() -> Vec<Point> {
    vec![
        Point::new("Quick win", 0.2, 0.8),
        Point::new("Big bet", 0.75, 0.85),
        Point::new("Fill in", 0.3, 0.25),
        Point::new("Money pit", 0.8, 0.3),
        Point::new("Steady earner", 0.55, 0.6),
    ]
}

#[cfg(test)]
mod tests {
    use super::sample_points;
    use crate::core::Point;

    #[test]
    fn sample_points_are_stable() {
        let points = sample_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].label, "Quick win");
        assert_eq!(points[0].x, 0.2);
        assert_eq!(points[0].y, 0.8);
        assert_eq!(points[4].label, "Steady earner");
        assert_eq!(sample_points(), points);
    }

    #[test]
    fn sample_points_stay_inside_unit_square() {
        assert!(sample_points().iter().all(Point::is_inside_unit_square));
    }
}
