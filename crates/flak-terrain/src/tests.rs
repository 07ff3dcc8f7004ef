#[cfg(test)]
mod tests {
    use flak_core::types::Vector2;

    use crate::{BitmapTerrain, Terrain};

    #[test]
    fn test_flat_terrain_support() {
        let terrain = BitmapTerrain::flat(100, 50, 40);
        assert!(terrain.is_supported(Vector2::new(10.0, 45.0)));
        assert!(terrain.is_supported(Vector2::new(10.0, 40.0)));
        assert!(!terrain.is_supported(Vector2::new(10.0, 39.9)));
        assert_eq!(terrain.solid_cells(), 100 * 10);
    }

    #[test]
    fn test_points_off_grid_are_unsupported() {
        let terrain = BitmapTerrain::flat(10, 10, 0);
        assert!(!terrain.is_supported(Vector2::new(-0.5, 5.0)));
        assert!(!terrain.is_supported(Vector2::new(5.0, 10.0)));
        assert!(!terrain.is_supported(Vector2::new(10.0, 5.0)));
        assert!(!terrain.is_supported(Vector2::new(f64::NAN, 5.0)));
    }

    #[test]
    fn test_from_heights() {
        let terrain = BitmapTerrain::from_heights(10, &[0, 3, 10]);
        assert_eq!(terrain.width(), 3);
        assert!(!terrain.get(0, 9));
        assert!(terrain.get(1, 7));
        assert!(!terrain.get(1, 6));
        assert!(terrain.get(2, 0));
        assert_eq!(terrain.solid_cells(), 13);
    }

    #[test]
    fn test_destroy_circle_clears_disc() {
        let mut terrain = BitmapTerrain::flat(50, 50, 0);
        let centre = Vector2::new(25.0, 25.0);
        terrain.destroy_circle(centre, 5.0);

        assert!(!terrain.is_supported(centre));
        assert!(!terrain.is_supported(Vector2::new(28.0, 25.0)));
        assert!(terrain.is_supported(Vector2::new(31.0, 25.0)));
        assert!(terrain.is_supported(Vector2::new(25.0, 31.0)));

        // Roughly pi * r^2 cells removed.
        let removed = 50 * 50 - terrain.solid_cells();
        assert!((70..=90).contains(&removed), "removed {removed} cells");
    }

    #[test]
    fn test_destroy_circle_is_idempotent() {
        let mut terrain = BitmapTerrain::flat(40, 40, 20);
        terrain.destroy_circle(Vector2::new(20.0, 20.0), 6.0);
        let after_first = terrain.clone();
        terrain.destroy_circle(Vector2::new(20.0, 20.0), 6.0);
        assert_eq!(terrain, after_first);

        // Clearing open sky changes nothing.
        terrain.destroy_circle(Vector2::new(5.0, 5.0), 3.0);
        assert_eq!(terrain, after_first);
    }

    #[test]
    fn test_destroy_circle_ignores_degenerate_input() {
        let mut terrain = BitmapTerrain::flat(10, 10, 0);
        terrain.destroy_circle(Vector2::new(5.0, 5.0), 0.0);
        terrain.destroy_circle(Vector2::new(5.0, 5.0), -3.0);
        terrain.destroy_circle(Vector2::new(5.0, 5.0), f64::NAN);
        terrain.destroy_circle(Vector2::new(f64::INFINITY, 5.0), 3.0);
        assert_eq!(terrain.solid_cells(), 100);
    }

    #[test]
    fn test_destroy_circle_partially_off_grid() {
        let mut terrain = BitmapTerrain::flat(10, 10, 0);
        terrain.destroy_circle(Vector2::new(0.0, 0.0), 2.0);
        assert!(!terrain.get(0, 0));
        assert!(!terrain.get(1, 0));
        assert!(terrain.get(3, 3));
    }

    #[test]
    fn test_empty_grid_is_safe() {
        let mut terrain = BitmapTerrain::empty(0, 0);
        terrain.destroy_circle(Vector2::new(0.0, 0.0), 5.0);
        assert!(!terrain.is_supported(Vector2::ZERO));
    }
}
