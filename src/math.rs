/// Center point of a viewport
pub fn viewport_center(width: f64, height: f64) -> [f64; 2] {
    [width / 2.0, height / 2.0]
}

/// Radius of the outer orbit for a viewport
pub fn orbit_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 3.0
}

/// Point on a circle of `radius` around `center` at `angle` radians
pub fn orbit_position(center: &[f64; 2], radius: f64, angle: f64) -> [f64; 2] {
    let (sin_a, cos_a) = angle.sin_cos();
    [center[0] + cos_a * radius, center[1] + sin_a * radius]
}

/// Euclidean distance between two points
#[cfg(test)]
pub fn distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_radius_uses_shorter_side() {
        assert_eq!(orbit_radius(900.0, 1600.0), 300.0);
        assert_eq!(orbit_radius(1600.0, 900.0), 300.0);
    }

    #[test]
    fn orbit_position_stays_on_circle() {
        let c = [10.0, 20.0];
        for i in 0..64 {
            let angle = i as f64 * 0.37 - 5.0;
            let p = orbit_position(&c, 7.5, angle);
            assert!((distance(&c, &p) - 7.5).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_angle_points_right() {
        let p = orbit_position(&[0.0, 0.0], 2.0, 0.0);
        assert_eq!(p, [2.0, 0.0]);
    }
}
