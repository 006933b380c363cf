//! Per-frame circle placement.
//!
//! Everything here is a pure function of the two phase angles, the current
//! selection and the viewport, so a frame can be recomputed at any time.

use crate::color::Color;
use crate::descriptor::CircleDescriptor;
use crate::graphics::DrawTarget;
use crate::math::{orbit_position, orbit_radius, viewport_center};
use crate::selection::{Selection, Target};

/// Inner orbit radius relative to the outer one
pub const SLOW_ORBIT_FACTOR: f64 = 0.6;

// Default radii in density-independent units.
const CENTER_RADIUS_DP: f64 = 30.0;
const FAST_RADIUS_DP: f64 = 24.0;
const SLOW_RADIUS_DP: f64 = 15.0;

/// Viewport geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub density: f64,
}

/// Computes the center, fast-orbit and slow-orbit circles, in draw order.
pub fn describe_frame(
    fast_angle: f64,
    slow_angle: f64,
    selection: &Selection,
    viewport: &Viewport,
) -> [CircleDescriptor; 3] {
    let center = viewport_center(viewport.width, viewport.height);
    let orbit = orbit_radius(viewport.width, viewport.height);
    let d = viewport.density;

    let mut circles = [
        CircleDescriptor {
            center,
            radius: CENTER_RADIUS_DP * d,
            color: Some(Color::GRAY),
        },
        CircleDescriptor {
            center: orbit_position(&center, orbit, fast_angle),
            radius: FAST_RADIUS_DP * d,
            color: Some(Color::CYAN),
        },
        CircleDescriptor {
            center: orbit_position(&center, orbit * SLOW_ORBIT_FACTOR, slow_angle),
            radius: SLOW_RADIUS_DP * d,
            color: Some(Color::MAGENTA),
        },
    ];

    let index = match selection.target {
        Target::Primary => 0,
        Target::Fast => 1,
        Target::Slow => 2,
    };
    circles[index].color = selection.color.resolve();
    circles[index].radius = selection.size.radius(d);

    circles
}

/// Issues a fill for every visible circle and returns how many were drawn.
pub fn draw_frame<T: DrawTarget>(circles: &[CircleDescriptor], target: &mut T) -> usize {
    let mut drawn = 0;
    for circle in circles {
        if let Some(color) = circle.color {
            target.fill_circle(circle.center, circle.radius, color);
            drawn += 1;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::distance;
    use crate::selection::{CircleColor, CircleSize};

    const PHONE: Viewport = Viewport {
        width: 900.0,
        height: 1600.0,
        density: 1.0,
    };

    #[derive(Default)]
    struct Recorder {
        calls: Vec<([f64; 2], f64, Color)>,
    }

    impl DrawTarget for Recorder {
        fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
            self.calls.push((center, radius, color));
        }
    }

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    fn defaults(fast: f64, slow: f64) -> [CircleDescriptor; 3] {
        // Small/None on a circle we then ignore keeps the other two untouched.
        let mut circles = describe_frame(
            fast,
            slow,
            &Selection {
                target: Target::Primary,
                color: CircleColor::None,
                size: CircleSize::Small,
            },
            &PHONE,
        );
        circles[0] = CircleDescriptor {
            center: [450.0, 800.0],
            radius: 30.0,
            color: Some(Color::GRAY),
        };
        circles
    }

    #[test]
    fn primary_blue_large_at_rest() {
        let selection = Selection {
            target: Target::Primary,
            color: CircleColor::Blue,
            size: CircleSize::Large,
        };
        let [center, fast, slow] = describe_frame(0.0, 0.0, &selection, &PHONE);

        assert!(close(center.center, [450.0, 800.0]));
        assert_eq!(center.radius, 45.0);
        assert_eq!(center.color, Some(Color::BLUE));

        assert!(close(fast.center, [750.0, 800.0]));
        assert_eq!(fast.radius, 24.0);
        assert_eq!(fast.color, Some(Color::CYAN));

        assert!(close(slow.center, [630.0, 800.0]));
        assert_eq!(slow.radius, 15.0);
        assert_eq!(slow.color, Some(Color::MAGENTA));
    }

    #[test]
    fn hidden_fast_circle_is_not_drawn() {
        let selection = Selection {
            target: Target::Fast,
            color: CircleColor::None,
            size: CircleSize::Small,
        };
        let circles = describe_frame(0.3, 1.2, &selection, &PHONE);
        let mut recorder = Recorder::default();
        assert_eq!(draw_frame(&circles, &mut recorder), 2);
        assert_eq!(recorder.calls[0], ([450.0, 800.0], 30.0, Color::GRAY));
        assert_eq!(recorder.calls[1].1, 15.0);
        assert_eq!(recorder.calls[1].2, Color::MAGENTA);
    }

    #[test]
    fn orbits_keep_their_distance() {
        let selection = Selection::default();
        let center = [450.0, 800.0];
        for i in 0..100 {
            let fast = i as f64 * 0.113;
            let slow = i as f64 * 0.271 + 1000.0;
            let [_, f, s] = describe_frame(fast, slow, &selection, &PHONE);
            assert!((distance(&center, &f.center) - 300.0).abs() < 1e-6);
            assert!((distance(&center, &s.center) - 180.0).abs() < 1e-6);
        }
    }

    #[test]
    fn only_the_target_differs_from_defaults() {
        let (fast, slow) = (0.7, 2.1);
        let base = defaults(fast, slow);
        for target in Target::ALL {
            let selection = Selection {
                target,
                color: CircleColor::Green,
                size: CircleSize::Large,
            };
            let circles = describe_frame(fast, slow, &selection, &PHONE);
            let changed: Vec<usize> = (0..3).filter(|&i| circles[i] != base[i]).collect();
            assert_eq!(changed.len(), 1, "target {:?}", target);
        }
    }

    #[test]
    fn density_scales_default_radii() {
        let viewport = Viewport {
            density: 2.5,
            ..PHONE
        };
        let selection = Selection {
            target: Target::Slow,
            ..Selection::default()
        };
        let [center, fast, slow] = describe_frame(0.0, 0.0, &selection, &viewport);
        assert_eq!(center.radius, 75.0);
        assert_eq!(fast.radius, 60.0);
        assert_eq!(slow.radius, 75.0);
        assert_eq!(slow.color, Some(Color::RED));
    }

    #[test]
    fn rendering_is_pure() {
        let selection = Selection {
            target: Target::Slow,
            color: CircleColor::Yellow,
            size: CircleSize::Small,
        };
        let a = describe_frame(12.34, 56.78, &selection, &PHONE);
        let b = describe_frame(12.34, 56.78, &selection, &PHONE);
        assert_eq!(a, b);
    }

    #[test]
    fn draw_order_is_center_fast_slow() {
        let circles = describe_frame(0.0, 0.0, &Selection::default(), &PHONE);
        let mut recorder = Recorder::default();
        draw_frame(&circles, &mut recorder);
        let colors: Vec<Color> = recorder.calls.iter().map(|c| c.2).collect();
        assert_eq!(colors, vec![Color::RED, Color::CYAN, Color::MAGENTA]);
    }
}
