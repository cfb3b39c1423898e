//! Hazard placement
//!
//! Hazards are placed once per reset, drawing only from the state's owned
//! RNG. Placement never fails: the scatter strategy degrades to a sparser
//! field when its attempt budget runs out.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::HazardLayout;
use crate::consts::PLACEMENT_ATTEMPTS;
use crate::geom::Rect;

/// Place hazards for a fresh episode
pub fn place_hazards(layout: &HazardLayout, ball_radius: f32, rng: &mut Pcg32) -> Vec<Vec2> {
    match layout {
        HazardLayout::None => Vec::new(),
        HazardLayout::Fixed(points) => points.clone(),
        HazardLayout::Scatter {
            count,
            margin,
            zone,
        } => scatter(*count, *margin, zone, ball_radius, rng),
        HazardLayout::Rows { bases, jitter } => rows(bases, *jitter, rng),
    }
}

/// Rejection-sampled scatter. Every accepted pair is separated by at least
/// `2 * ball_radius + margin`; candidates land inside `zone` shrunk by
/// `ball_radius + margin` so hazards stay clear of the zone boundary.
fn scatter(count: usize, margin: f32, zone: &Rect, ball_radius: f32, rng: &mut Pcg32) -> Vec<Vec2> {
    let bounds = zone.shrink(ball_radius + margin);
    let min_sep = 2.0 * ball_radius + margin;

    let mut accepted: Vec<Vec2> = Vec::with_capacity(count);
    let mut attempts = 0;
    while accepted.len() < count && attempts < PLACEMENT_ATTEMPTS {
        attempts += 1;
        let candidate = Vec2::new(
            rng.random_range(bounds.left()..=bounds.right()),
            rng.random_range(bounds.top()..=bounds.bottom()),
        );
        if accepted.iter().all(|p| p.distance(candidate) >= min_sep) {
            accepted.push(candidate);
        }
    }

    if accepted.len() < count {
        log::warn!(
            "hazard placement budget exhausted: placed {} of {}",
            accepted.len(),
            count
        );
    }
    accepted
}

/// Fixed base points, each shifted right by `uniform(0, jitter)`
fn rows(bases: &[Vec2], jitter: f32, rng: &mut Pcg32) -> Vec<Vec2> {
    bases
        .iter()
        .map(|b| Vec2::new(b.x + rng.random_range(0.0..=jitter), b.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_none_layout_is_empty() {
        assert!(place_hazards(&HazardLayout::None, 18.0, &mut rng(0)).is_empty());
    }

    #[test]
    fn test_fixed_layout_returns_exact_points() {
        let points = vec![Vec2::new(350.0, 200.0), Vec2::new(230.0, 450.0)];
        let layout = HazardLayout::Fixed(points.clone());
        assert_eq!(place_hazards(&layout, 18.0, &mut rng(0)), points);
        // Same list again on a later reset
        assert_eq!(place_hazards(&layout, 18.0, &mut rng(99)), points);
    }

    #[test]
    fn test_scatter_fills_roomy_zone() {
        // Wide enough that five separated holes always fit
        let zone = Rect::new(100.0, 100.0, 536.0, 436.0);
        let pts = scatter(5, 50.0, &zone, 18.0, &mut rng(42));
        assert_eq!(pts.len(), 5);

        let bounds = zone.shrink(18.0 + 50.0);
        for p in &pts {
            assert!(bounds.contains(*p), "{p:?} outside {bounds:?}");
        }
    }

    #[test]
    fn test_scatter_pairwise_separation() {
        let zone = Rect::new(200.0, 150.0, 320.0, 350.0);
        let pts = scatter(5, 50.0, &zone, 18.0, &mut rng(7));
        let min_sep = 2.0 * 18.0 + 50.0;
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(pts[i].distance(pts[j]) >= min_sep);
            }
        }
    }

    #[test]
    fn test_scatter_shortfall_degrades_without_panic() {
        // Zone too small for 20 well-separated holes
        let zone = Rect::new(0.0, 0.0, 200.0, 200.0);
        let pts = scatter(20, 50.0, &zone, 18.0, &mut rng(5));
        assert!(pts.len() < 20);
        assert!(!pts.is_empty());
    }

    #[test]
    fn test_scatter_deterministic_per_seed() {
        let zone = Rect::new(200.0, 150.0, 320.0, 350.0);
        let a = scatter(5, 50.0, &zone, 18.0, &mut rng(123));
        let b = scatter(5, 50.0, &zone, 18.0, &mut rng(123));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_jitter_bounds() {
        let bases = vec![Vec2::new(600.0, 200.0), Vec2::new(500.0, 450.0)];
        let layout = HazardLayout::Rows {
            bases: bases.clone(),
            jitter: 100.0,
        };
        let pts = place_hazards(&layout, 18.0, &mut rng(11));
        assert_eq!(pts.len(), bases.len());
        for (p, b) in pts.iter().zip(&bases) {
            assert_eq!(p.y, b.y);
            assert!(p.x >= b.x && p.x <= b.x + 100.0);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn scatter_separation_holds_for_any_seed(seed in 0u64..u64::MAX) {
            let zone = Rect::new(200.0, 150.0, 320.0, 350.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let pts = scatter(5, 50.0, &zone, 18.0, &mut rng);
            let min_sep = 2.0 * 18.0 + 50.0;
            for i in 0..pts.len() {
                for j in (i + 1)..pts.len() {
                    prop_assert!(pts[i].distance(pts[j]) >= min_sep);
                }
            }
        }

        #[test]
        fn scatter_stays_inside_shrunk_zone(seed in 0u64..u64::MAX) {
            let zone = Rect::new(200.0, 150.0, 320.0, 350.0);
            let bounds = zone.shrink(18.0 + 50.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            for p in scatter(5, 50.0, &zone, 18.0, &mut rng) {
                prop_assert!(bounds.contains(p));
            }
        }
    }
}
