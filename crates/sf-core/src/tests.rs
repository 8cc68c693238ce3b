//! Unit tests for sf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, UnitId};

    #[test]
    fn display_is_raw_string() {
        assert_eq!(UnitId::new("BAT-001").to_string(), "BAT-001");
        assert_eq!(StationId::from("st-1").as_str(), "st-1");
    }

    #[test]
    fn blank_detection() {
        assert!(UnitId::new("  ").is_blank());
        assert!(!UnitId::new("u1").is_blank());
    }

    #[test]
    fn ordering_and_equality() {
        assert!(UnitId::new("a") < UnitId::new("b"));
        assert_eq!(UnitId::new("x"), UnitId::from("x".to_owned()));
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, GeoVec};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.47, 77.05);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn planar_distance_matches_pythagoras() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn toward_then_offset_roundtrips() {
        let a = GeoPoint::new(28.47, 77.05);
        let b = GeoPoint::new(28.475, 77.045);
        let v = a.toward(b);
        assert_eq!(a.offset(v), b);
    }

    #[test]
    fn vec_addition_and_scaling() {
        let v = GeoVec::new(1.0, -2.0) + GeoVec::new(0.5, 0.5);
        assert_eq!(v, GeoVec::new(1.5, -1.5));
        assert_eq!(v * 2.0, GeoVec::new(3.0, -3.0));
        assert!(GeoVec::ZERO.is_zero());
    }

    #[test]
    fn norm() {
        assert!((GeoVec::new(3.0, 4.0).norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_detected() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(GeoPoint::new(28.4, 77.0).is_finite());
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn arithmetic_and_display() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(3) + 5, Tick(8));
        assert_eq!(Tick(7).to_string(), "T7");
    }
}

#[cfg(test)]
mod rng {
    use crate::{EntityRng, SimRng, Tick};

    #[test]
    fn same_seed_key_tick_reproduces() {
        let mut a = EntityRng::derive(42, "BAT-001", Tick(5));
        let mut b = EntityRng::derive(42, "BAT-001", Tick(5));
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_tick_diverges() {
        let mut a = EntityRng::derive(42, "BAT-001", Tick(5));
        let mut b = EntityRng::derive(42, "BAT-001", Tick(6));
        // Sixteen consecutive collisions would be astronomically unlikely.
        let same = (0..16).filter(|_| a.random::<u64>() == b.random::<u64>()).count();
        assert!(same < 16);
    }

    #[test]
    fn different_key_diverges() {
        let mut a = EntityRng::derive(42, "BAT-001", Tick(0));
        let mut b = EntityRng::derive(42, "BAT-002", Tick(0));
        let same = (0..16).filter(|_| a.random::<u64>() == b.random::<u64>()).count();
        assert!(same < 16);
    }

    #[test]
    fn jitter_within_half_range() {
        let mut rng = EntityRng::derive(1, "u", Tick(0));
        for _ in 0..1000 {
            let j = rng.jitter(0.0045);
            assert!((-0.0045..0.0045).contains(&j), "jitter {j} out of range");
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = EntityRng::derive(1, "u", Tick(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert!(rng.choose(&[7]).is_some());
    }

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
        assert_eq!(a.gen_range(0.0..1.0_f64), b.gen_range(0.0..1.0_f64));
    }
}

#[cfg(test)]
mod params {
    use crate::{GeoPoint, ServiceArea, SimParams, SimRng};

    #[test]
    fn defaults_validate() {
        SimParams::default().validate().unwrap();
    }

    #[test]
    fn empty_area_rejected() {
        let mut p = SimParams::default();
        p.area.lat_max = p.area.lat_min;
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_rate_rejected() {
        let p = SimParams { drain_rate: -1.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn correction_pushes_back_inside() {
        let area = ServiceArea::default();
        let below = GeoPoint::new(area.lat_min - 0.01, 77.0);
        let force = area.correction(below, 0.012);
        assert_eq!(force.d_lat, 0.012);
        assert_eq!(force.d_lng, 0.0);

        let beyond = GeoPoint::new(28.45, area.lng_max + 0.01);
        let force = area.correction(beyond, 0.012);
        assert_eq!(force.d_lat, 0.0);
        assert_eq!(force.d_lng, -0.012);

        let inside = area.center();
        assert!(area.correction(inside, 0.012).is_zero());
    }

    #[test]
    fn random_point_inside_area() {
        let area = ServiceArea::default();
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            assert!(area.contains(area.random_point(&mut rng)));
        }
    }

    #[test]
    fn center_is_midpoint() {
        let c = ServiceArea::default().center();
        assert!((c.lat - 28.45).abs() < 1e-9);
        assert!((c.lng - 77.05).abs() < 1e-9);
    }
}
