//! Unit tests for sky-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_cast() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(EdgeId(7).index(), 7);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::PlanarPoint;

    #[test]
    fn zero_distance() {
        let p = PlanarPoint::new(150.0, 350.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        // Symmetric.
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = PlanarPoint::new(10.0, 20.0);
        let b = PlanarPoint::new(30.0, 60.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 20.0).abs() < 1e-6);
        assert!((mid.y - 40.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod cost {
    use crate::{CostFactors, CostModel, CostVector};

    #[test]
    fn add_accumulates_each_dimension() {
        let mut total = CostVector::ZERO;
        total += CostVector::new(10.0, 8.0, 12.0);
        total += CostVector::new(5.0, 4.0, 6.0);
        assert_eq!(total, CostVector::new(15.0, 12.0, 18.0));
    }

    #[test]
    fn scaled_is_component_wise() {
        let c = CostVector::new(100.0, 80.0, 120.0);
        let f = CostFactors::new(1.3, 1.4, 1.3);
        let s = c.scaled(f);
        assert!((s.distance - 130.0).abs() < 1e-3);
        assert!((s.time - 112.0).abs() < 1e-3);
        assert!((s.fuel - 156.0).abs() < 1e-3);
    }

    #[test]
    fn identity_factors_change_nothing() {
        let c = CostVector::new(1.0, 2.0, 3.0);
        assert_eq!(c.scaled(CostFactors::NONE), c);
    }

    #[test]
    fn factor_validity() {
        assert!(CostFactors::NONE.is_valid());
        assert!(CostFactors::new(1.3, 1.4, 1.3).is_valid());
        assert!(!CostFactors::new(0.9, 1.0, 1.0).is_valid());
        assert!(!CostFactors::new(f32::NAN, 1.0, 1.0).is_valid());
        assert!(CostFactors::time_only(1.25).is_valid());
    }

    #[test]
    fn model_derives_time_and_fuel() {
        let c = CostModel::default().from_distance(100.0);
        assert!((c.distance - 100.0).abs() < 1e-6);
        assert!((c.time - 80.0).abs() < 1e-4);
        assert!((c.fuel - 120.0).abs() < 1e-4);
    }

    #[test]
    fn display_one_decimal() {
        let c = CostVector::new(123.456, 98.76, 148.1);
        assert_eq!(c.to_string(), "distance 123.5, time 98.8, fuel 148.1");
    }
}

#[cfg(test)]
mod time {
    use crate::Millis;

    #[test]
    fn since_and_offset() {
        let start = Millis(1_000);
        assert_eq!(start.offset(500).since(start), 500);
        assert_eq!((start + 3_000).since(start), 3_000);
    }

    #[test]
    fn since_saturates_backwards() {
        assert_eq!(Millis(100).since(Millis(200)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Millis(1500).to_string(), "1500ms");
    }
}
