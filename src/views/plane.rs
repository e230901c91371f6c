// src/views/plane.rs

view! {
    /// A plane through three points, `p ^ q ^ r ^ ni`.
    Plane, group 4;
    e1_e2_e3_ni => [4] * 1.0,
    no_e2_e3_ni => [3] * 1.0,
    no_e1_e3_ni => [2] * 1.0,
    no_e1_e2_ni => [1] * 1.0,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::GROUP_4;
    use crate::multivector::Multivector;
    use crate::ops::op;
    use crate::views::{cga_point, ni};

    #[test]
    fn plane_y_equals_two() {
        let p = Multivector::from(cga_point(1.0, 2.0, 0.0));
        let q = Multivector::from(cga_point(1.0, 2.0, 1.0));
        let r = Multivector::from(cga_point(0.0, 2.0, 1.0));
        let plane = Plane::from(op(&p, &op(&q, &op(&r, &ni()))));
        // normal along e2 only
        assert_eq!(plane.no_e2_e3_ni, 0.0);
        assert_eq!(plane.no_e1_e2_ni, 0.0);
        assert!(plane.no_e1_e3_ni != 0.0);
        // distance 2 from the origin
        assert_eq!(plane.e1_e2_e3_ni, -2.0 * plane.no_e1_e3_ni);
    }

    #[test]
    fn embedding_zeroes_origin_blade() {
        let mv = Multivector::from(Plane::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(mv.gu(), GROUP_4);
        assert_eq!(mv.group(4).unwrap(), &[0.0, 4.0, 3.0, 2.0, 1.0]);
    }
}
