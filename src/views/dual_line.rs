// src/views/dual_line.rs
use crate::ops::lc;
use crate::views::{FlatPoint, Plane};

view! {
    /// The dual of a [`Line`](crate::views::Line).
    DualLine, group 2;
    e1_e2 => [2] * 1.0,
    e1_e3 => [4] * 1.0,
    e2_e3 => [5] * 1.0,
    e1_ni => [7] * 1.0,
    e2_ni => [8] * 1.0,
    e3_ni => [9] * 1.0,
}

impl DualLine {
    /// `self ⌋ plane`, the meet of the (undualized) line with the plane.
    pub fn lc_plane(&self, plane: &Plane) -> FlatPoint {
        FlatPoint::from(lc(&(*self).into(), &(*plane).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multivector::Multivector;
    use crate::ops::dual;
    use crate::views::Line;

    #[test]
    fn dual_of_line_has_no_origin_terms() {
        let l = Multivector::from(Line::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0));
        let d = dual(&l);
        assert_eq!(d.no_ni(), 0.0);
        assert_eq!(d.no_e1(), 0.0);
        let dl = DualLine::from(&d);
        assert_eq!(Multivector::from(dl), d);
    }

    #[test]
    fn embedding() {
        let mv = Multivector::from(DualLine::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(mv.group(2).unwrap(), &[0.0, 0.0, 1.0, 0.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0]);
    }
}
