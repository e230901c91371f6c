// src/ops/involution.rs
//! Grade-wise sign flips: reverse, grade involution, Clifford conjugate and
//! negation. All keep the group structure of their input.

use crate::basis::NB_GROUPS;
use crate::group;
use crate::multivector::Multivector;

/// Per-grade signs of the reverse: `(-1)^(g(g-1)/2)`.
const REVERSE_SIGNS: [bool; NB_GROUPS] = [false, false, true, true, false, false];
/// Per-grade signs of the grade involution: `(-1)^g`.
const INVOLUTION_SIGNS: [bool; NB_GROUPS] = [false, true, false, true, false, true];
/// Per-grade signs of the Clifford conjugate: `(-1)^(g(g+1)/2)`.
const CONJUGATE_SIGNS: [bool; NB_GROUPS] = [false, true, true, false, false, true];

fn flip_grades(a: &Multivector, negate: &[bool; NB_GROUPS]) -> Multivector {
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        let dst = c.group_mut(g);
        if negate[g] {
            group::neg(ac, dst);
        } else {
            group::copy(dst, ac);
        }
    }
    c
}

pub fn reverse(a: &Multivector) -> Multivector {
    flip_grades(a, &REVERSE_SIGNS)
}

pub fn grade_involution(a: &Multivector) -> Multivector {
    flip_grades(a, &INVOLUTION_SIGNS)
}

pub fn clifford_conjugate(a: &Multivector) -> Multivector {
    flip_grades(a, &CONJUGATE_SIGNS)
}

pub fn negate(a: &Multivector) -> Multivector {
    flip_grades(a, &[true; NB_GROUPS])
}

impl Multivector {
    /// Reverse: negates grades 2 and 3.
    pub fn reverse(&self) -> Self {
        reverse(self)
    }

    /// Grade involution: negates odd grades.
    pub fn grade_involution(&self) -> Self {
        grade_involution(self)
    }

    /// Clifford conjugate: negates grades 1, 2 and 5.
    pub fn clifford_conjugate(&self) -> Self {
        clifford_conjugate(self)
    }

    pub fn negate(&self) -> Self {
        negate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scalar;

    fn ones() -> Multivector {
        Multivector::from_coordinates(&[1.0; 32])
    }

    fn signs(mv: &Multivector) -> Vec<Scalar> {
        (0..NB_GROUPS).map(|g| mv.get(g, 0)).collect()
    }

    #[test]
    fn grade_signs() {
        let a = ones();
        assert_eq!(signs(&reverse(&a)), vec![1.0, 1.0, -1.0, -1.0, 1.0, 1.0]);
        assert_eq!(signs(&grade_involution(&a)), vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
        assert_eq!(signs(&clifford_conjugate(&a)), vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0]);
        assert_eq!(signs(&negate(&a)), vec![-1.0; 6]);
    }

    #[test]
    fn conjugate_is_reverse_of_involution() {
        let a = ones();
        assert_eq!(clifford_conjugate(&a), reverse(&grade_involution(&a)));
    }

    #[test]
    fn structure_is_kept() {
        let mut a = Multivector::zero();
        a.set_e1_e2_ni(2.0);
        let r = a.reverse();
        assert_eq!(r.gu(), a.gu());
        assert_eq!(r.e1_e2_ni(), -2.0);
    }
}
