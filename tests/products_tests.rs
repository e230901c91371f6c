// tests/products_tests.rs
use cga_engine::basis::{GROUP_0, GROUP_1, GROUP_2, GROUP_SIZE, NB_GROUPS};
use cga_engine::ops::{add, equals, gp, lc, mhip, op, sp, subtract};
use cga_engine::{Multivector, Scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: Scalar = 1e-4;

/// A multivector with each group present with probability 1/2.
fn random_sparse(rng: &mut StdRng) -> Multivector {
    let mut mv = Multivector::zero();
    for g in 0..NB_GROUPS {
        if rng.gen_bool(0.5) {
            let coords: Vec<Scalar> = (0..GROUP_SIZE[g]).map(|_| rng.gen_range(-1.0..1.0)).collect();
            mv.set_group(g, Some(coords)).unwrap();
        }
    }
    mv
}

fn random_vector(rng: &mut StdRng) -> Multivector {
    let coords: Vec<Scalar> = (0..5).map(|_| rng.gen_range(-2.0..2.0)).collect();
    Multivector::from_compressed(GROUP_1, &coords).unwrap()
}

#[test]
fn gp_distributes_over_addition() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (a, b, c) = (random_sparse(&mut rng), random_sparse(&mut rng), random_sparse(&mut rng));
        let lhs = gp(&add(&a, &c), &b);
        let rhs = add(&gp(&a, &b), &gp(&c, &b));
        assert!(equals(&lhs, &rhs, EPS), "{lhs:?} != {rhs:?}");
    }
}

#[test]
fn gp_is_associative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let (a, b, c) = (random_sparse(&mut rng), random_sparse(&mut rng), random_sparse(&mut rng));
        assert!(equals(&gp(&gp(&a, &b), &c), &gp(&a, &gp(&b, &c)), EPS));
    }
}

#[test]
fn outer_product_of_vectors_anticommutes() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let (a, b) = (random_vector(&mut rng), random_vector(&mut rng));
        let ab = op(&a, &b);
        assert_eq!(ab.gu(), GROUP_2);
        assert!(equals(&ab, &-op(&b, &a), EPS));
        assert!(op(&a, &a).is_zero(EPS));
    }
}

#[test]
fn vector_product_splits_into_inner_and_outer() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let (a, b) = (random_vector(&mut rng), random_vector(&mut rng));
        let sum = add(&lc(&a, &b), &op(&a, &b));
        assert!(equals(&gp(&a, &b), &sum, EPS));
        assert!((sp(&a, &b) - lc(&a, &b).scalar()).abs() < EPS);
        assert!(equals(&mhip(&a, &b), &lc(&a, &b), EPS));
    }
}

#[test]
fn contraction_of_vector_onto_bivector() {
    // a ⌋ (b ^ c) = (a·b) c - (a·c) b
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let (a, b, c) = (random_vector(&mut rng), random_vector(&mut rng), random_vector(&mut rng));
        let lhs = lc(&a, &op(&b, &c));
        let rhs = subtract(&(&c * sp(&a, &b)), &(&b * sp(&a, &c)));
        assert!(equals(&lhs, &rhs, EPS));
    }
}

#[test]
fn compressing_does_not_change_products() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let mut a = random_sparse(&mut rng);
        let b = random_sparse(&mut rng);
        // add near-zero groups that compression will drop
        for g in 0..NB_GROUPS {
            if a.group(g).is_none() {
                a.set_group(g, Some(vec![1e-12; GROUP_SIZE[g]])).unwrap();
            }
        }
        let mut compressed = a.clone();
        compressed.compress(1e-9);
        for f in [gp, op, lc, mhip] {
            assert!(equals(&f(&a, &b), &f(&compressed, &b), EPS));
        }
        assert!((sp(&a, &b) - sp(&compressed, &b)).abs() < EPS);
    }
}

#[test]
fn scalar_product_ignores_mixed_grades() {
    let mut a = Multivector::from_scalar(2.0);
    a.set_e1(1.0);
    let mut b = Multivector::from_scalar(3.0);
    b.set_e1_e2(5.0);
    assert_eq!(sp(&a, &b), 6.0);
    assert_eq!(gp(&a, &b).gu() & GROUP_0, GROUP_0);
}
