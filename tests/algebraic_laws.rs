//! Randomized checks of the scalar-ring, group, and scalar-multiplication
//! laws spec.md §8 lists under "Algebraic laws" — distinct from
//! `official_test_vectors.rs`'s fixed scenarios, these sample many
//! independent random scalars/points per run via `rand` (a dev-only
//! dependency; the library itself never samples randomness, per
//! spec.md §1's exclusion of secure random generation).

use rand::RngCore;

use ristretto255::constants::{GROUP_ORDER, RISTRETTO_BASEPOINT_POINT};
use ristretto255::ristretto::RistrettoPoint;
use ristretto255::scalar::Scalar;

const SAMPLES: usize = 64;

fn random_scalar(rng: &mut impl RngCore) -> Scalar {
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    Scalar::decode_long(&bytes)
}

fn random_point(rng: &mut impl RngCore) -> RistrettoPoint {
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    RistrettoPoint::from_uniform_bytes(&bytes)
}

#[test]
fn scalar_ring_laws_hold() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let c = random_scalar(&mut rng);

        // Associativity and commutativity of +.
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.add(&b), b.add(&a));

        // Associativity and commutativity of *.
        assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        assert_eq!(a.mul(&b), b.mul(&a));

        // Distributivity.
        assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));

        // Identities.
        assert_eq!(a.add(&Scalar::ZERO), a);
        assert_eq!(a.mul(&Scalar::ONE), a);

        // halve(a) * 2 == a.
        let halved = a.halve();
        assert_eq!(halved.add(&halved), a);

        // a - a == 0, a + (-a) == 0.
        assert!(bool::from(a.sub(&a).is_zero()));
        assert!(bool::from(a.add(&a.negate()).is_zero()));
    }
}

#[test]
fn scalar_invert_is_multiplicative_inverse_unless_zero() {
    let mut rng = rand::thread_rng();
    assert!(Scalar::ZERO.invert().is_none());
    for _ in 0..SAMPLES {
        let a = random_scalar(&mut rng);
        if bool::from(a.is_zero()) {
            continue;
        }
        let inv = a.invert().expect("nonzero scalar must invert");
        assert_eq!(a.mul(&inv), Scalar::ONE);
    }
}

#[test]
fn group_laws_hold() {
    let mut rng = rand::thread_rng();
    let identity = RistrettoPoint::default();
    for _ in 0..SAMPLES {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let r = random_point(&mut rng);

        assert_eq!((p + identity).compress(), p.compress());
        assert_eq!((p + (-p)).compress().to_bytes(), [0u8; 32]);
        assert_eq!((p + q).compress(), (q + p).compress());
        assert_eq!(((p + q) + r).compress(), (p + (q + r)).compress());
        assert_eq!(p.double().compress(), (p + p).compress());
    }
}

#[test]
fn scalarmul_distributes_over_scalar_and_point_addition() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let s = random_scalar(&mut rng);
        let t = random_scalar(&mut rng);
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);

        // (s + t) * P == s*P + t*P
        let lhs = p.mul(&s.add(&t));
        let rhs = p.mul(&s) + p.mul(&t);
        assert_eq!(lhs.compress(), rhs.compress());

        // s * (P + Q) == s*P + s*Q
        let lhs = (p + q).mul(&s);
        let rhs = p.mul(&s) + q.mul(&s);
        assert_eq!(lhs.compress(), rhs.compress());

        // 1*P == P, 0*P == identity.
        assert_eq!(p.mul(&Scalar::ONE).compress(), p.compress());
        assert_eq!(p.mul(&Scalar::ZERO).compress().to_bytes(), [0u8; 32]);

        // (-s) * P == -(s*P)
        assert_eq!(p.mul(&s.negate()).compress(), (-p.mul(&s)).compress());
    }
}

#[test]
fn group_order_annihilates_random_points() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let p = random_point(&mut rng);
        let result = p.mul(&GROUP_ORDER);
        assert_eq!(result.compress().to_bytes(), [0u8; 32]);
    }
}

#[test]
fn dual_and_double_scalarmul_match_independent_multiplications() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let s = random_scalar(&mut rng);
        let t = random_scalar(&mut rng);

        let (d1, d2) = RistrettoPoint::dual_scalarmul(&s, &t, &p);
        assert_eq!(d1.compress(), p.mul(&s).compress());
        assert_eq!(d2.compress(), p.mul(&t).compress());

        let combined = RistrettoPoint::double_scalarmul(&s, &p, &t, &q);
        let separate = p.mul(&s) + q.mul(&t);
        assert_eq!(combined.compress(), separate.compress());

        let vartime = RistrettoPoint::vartime_double_scalar_mul_basepoint(&s, &p, &t);
        let basepoint = RISTRETTO_BASEPOINT_POINT();
        let expected = p.mul(&s) + basepoint.mul(&t);
        assert_eq!(vartime.compress(), expected.compress());
    }
}
