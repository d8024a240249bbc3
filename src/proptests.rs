//! Property-based tests for integer and rational arithmetic.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{BigInteger, Rational, Sign};

// Decimal literals long enough to span several limbs
fn literal() -> impl Strategy<Value = String> {
    "-?[0-9]{1,40}"
}

fn big_int() -> impl Strategy<Value = BigInteger> {
    literal().prop_map(|s| s.parse().unwrap())
}

fn non_zero_big_int() -> impl Strategy<Value = BigInteger> {
    big_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

fn rational() -> impl Strategy<Value = Rational> {
    (-1000i64..1000i64, prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)])
        .prop_map(|(n, d)| Rational::new(n.into(), d.into()).unwrap())
}

proptest! {
    #[test]
    fn round_trip(s in literal()) {
        let a: BigInteger = s.parse().unwrap();
        let printed = a.to_string();
        prop_assert_eq!(printed.parse::<BigInteger>().unwrap(), a.clone());
        prop_assert!(!printed.starts_with("-0"));
        prop_assert!(printed == "0" || !printed.trim_start_matches('-').starts_with('0'));
    }

    #[test]
    fn matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInteger::from(a), BigInteger::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        if b != 0 {
            prop_assert_eq!((&x / &y).to_string(), (a / b).to_string());
            prop_assert_eq!((&x % &y).to_string(), (a % b).to_string());
        }
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn additive_identity_and_inverse(a in big_int()) {
        prop_assert_eq!(&a + &BigInteger::zero(), a.clone());
        prop_assert_eq!(&a + &(-&a), BigInteger::zero());
        prop_assert_eq!((&a - &a).sign(), Sign::Neutral);
    }

    #[test]
    fn add_commutative_associative(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutative_associative(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn division_modulo_law(a in big_int(), b in non_zero_big_int()) {
        let q = &a / &b;
        let r = &a % &b;
        prop_assert_eq!(&b * &q + &r, a.clone());
        prop_assert_eq!(r.compare_abs(&b), std::cmp::Ordering::Less);
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    }

    #[test]
    fn ordering_totality(a in big_int(), b in big_int()) {
        let held = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(a < b, (&b - &a).sign() == Sign::Positive);
    }

    #[test]
    fn rational_reduced(a in rational(), b in rational()) {
        for r in [&a + &b, &a - &b, &a * &b] {
            prop_assert_eq!(r.denominator().sign(), Sign::Positive);
            if r.is_zero() {
                prop_assert!(r.denominator().is_one());
            } else {
                prop_assert!(Rational::gcd(r.numerator(), r.denominator()).is_one());
            }
        }
    }

    #[test]
    fn rational_field_laws(a in rational(), b in rational()) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        if !b.is_zero() {
            prop_assert_eq!(&(&a / &b) * &b, a.clone());
        }
        prop_assert_eq!(a < b, (&b - &a).signum() == Sign::Positive);
    }
}
