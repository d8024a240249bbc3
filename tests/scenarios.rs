use exact_num::{ArithmeticError, BigInteger, Rational, TokenReader};

#[test]
fn basic_test_bi() {
    let mut a = BigInteger::from(5);
    a += BigInteger::from(10);
    assert_eq!(a, BigInteger::from(15));
    a += BigInteger::from(10);
    assert_eq!(a, BigInteger::from(25));

    let b: BigInteger = "100000".parse().unwrap();
    assert_eq!(&b / &a, BigInteger::from(4000));
    assert_eq!(&b + &a, BigInteger::from(100025));
    assert_eq!(&b * &a, BigInteger::from(2500000));
    assert_eq!(&b - &a, BigInteger::from(99975));

    let mut reader = TokenReader::new("123 285".as_bytes());
    let c = reader.next().unwrap().unwrap();
    let d = reader.next().unwrap().unwrap();
    assert_eq!(c + d, BigInteger::from(408));
}

#[test]
fn basic_test_rational() {
    let mut a = Rational::from(15);
    a /= Rational::from(20);
    assert_eq!(a.as_decimal(2), "0.75");
    let b = Rational::from(7);
    a /= b;
    assert_eq!(*a.denominator(), BigInteger::from(28));
    assert_eq!(*a.numerator(), BigInteger::from(3));
    assert_eq!(a.to_string(), "3/28");
}

#[test]
fn division_by_zero_is_an_error() {
    let zero = BigInteger::from(0);
    assert!(matches!(
        BigInteger::from(42).checked_div(&zero),
        Err(ArithmeticError::DivisionByZero)
    ));
    assert!(matches!(
        BigInteger::from(42).checked_rem(&zero),
        Err(ArithmeticError::DivisionByZero)
    ));
    assert!(matches!(
        Rational::from(42).checked_div(&Rational::from(0)),
        Err(ArithmeticError::DivisionByZero)
    ));
}

#[test]
fn factorial_quotients() {
    let factorial = |n: u32| (1..=n).fold(BigInteger::from(1), |acc, k| acc * BigInteger::from(k));
    let f50 = factorial(50);
    assert_eq!(
        f50.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
    assert_eq!(&f50 / &factorial(48), BigInteger::from(50 * 49));
    assert_eq!(&f50 % &factorial(48), BigInteger::from(0));

    let harmonic = (1..=10).fold(Rational::from(0), |acc, k| {
        acc + Rational::new(1.into(), BigInteger::from(k)).unwrap()
    });
    assert_eq!(harmonic.to_string(), "7381/2520");
    assert_eq!(harmonic.as_decimal(10), "2.9289682539");
}
