use num::BigRational;
use rational_poly::{solve_for_polynomial, ParseError, Polynomial, Root, Term};

fn texts(roots: &[Root]) -> Vec<String> {
    roots.iter().map(ToString::to_string).collect()
}

fn init_logger() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
}

#[test]
fn cubic_with_integer_roots() {
    init_logger();
    let p: Polynomial = "x^3 + 6x^2 + 11x + 6".parse().unwrap();
    assert_eq!(texts(&solve_for_polynomial(&p)), vec!["-3", "-2", "-1"]);
}

#[test]
fn fractional_coefficients() {
    init_logger();
    let p: Polynomial = "x^2 + 7/15x + -4/15".parse().unwrap();
    assert_eq!(p.to_string(), "x^2 + 7/15x - 4/15");
    assert_eq!(texts(&p.x_intercepts()), vec!["-4/5", "1/3"]);
    assert_eq!(p.y_intercept(), BigRational::new((-4).into(), 15.into()));
}

#[test]
fn surds() {
    init_logger();
    let p: Polynomial = "-x^2 + 2x + 1".parse().unwrap();
    assert_eq!(texts(&p.x_intercepts()), vec!["1-sqrt(2)", "1+sqrt(2)"]);
    assert_eq!(texts(&p.critical_points()), vec!["1"]);
}

#[test]
fn approximate_root() {
    init_logger();
    let p: Polynomial = "x^3 - 100000".parse().unwrap();
    let roots = p.x_intercepts();
    assert_eq!(texts(&roots), vec!["46.415888"]);
    assert!(!roots[0].is_exact());
}

#[test]
fn zero_polynomial() {
    init_logger();
    let p = Polynomial::new();
    assert!(p.x_intercepts().is_empty());
    let summary = p.summary();
    assert!(summary.is_zero);
}

#[test]
fn build_term_by_term() {
    let mut p = Polynomial::new();
    p.add_term(Term::new(6, 1, 0));
    p.add_term(Term::new(1, 1, 3));
    p.add_term(Term::new(11, 1, 1));
    p.add_term(Term::new(6, 1, 2));
    assert_eq!(p.to_string(), "x^3 + 6x^2 + 11x + 6");
    assert_eq!(p.degree(), Some(3));
    assert_eq!(p.evaluate(-1.0), 0.0);

    // cancelling the leading term removes it
    p.add_term(Term::new(-1, 1, 3));
    assert_eq!(p.to_string(), "6x^2 + 11x + 6");
}

#[test]
fn derivatives_and_summary() {
    init_logger();
    let p: Polynomial = "1/4x^4 - 2x^2".parse().unwrap();
    assert_eq!(p.derivative().to_string(), "x^3 - 4x");
    assert_eq!(p.nth_derivative(2).to_string(), "3x^2 - 4");

    let summary = p.summary();
    assert_eq!(
        texts(&summary.x_intercepts),
        vec!["-2sqrt(2)", "0", "2sqrt(2)"]
    );
    assert_eq!(texts(&summary.critical_points), vec!["-2", "0", "2"]);
    assert_eq!(
        texts(&summary.inflection_points),
        vec!["-2sqrt(3)/3", "2sqrt(3)/3"]
    );
}

#[test]
fn parse_errors() {
    assert!(matches!(
        "x^2 + 1/0".parse::<Polynomial>(),
        Err(ParseError::ZeroDenominator { .. })
    ));
    assert!(matches!(
        "x^-2".parse::<Polynomial>(),
        Err(ParseError::InvalidDegree { .. })
    ));
    assert!(matches!(
        "2y".parse::<Polynomial>(),
        Err(ParseError::InvalidInteger { .. })
    ));
    assert!(matches!(
        "3x2".parse::<Polynomial>(),
        Err(ParseError::UnexpectedInput { .. })
    ));
}

#[test]
fn arithmetic_then_solve() {
    init_logger();
    let a: Polynomial = "x - 1/2".parse().unwrap();
    let b: Polynomial = "x^2 - 5".parse().unwrap();
    let product = a * b;
    assert_eq!(product.to_string(), "x^3 - 1/2x^2 - 5x + 5/2");
    assert_eq!(
        texts(&product.x_intercepts()),
        vec!["-sqrt(5)", "1/2", "sqrt(5)"]
    );
}

#[test]
fn large_coefficients() {
    init_logger();
    let p: Polynomial = "x^2 + 4000000000x + 1".parse().unwrap();
    let summary = p.summary();
    assert_eq!(summary.x_intercepts.len(), 2);
    assert!(summary.x_intercepts.iter().all(Root::is_exact));
    assert_eq!(texts(&summary.critical_points), vec!["-2000000000"]);
    assert!(summary.inflection_points.is_empty());

    let p: Polynomial = "62710561x^3 - 62615533x^2 + 7919x - 7907".parse().unwrap();
    assert_eq!(texts(&p.x_intercepts()), vec!["7907/7919"]);
}

#[test]
fn huge_degree() {
    init_logger();
    let p: Polynomial = "x^4000000000 + 1".parse().unwrap();
    let summary = p.summary();
    assert!(summary.x_intercepts.is_empty());
    assert_eq!(texts(&summary.critical_points), vec!["0"]);
    assert_eq!(texts(&summary.inflection_points), vec!["0"]);
    assert_eq!(
        p.nth_derivative(2).to_string(),
        "15999999996000000000x^3999999998"
    );
}
