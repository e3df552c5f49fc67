//! The association-list lookup function called by desugared dictionaries.

use rhizome_sprout_ir::builders::{app, define, if_, lambda, prim, var};
use rhizome_sprout_ir::{Expression, TopLevel};

/// Name the lookup function is bound to.
pub const LOOKUP_NAME: &str = "dict";

fn car(expr: Expression) -> Expression {
    app(prim("car"), vec![expr])
}

fn cdr(expr: Expression) -> Expression {
    app(prim("cdr"), vec![expr])
}

/// Build the top-level definition of the lookup function.
///
/// ```scheme
/// (define dict
///   (lambda (pairs)
///     (lambda (k)
///       (if (eq? (car (car pairs)) k)
///           (cdr (car pairs))
///           ((dict (cdr pairs)) k)))))
/// ```
///
/// A key missing from the list ends in `(car ())`, which the evaluator
/// reports as an error. There is no default value.
pub fn synthesize_lookup() -> TopLevel {
    let pairs = || var("pairs");
    let body = if_(
        app(prim("eq?"), vec![car(car(pairs())), var("k")]),
        cdr(car(pairs())),
        app(app(var(LOOKUP_NAME), vec![cdr(pairs())]), vec![var("k")]),
    );
    define(
        LOOKUP_NAME,
        lambda(["pairs"], vec![lambda(["k"], vec![body])]),
    )
}
