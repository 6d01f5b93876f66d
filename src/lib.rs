//! A DPLL satisfiability solver built on persistent data structures.
//!
//! Formulas are in conjunctive normal form: a [`Formula`] is a conjunction of
//! [`Clause`]s, each a disjunction of [`Literal`]s. Formulas can be combined
//! with [`Formula::and`], [`Formula::or`] and [`Formula::negate`], all of
//! which keep the result in CNF. [`solve`] either finds an [`Environment`]
//! under which every clause is true or reports that none exists.

pub mod env;
pub mod formula;
pub mod immutable;
mod solver;

#[cfg(test)]
mod brute_force;

pub use env::{Boolean, Environment, Variable};
pub use formula::{Clause, Formula, Interner, Literal};
pub use solver::{solve, Solver, SolverStats};

#[derive(Clone, Debug)]
pub enum SatResult {
    Satisfiable(Environment),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        match self {
            SatResult::Satisfiable(_) => true,
            SatResult::Unsatisfiable => false,
        }
    }

    /// The satisfying assignment, if any. Variables the search never needed
    /// to bind are absent and read as [`Boolean::Undefined`].
    pub fn environment(&self) -> Option<&Environment> {
        match self {
            SatResult::Satisfiable(env) => Some(env),
            SatResult::Unsatisfiable => None,
        }
    }

    pub fn into_environment(self) -> Option<Environment> {
        match self {
            SatResult::Satisfiable(env) => Some(env),
            SatResult::Unsatisfiable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds formulas purely through the public combinators, the way a
    // client encoding a puzzle would.
    #[test]
    fn exactly_one_of_three() {
        let mut interner = Interner::new();
        let vars: Vec<Variable> = ["a", "b", "c"].iter().map(|n| interner.variable(n)).collect();

        let at_least_one = Formula::default().add_clause(Clause::new(
            vars.iter().map(|v| interner.positive(v)),
        ));
        let mut at_most_one = Formula::default();
        for (i, v) in vars.iter().enumerate() {
            for w in &vars[i + 1..] {
                let both = &Formula::from_variable(v) & &Formula::from_variable(w);
                at_most_one = &at_most_one & &!&both;
            }
        }
        let f = at_least_one.and(&at_most_one);

        let env = solve(&f).into_environment().unwrap();
        let trues = vars.iter().filter(|v| env.get(v) == Boolean::True).count();
        assert_eq!(trues, 1);
        for v in &vars {
            assert_ne!(env.get(v), Boolean::Undefined);
        }

        // pinning two of them true is contradictory
        let pinned = f
            .and(&Formula::from_variable(&vars[0]))
            .and(&Formula::from_variable(&vars[1]));
        assert!(!solve(&pinned).is_satisfiable());
    }

    #[test]
    fn or_of_unsatisfiable_sides() {
        let mut interner = Interner::new();
        let a = interner.variable("a");
        let b = interner.variable("b");
        let contradiction = |v: &Variable| {
            let f = Formula::from_variable(v);
            f.and(&f.negate())
        };
        let either = contradiction(&a).or(&contradiction(&b));
        assert!(!solve(&either).is_satisfiable());

        let escape = either.or(&Formula::from_variable(&a));
        let env = solve(&escape).into_environment().unwrap();
        assert_eq!(escape.eval(&env), Boolean::True);
    }
}
