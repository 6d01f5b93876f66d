mod clause;
pub mod dimacs;
mod literal;

pub use clause::Clause;
pub use literal::{Interner, Literal};

use crate::env::{Boolean, Environment, Variable};
use crate::immutable::List;
use std::fmt::Debug;
use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

/// A conjunction of clauses. Duplicate clauses are kept; equality ignores
/// both order and multiplicity. The empty formula is true.
#[derive(Clone, Default)]
pub struct Formula {
    clauses: List<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    /// The formula asserting that `variable` is true.
    pub fn from_variable(variable: &Variable) -> Self {
        Self::new(vec![Clause::unit(Literal::Positive(variable.clone()))])
    }

    pub fn add_clause(&self, clause: Clause) -> Self {
        Self {
            clauses: self.clauses.add(clause),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn clause_list(&self) -> &List<Clause> {
        &self.clauses
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Every variable mentioned, each once, in order of first appearance.
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables: Vec<Variable> = vec![];
        for clause in self.clauses() {
            for literal in clause.literals() {
                if !variables.contains(literal.variable()) {
                    variables.push(literal.variable().clone());
                }
            }
        }
        variables
    }

    pub fn and(&self, other: &Formula) -> Self {
        Self {
            clauses: other
                .clauses()
                .fold(self.clauses.clone(), |clauses, c| clauses.add(c.clone())),
        }
    }

    /// Distributes: the result has one clause for every pair of clauses, one
    /// from each side, so its size is the product of the operands' sizes.
    pub fn or(&self, other: &Formula) -> Self {
        let mut result = Formula::default();
        for left in self.clauses() {
            for right in other.clauses() {
                result = result.add_clause(left.merge(right));
            }
        }
        debug_assert_eq!(result.len(), self.len() * other.len());
        result
    }

    /// Pushes the negation down to the literals with De Morgan's laws and
    /// re-establishes CNF by distribution. The result can be exponentially
    /// larger than `self`.
    pub fn negate(&self) -> Self {
        if self.is_empty() {
            // !true
            return Formula::new(vec![Clause::default()]);
        }
        self.clauses
            .rest()
            .iter()
            .fold(self.clauses.first().negate(), |result, c| result.or(&c.negate()))
    }

    pub fn eval(&self, environment: &Environment) -> Boolean {
        self.clauses()
            .fold(Boolean::True, |acc, clause| acc & clause.eval(environment))
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.clauses().all(|c| other.contains(c)) && other.clauses().all(|c| self.contains(c))
    }
}

impl Eq for Formula {}

impl<'a> BitAnd for &'a Formula {
    type Output = Formula;

    fn bitand(self, other: &'a Formula) -> Formula {
        self.and(other)
    }
}

impl<'a> BitOr for &'a Formula {
    type Output = Formula;

    fn bitor(self, other: &'a Formula) -> Formula {
        self.or(other)
    }
}

impl<'a> Not for &'a Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        self.negate()
    }
}

impl<'a> Not for &'a Clause {
    type Output = Formula;

    fn not(self) -> Formula {
        self.negate()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.is_empty() {
            return f.write_str("true");
        }
        let mut first_clause = true;
        for clause in self.clauses() {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
pub(crate) fn p(name: &str) -> Literal {
    Literal::Positive(Variable::new(name))
}

#[cfg(test)]
pub(crate) fn n(name: &str) -> Literal {
    Literal::Negative(Variable::new(name))
}

#[cfg(test)]
pub(crate) fn clause_strategy(
    num_variables: usize,
    max_clause_len: usize,
) -> impl proptest::strategy::Strategy<Value = Clause> {
    use proptest::prelude::*;

    let literal = (0..num_variables, any::<bool>()).prop_map(|(x, positive)| {
        let name = format!("x{}", x);
        if positive {
            p(&name)
        } else {
            n(&name)
        }
    });
    proptest::collection::vec(literal, 1..=max_clause_len).prop_map(Clause::new)
}

#[cfg(test)]
pub(crate) fn formula_strategy(
    num_variables: usize,
    max_clause_len: usize,
    max_clauses: usize,
) -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    proptest::collection::vec(clause_strategy(num_variables, max_clause_len), 0..=max_clauses)
        .prop_map(Formula::new)
}

#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    formula_strategy(8, 3, 30)
}
