use super::{Formula, Literal};
use crate::env::{Boolean, Environment};
use crate::immutable::List;
use std::fmt::{self, Debug, Display, Formatter};

/// A disjunction of literals with set semantics: adding a literal that is
/// already present is a no-op. A literal and its negation may coexist.
/// The empty clause is unsatisfiable.
#[derive(Clone, Default)]
pub struct Clause {
    // newest first
    literals: List<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        disjuncts
            .into_iter()
            .fold(Clause::default(), |clause, literal| clause.add(literal))
    }

    pub fn unit(literal: Literal) -> Self {
        Self {
            literals: List::new().add(literal),
        }
    }

    fn from_list(literals: List<Literal>) -> Self {
        let clause = Self { literals };
        clause.check_rep();
        clause
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut rest = &self.literals;
            while !rest.is_empty() {
                debug_assert!(
                    !rest.rest().contains(rest.first()),
                    "duplicate literal {} in clause",
                    rest.first()
                );
                rest = rest.rest();
            }
        }
    }

    pub fn add(&self, literal: Literal) -> Self {
        if self.literals.contains(&literal) {
            return self.clone();
        }
        Self {
            literals: self.literals.add(literal),
        }
    }

    /// The literal the solver branches on: the earliest one added. Panics on
    /// the empty clause.
    pub fn choose_literal(&self) -> &Literal {
        match self.literals.last() {
            Some(literal) => literal,
            None => panic!("choose_literal() called on the empty clause"),
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Literals in the order they were added.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        let mut literals: Vec<&Literal> = self.literals.iter().collect();
        literals.reverse();
        literals.into_iter()
    }

    pub fn merge(&self, other: &Clause) -> Self {
        other
            .literals()
            .fold(self.clone(), |clause, literal| clause.add(literal.clone()))
    }

    /// De Morgan: !(a | b | c) is the formula (!a) & (!b) & (!c).
    pub fn negate(&self) -> Formula {
        Formula::new(self.literals().map(|l| Clause::unit(l.negation())))
    }

    /// Simplify under the assumption that `literal` is true. `None` means the
    /// clause is satisfied; otherwise the negation of `literal` (if present)
    /// has been removed.
    pub fn reduce(&self, literal: &Literal) -> Option<Clause> {
        if self.contains(literal) {
            return None;
        }
        let negation = literal.negation();
        if self.contains(&negation) {
            Some(Clause::from_list(self.literals.remove(&negation)))
        } else {
            Some(self.clone())
        }
    }

    pub fn eval(&self, environment: &Environment) -> Boolean {
        self.literals
            .iter()
            .fold(Boolean::False, |acc, literal| acc | literal.eval(environment))
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.literals.iter().all(|l| other.contains(l))
    }
}

impl Eq for Clause {}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.is_empty() {
            return f.write_str("false");
        }
        if self.len() > 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in self.literals() {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Debug for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(self, f)
    }
}
