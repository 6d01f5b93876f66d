use crate::env::{Boolean, Environment, Variable};
use crate::immutable::Map;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    /// The opposite-polarity literal over the same variable. Shares the
    /// variable's name, so this never allocates.
    pub fn negation(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(v.clone()),
            Literal::Negative(v) => Literal::Positive(v.clone()),
        }
    }

    /// An unbound variable evaluates to `Undefined` under either polarity.
    pub fn eval(&self, environment: &Environment) -> Boolean {
        match self {
            Literal::Positive(v) => environment.get(v),
            Literal::Negative(v) => !environment.get(v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(v) => write!(f, "{}", v),
            Literal::Negative(v) => write!(f, "!{}", v),
        }
    }
}

/// Hands out one canonical literal per (name, polarity). Both polarities of
/// a name share a single `Variable` allocation, so `negation` is just a
/// polarity flip. The table only ever grows.
///
/// Lookups scan the table linearly, so interning `n` distinct names costs
/// O(n^2) overall.
#[derive(Clone, Default, Debug)]
pub struct Interner {
    positives: Map<Variable, Literal>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable<N: AsRef<str>>(&mut self, name: N) -> Variable {
        self.positive(name).variable().clone()
    }

    pub fn positive<N: AsRef<str>>(&mut self, name: N) -> Literal {
        let name = name.as_ref();
        if let Some(literal) = self.positives.get(name) {
            return literal.clone();
        }
        let variable = Variable::new(name);
        let literal = Literal::Positive(variable.clone());
        self.positives = self.positives.put(variable, literal.clone());
        literal
    }

    pub fn negative<N: AsRef<str>>(&mut self, name: N) -> Literal {
        self.positive(name).negation()
    }

    /// Number of distinct variable names seen so far.
    pub fn len(&self) -> usize {
        self.positives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positives.is_empty()
    }
}
