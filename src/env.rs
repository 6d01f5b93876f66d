use crate::immutable::Map;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::rc::Rc;

/// A three-valued truth value; `&`, `|` and `!` follow Kleene logic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Boolean {
    True,
    False,
    Undefined,
}

impl Not for Boolean {
    type Output = Boolean;

    fn not(self) -> Boolean {
        match self {
            Boolean::True => Boolean::False,
            Boolean::False => Boolean::True,
            Boolean::Undefined => Boolean::Undefined,
        }
    }
}

impl BitAnd for Boolean {
    type Output = Boolean;

    fn bitand(self, other: Boolean) -> Boolean {
        match (self, other) {
            (Boolean::False, _) | (_, Boolean::False) => Boolean::False,
            (Boolean::True, Boolean::True) => Boolean::True,
            _ => Boolean::Undefined,
        }
    }
}

impl BitOr for Boolean {
    type Output = Boolean;

    fn bitor(self, other: Boolean) -> Boolean {
        match (self, other) {
            (Boolean::True, _) | (_, Boolean::True) => Boolean::True,
            (Boolean::False, Boolean::False) => Boolean::False,
            _ => Boolean::Undefined,
        }
    }
}

impl From<bool> for Boolean {
    fn from(b: bool) -> Self {
        if b {
            Boolean::True
        } else {
            Boolean::False
        }
    }
}

/// A named boolean unknown. Two variables are the same variable iff they
/// have the same name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Rc<str>);

impl Variable {
    pub fn new<N: AsRef<str>>(name: N) -> Self {
        Variable(Rc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn eval(&self, environment: &Environment) -> Boolean {
        environment.get(self)
    }
}

impl AsRef<str> for Variable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

impl Debug for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

/// A partial assignment of variables to truth values. Unbound variables
/// read as `Boolean::Undefined`.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: Map<Variable, Boolean>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, variable: Variable, value: Boolean) -> Self {
        Self {
            bindings: self.bindings.put(variable, value),
        }
    }

    pub fn put_true(&self, variable: Variable) -> Self {
        self.put(variable, Boolean::True)
    }

    pub fn put_false(&self, variable: Variable) -> Self {
        self.put(variable, Boolean::False)
    }

    pub fn get(&self, variable: &Variable) -> Boolean {
        self.bindings
            .get(variable)
            .copied()
            .unwrap_or(Boolean::Undefined)
    }

    /// True iff no variable is bound to `True` on one side and `False` on the
    /// other. A variable that is undefined on either side never disagrees.
    pub fn is_equivalent_to(&self, other: &Environment) -> bool {
        let agrees = |v: &Variable| {
            let (mine, theirs) = (self.get(v), other.get(v));
            mine == Boolean::Undefined || theirs == Boolean::Undefined || mine == theirs
        };
        self.bindings.keys().all(agrees) && other.bindings.keys().all(agrees)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, Boolean)> {
        self.bindings.iter().map(|(v, b)| (v, *b))
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_map().entries(self.iter()).finish()
    }
}
