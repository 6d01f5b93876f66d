use crate::env::{Boolean, Environment};
use crate::formula::{Clause, Formula, Literal};
use crate::immutable::List;
use crate::SatResult;
use log::{debug, trace};

/// DPLL search over persistent clause lists.
///
/// The search is depth-first but runs on an explicit stack of frames rather
/// than the call stack, so its depth is bounded only by memory. Because every
/// frame owns its own (structurally shared) clause list and environment,
/// backtracking is just popping a frame: nothing has to be undone.
pub struct Solver {
    formula: Formula,
    stats: SolverStats,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SolverStats {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
    pub backtracks: usize,
}

#[derive(Debug)]
struct State {
    clauses: List<Clause>,
    environment: Environment,
}

impl State {
    /// Assume `literal` is true: bind its variable and simplify every clause.
    fn assume(&self, literal: &Literal) -> Self {
        let environment = self
            .environment
            .put(literal.variable().clone(), Boolean::from(literal.is_positive()));
        let clauses = self
            .clauses
            .iter()
            .filter_map(|clause| clause.reduce(literal))
            .collect();
        Self { clauses, environment }
    }
}

enum Frame {
    Explore(State),
    // The positive branch on `literal` is being (or has been) explored; if
    // this frame is ever popped, it failed and the negation gets its turn.
    Retry(State, Literal),
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            stats: SolverStats::default(),
        }
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    pub fn solve(&mut self) -> SatResult {
        let root = State {
            clauses: self.formula.clause_list().clone(),
            environment: Environment::new(),
        };
        let mut stack = vec![Frame::Explore(root)];

        while let Some(frame) = stack.pop() {
            let state = match frame {
                Frame::Explore(state) => state,
                Frame::Retry(state, literal) => {
                    self.stats.backtracks += 1;
                    let literal = literal.negation();
                    trace!("backtrack: {} at depth {}", literal, stack.len());
                    stack.push(Frame::Explore(state.assume(&literal)));
                    continue;
                }
            };

            if state.clauses.is_empty() {
                debug!("satisfiable: {:?}", self.stats);
                debug_assert_eq!(self.formula.eval(&state.environment), Boolean::True);
                return SatResult::Satisfiable(state.environment);
            }
            if state.clauses.iter().any(Clause::is_empty) {
                self.stats.conflicts += 1;
                trace!("conflict at depth {}", stack.len());
                continue;
            }

            let shortest = shortest_clause(&state.clauses);
            let literal = shortest.choose_literal().clone();
            if shortest.is_unit() {
                self.stats.propagations += 1;
                trace!("implied {} by unit clause", literal);
                stack.push(Frame::Explore(state.assume(&literal)));
            } else {
                self.stats.decisions += 1;
                trace!("decision {} at depth {}", literal, stack.len());
                let positive = state.assume(&literal);
                stack.push(Frame::Retry(state, literal));
                stack.push(Frame::Explore(positive));
            }
        }

        debug!("unsatisfiable: {:?}", self.stats);
        SatResult::Unsatisfiable
    }
}

/// Solve `formula`, returning a satisfying environment if one exists.
pub fn solve(formula: &Formula) -> SatResult {
    Solver::new(formula.clone()).solve()
}

// First clause of minimal length; `clauses` must be non-empty.
fn shortest_clause(clauses: &List<Clause>) -> &Clause {
    let mut result = clauses.first();
    for clause in clauses.iter() {
        if result.is_unit() {
            break;
        }
        if clause.len() < result.len() {
            result = clause;
        }
    }
    result
}
