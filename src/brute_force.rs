use crate::*;

// Truth-table oracle for checking the solver and the formula combinators
pub(crate) fn assignments(variables: &[Variable]) -> impl Iterator<Item = Environment> + '_ {
    assert!(variables.len() <= 16); // just for safety

    (0..1u32 << variables.len()).map(move |assignment| {
        variables
            .iter()
            .enumerate()
            .fold(Environment::new(), |env, (i, v)| {
                env.put(v.clone(), Boolean::from(assignment & (1 << i) != 0))
            })
    })
}

pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    for env in assignments(&f.variables()) {
        if f.eval(&env) == Boolean::True {
            return SatResult::Satisfiable(env);
        }
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

/// Whether two formulas agree under every total assignment of their variables.
pub(crate) fn equivalent(f1: &Formula, f2: &Formula) -> bool {
    let variables = f1.and(f2).variables();
    let agree = assignments(&variables).all(|env| f1.eval(&env) == f2.eval(&env));
    agree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn assignments_are_total() {
        let variables = vec![Variable::new("a"), Variable::new("b"), Variable::new("c")];
        let all: Vec<Environment> = assignments(&variables).collect();
        assert_eq!(all.len(), 8);
        for env in &all {
            assert_eq!(env.len(), 3);
        }
        for (i, e1) in all.iter().enumerate() {
            for e2 in &all[i + 1..] {
                assert!(!e1.is_equivalent_to(e2));
            }
        }
    }

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p("0"), p("1")]);
        let c2 = Clause::new(vec![n("0")]);
        let f = Formula::new(vec![c1, c2]);

        assert!(solve_brute_force(&f).is_satisfiable());
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p("0"), p("1")]);
        let c2 = Clause::new(vec![n("0")]);
        let c3 = Clause::new(vec![n("1")]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert!(!solve_brute_force(&f).is_satisfiable());
    }

    #[test]
    fn solve_conflict_sat() {
        let c1 = Clause::new(vec![p("0"), p("1"), p("2")]);
        let c2 = Clause::new(vec![n("0"), n("1"), p("2")]);
        let c3 = Clause::new(vec![n("1"), n("2")]);
        let f = Formula::new(vec![c1, c2, c3]);

        let result = solve_brute_force(&f);
        let env = result.environment().unwrap();
        assert_eq!(f.eval(env), Boolean::True);
    }

    #[test]
    fn equivalent_formulas() {
        let f1 = Formula::new(vec![Clause::new(vec![p("a"), p("b")])]);
        let f2 = Formula::new(vec![Clause::new(vec![p("b"), p("a")]), Clause::new(vec![p("a"), p("b"), n("c")])]);
        assert!(equivalent(&f1, &f2));
        assert!(!equivalent(&f1, &Formula::new(vec![Clause::new(vec![p("a")])])));
    }
}
