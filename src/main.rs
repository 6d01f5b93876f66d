use clap::{App, Arg};
use dpllsat::formula::dimacs::{parse, parse_file, DimacsParseError};
use dpllsat::*;
use log::info;

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DPLL SAT solver")
        .arg(Arg::with_name("INPUT").help("input file (in DIMACS CNF)").index(1))
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .help("print a satisfying assignment"),
        )
        .get_matches();

    let f = read_formula(matches.value_of("INPUT"));

    match f {
        Ok(f) => {
            info!("solving {} clauses over {} variables", f.len(), f.variables().len());
            let mut solver = Solver::new(f);
            let result = solver.solve();
            info!("{:?}", solver.stats());

            let exit_code = match result {
                SatResult::Satisfiable(env) => {
                    println!("SATISFIABLE");
                    if matches.is_present("model") {
                        println!("{}", model_line(&env));
                    }
                    0
                }
                SatResult::Unsatisfiable => {
                    println!("UNSATISFIABLE");
                    1
                }
            };
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    }
}

fn read_formula(path: Option<&str>) -> Result<Formula, DimacsParseError> {
    let mut interner = Interner::new();
    match path {
        Some(path) => parse_file(path, &mut interner),
        None => parse(std::io::stdin(), &mut interner),
    }
}

// "v 1 -2 4 0", sorted by variable number. Unbound variables are left out.
fn model_line(env: &Environment) -> String {
    let mut bindings: Vec<(u64, Boolean)> = env
        .iter()
        .filter_map(|(v, b)| v.name().parse::<u64>().ok().map(|x| (x, b)))
        .collect();
    bindings.sort_unstable_by_key(|(x, _)| *x);

    let mut line = String::from("v");
    for (x, b) in bindings {
        match b {
            Boolean::True => line.push_str(&format!(" {}", x)),
            Boolean::False => line.push_str(&format!(" -{}", x)),
            Boolean::Undefined => {}
        }
    }
    line.push_str(" 0");
    line
}
