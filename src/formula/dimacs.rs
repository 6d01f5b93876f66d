use crate::formula::{Clause, Formula, Interner, Literal};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Parse a DIMACS CNF file. Variable `k` is named `"k"` and must not exceed
/// the header's variable count. Each clause must sit on a single line and be
/// terminated by `0`; an unterminated line is an error.
pub fn parse<R: Read>(reader: R, interner: &mut Interner) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut num_clauses = None;
    let mut num_variables = 0;

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | Some(&"%") | None => continue,
            Some(&"p") => {
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                num_variables = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

                num_clauses = Some(
                    line.next()
                        .and_then(|c| c.parse::<usize>().ok())
                        .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))?,
                );
            }
            Some(_) => {
                let expected = num_clauses
                    .ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

                let mut clause = Clause::default();
                let mut terminated = false;
                for x in line {
                    match parse_literal(x, num_variables, interner)? {
                        Some(l) => clause = clause.add(l),
                        None => {
                            terminated = true;
                            break;
                        }
                    }
                }
                if !terminated {
                    return Err(DimacsParseError::Format("clause not terminated by 0".into()));
                }
                // a bare "0" is the empty clause
                clauses.push(clause);

                if clauses.len() >= expected {
                    break;
                }
            }
        }
    }

    if num_clauses.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }

    let formula = Formula::new(clauses);
    Ok(formula)
}

pub fn parse_file<P: AsRef<Path>>(path: P, interner: &mut Interner) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file, interner)
}

fn parse_literal(
    s: &str,
    num_variables: usize,
    interner: &mut Interner,
) -> Result<Option<Literal>, DimacsParseError> {
    let l = s
        .parse::<i64>()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    if l == 0 {
        return Ok(None);
    }
    let variable = l.unsigned_abs();
    if variable > num_variables as u64 {
        return Err(DimacsParseError::Format(format!(
            "variable {} out of range (header declares {})",
            variable, num_variables
        )));
    }
    if l > 0 {
        Ok(Some(interner.positive(variable.to_string())))
    } else {
        Ok(Some(interner.negative(variable.to_string())))
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for DimacsParseError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DimacsParseError::Io(e) => write!(f, "i/o error: {}", e),
            DimacsParseError::Format(msg) => write!(f, "format error: {}", msg),
        }
    }
}

impl std::error::Error for DimacsParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimacsParseError::Io(e) => Some(e),
            DimacsParseError::Format(_) => None,
        }
    }
}
