use crate::error::{ProgramError, TransformError};
use crate::transformation::Transformation;
use oxrdf::vocab::xsd;
use oxrdf::{Literal, Term, TermRef, Variable};
use rdf_transform_model::{FieldMap, Resource, ResultSequence, ScalarValue};
use spargebra::algebra::GraphPattern;
use spargebra::term::{NamedNodePattern, TermPattern, TriplePattern};
use spargebra::Query;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// A SPARQL SELECT program over a resource's graph.
///
/// The evaluator covers the slice of SPARQL these programs use: basic
/// graph patterns with projection, `DISTINCT`/`REDUCED` and
/// `LIMIT`/`OFFSET`. Each projected variable becomes a field whose values
/// are the variable's bindings across solutions, in solution order.
///
/// Same equality semantics as the path-query variant: source bytes decide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparqlTransformation {
    source: Vec<u8>,
}

impl SparqlTransformation {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }
}

impl Transformation for SparqlTransformation {
    fn apply(&self, resource: &Resource) -> Result<ResultSequence, TransformError> {
        let source = std::str::from_utf8(&self.source).map_err(ProgramError::from)?;
        let query = Query::parse(source, None).map_err(ProgramError::from)?;
        let Query::Select { pattern, .. } = query else {
            return Err(unsupported("only SELECT queries are supported"));
        };
        debug!("applying SPARQL program to {}", resource.iri());

        let solutions = eval_pattern(resource.graph(), &pattern)?;
        let mut record = FieldMap::new();
        for variable in &solutions.variables {
            let values: Vec<ScalarValue> = solutions
                .rows
                .iter()
                .filter_map(|row| row.get(variable.as_str()))
                .map(term_to_scalar)
                .collect();
            record.insert(variable.as_str(), values.into());
        }
        Ok(ResultSequence::single(record))
    }
}

fn unsupported(message: &str) -> TransformError {
    ProgramError::SparqlUnsupported(message.to_owned()).into()
}

type Row = HashMap<String, Term>;

struct Solutions {
    variables: Vec<Variable>,
    rows: Vec<Row>,
}

fn eval_pattern(
    graph: &oxrdf::Graph,
    pattern: &GraphPattern,
) -> Result<Solutions, TransformError> {
    match pattern {
        GraphPattern::Bgp { patterns } => Ok(eval_bgp(graph, patterns)),
        GraphPattern::Project { inner, variables } => {
            let solutions = eval_pattern(graph, inner)?;
            Ok(Solutions {
                variables: variables.clone(),
                rows: solutions.rows,
            })
        }
        GraphPattern::Distinct { inner } | GraphPattern::Reduced { inner } => {
            let solutions = eval_pattern(graph, inner)?;
            Ok(dedup(solutions))
        }
        GraphPattern::Slice {
            inner,
            start,
            length,
        } => {
            let mut solutions = eval_pattern(graph, inner)?;
            let end = length.map_or(solutions.rows.len(), |length| {
                (*start + length).min(solutions.rows.len())
            });
            let start = (*start).min(solutions.rows.len());
            solutions.rows = solutions.rows[start..end].to_vec();
            Ok(solutions)
        }
        _ => Err(unsupported(
            "only basic graph patterns with projection, DISTINCT and LIMIT are supported",
        )),
    }
}

/// Joins the triple patterns left to right, extending bindings row by row.
fn eval_bgp(graph: &oxrdf::Graph, patterns: &[TriplePattern]) -> Solutions {
    let mut variables = Vec::new();
    for pattern in patterns {
        collect_variables(pattern, &mut variables);
    }

    let mut rows = vec![Row::new()];
    for pattern in patterns {
        let mut next = Vec::new();
        for row in &rows {
            for triple in graph.iter() {
                let mut candidate = row.clone();
                if unify_named(&pattern.predicate, triple.predicate.into(), &mut candidate)
                    && unify(&pattern.subject, triple.subject.into(), &mut candidate)
                    && unify(&pattern.object, triple.object, &mut candidate)
                {
                    next.push(candidate);
                }
            }
        }
        rows = next;
    }
    Solutions { variables, rows }
}

fn collect_variables(pattern: &TriplePattern, variables: &mut Vec<Variable>) {
    if let TermPattern::Variable(variable) = &pattern.subject {
        push_variable(variables, variable);
    }
    if let NamedNodePattern::Variable(variable) = &pattern.predicate {
        push_variable(variables, variable);
    }
    if let TermPattern::Variable(variable) = &pattern.object {
        push_variable(variables, variable);
    }
}

fn push_variable(variables: &mut Vec<Variable>, variable: &Variable) {
    if !variables.contains(variable) {
        variables.push(variable.clone());
    }
}

fn unify(pattern: &TermPattern, actual: TermRef<'_>, row: &mut Row) -> bool {
    match pattern {
        TermPattern::NamedNode(node) => TermRef::from(node.as_ref()) == actual,
        TermPattern::Literal(literal) => TermRef::from(literal.as_ref()) == actual,
        // Query blank nodes are anonymous variables; their label cannot
        // collide with real variables since rows key variables by name.
        TermPattern::BlankNode(node) => bind(format!("_:{}", node.as_str()), actual, row),
        TermPattern::Variable(variable) => bind(variable.as_str().to_owned(), actual, row),
        _ => false,
    }
}

fn unify_named(pattern: &NamedNodePattern, actual: TermRef<'_>, row: &mut Row) -> bool {
    match pattern {
        NamedNodePattern::NamedNode(node) => TermRef::from(node.as_ref()) == actual,
        NamedNodePattern::Variable(variable) => {
            bind(variable.as_str().to_owned(), actual, row)
        }
    }
}

fn bind(key: String, actual: TermRef<'_>, row: &mut Row) -> bool {
    match row.get(&key) {
        Some(bound) => bound.as_ref() == actual,
        None => {
            row.insert(key, actual.into_owned());
            true
        }
    }
}

fn dedup(solutions: Solutions) -> Solutions {
    let mut seen: Vec<Vec<Option<Term>>> = Vec::new();
    let mut rows = Vec::new();
    for row in solutions.rows {
        let key: Vec<Option<Term>> = solutions
            .variables
            .iter()
            .map(|variable| row.get(variable.as_str()).cloned())
            .collect();
        if !seen.contains(&key) {
            seen.push(key);
            rows.push(row);
        }
    }
    Solutions {
        variables: solutions.variables,
        rows,
    }
}

/// Maps a bound term to a scalar, honoring common XSD literal datatypes.
/// A literal whose lexical form does not match its datatype falls back to
/// its lexical form.
fn term_to_scalar(term: &Term) -> ScalarValue {
    match term {
        Term::NamedNode(node) => ScalarValue::Iri(node.clone()),
        Term::Literal(literal) => literal_to_scalar(literal),
        other => ScalarValue::String(other.to_string()),
    }
}

fn literal_to_scalar(literal: &Literal) -> ScalarValue {
    let value = literal.value();
    let datatype = literal.datatype();
    if datatype == xsd::BOOLEAN {
        match value {
            "true" | "1" => return ScalarValue::Boolean(true),
            "false" | "0" => return ScalarValue::Boolean(false),
            _ => {}
        }
    } else if datatype == xsd::INTEGER || datatype == xsd::INT || datatype == xsd::LONG {
        if let Ok(parsed) = value.parse::<i64>() {
            return ScalarValue::Integer(parsed);
        }
    } else if datatype == xsd::DOUBLE || datatype == xsd::FLOAT {
        if let Ok(parsed) = value.parse::<f64>() {
            return ScalarValue::Double(parsed);
        }
    } else if datatype == xsd::DECIMAL {
        if let Ok(parsed) = oxsdatatypes::Decimal::from_str(value) {
            return ScalarValue::Decimal(parsed);
        }
    } else if datatype == xsd::DATE_TIME {
        if let Ok(parsed) = oxsdatatypes::DateTime::from_str(value) {
            return ScalarValue::DateTime(parsed);
        }
    }
    ScalarValue::String(value.to_owned())
}
