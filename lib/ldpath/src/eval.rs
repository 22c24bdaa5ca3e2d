use crate::ast::{Datatype, LdPathProgram, Selector};
use crate::error::LdPathEvaluationError;
use oxrdf::{Graph, NamedNode, NamedNodeRef, SubjectRef, Term};
use oxsdatatypes::{DateTime, Decimal};
use rdf_transform_model::{FieldMap, ScalarValue};
use std::str::FromStr;

pub(crate) fn evaluate(
    program: &LdPathProgram,
    graph: &Graph,
    context: NamedNodeRef<'_>,
) -> Result<FieldMap, LdPathEvaluationError> {
    let start = vec![Term::NamedNode(context.into_owned())];
    let mut record = FieldMap::new();
    for field in program.fields() {
        let nodes = select(graph, &start, &field.selector);
        let values = nodes
            .iter()
            .map(|term| coerce(term, field.datatype))
            .collect::<Result<Vec<_>, _>>()?;
        record.insert(field.name.clone(), values.into());
    }
    Ok(record)
}

/// Maps a node set to a node set. Duplicates keep their first position.
fn select(graph: &Graph, nodes: &[Term], selector: &Selector) -> Vec<Term> {
    match selector {
        Selector::Context => nodes.to_vec(),
        Selector::Forward(predicate) => {
            let mut out = Vec::new();
            for node in nodes {
                let Some(subject) = as_subject(node) else {
                    continue;
                };
                for object in graph.objects_for_subject_predicate(subject, predicate.as_ref())
                {
                    push_unique(&mut out, object.into_owned());
                }
            }
            out
        }
        Selector::Reverse(predicate) => {
            let mut out = Vec::new();
            for node in nodes {
                for subject in
                    graph.subjects_for_predicate_object(predicate.as_ref(), node.as_ref())
                {
                    push_unique(&mut out, Term::from(subject.into_owned()));
                }
            }
            out
        }
        Selector::Sequence(selectors) => selectors
            .iter()
            .fold(nodes.to_vec(), |acc, s| select(graph, &acc, s)),
        Selector::Union(branches) => {
            let mut out = Vec::new();
            for branch in branches {
                for term in select(graph, nodes, branch) {
                    push_unique(&mut out, term);
                }
            }
            out
        }
    }
}

fn as_subject(term: &Term) -> Option<SubjectRef<'_>> {
    match term {
        Term::NamedNode(node) => Some(node.as_ref().into()),
        Term::BlankNode(node) => Some(node.as_ref().into()),
        _ => None,
    }
}

fn push_unique(out: &mut Vec<Term>, term: Term) {
    if !out.contains(&term) {
        out.push(term);
    }
}

/// The lexical form coercions work on.
fn lexical(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_owned(),
        Term::Literal(literal) => literal.value().to_owned(),
        other => other.to_string(),
    }
}

fn coerce(
    term: &Term,
    datatype: Option<Datatype>,
) -> Result<ScalarValue, LdPathEvaluationError> {
    let Some(datatype) = datatype else {
        return Ok(match term {
            Term::NamedNode(node) => ScalarValue::Iri(node.clone()),
            other => ScalarValue::String(lexical(other)),
        });
    };
    let value = lexical(term);
    let failure = |value: String| LdPathEvaluationError::Coercion {
        value,
        datatype: datatype.name().to_owned(),
    };
    Ok(match datatype {
        Datatype::String => ScalarValue::String(value),
        Datatype::Boolean => {
            let parsed = match value.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            };
            match parsed {
                Some(b) => ScalarValue::Boolean(b),
                None => return Err(failure(value)),
            }
        }
        Datatype::Int | Datatype::Integer | Datatype::Long => {
            let parsed = value.parse::<i64>().map_err(|_| failure(value))?;
            ScalarValue::Integer(parsed)
        }
        Datatype::Float | Datatype::Double => {
            let parsed = value.parse::<f64>().map_err(|_| failure(value))?;
            ScalarValue::Double(parsed)
        }
        Datatype::Decimal => {
            let parsed = Decimal::from_str(&value).map_err(|_| failure(value))?;
            ScalarValue::Decimal(parsed)
        }
        Datatype::DateTime => {
            let parsed = DateTime::from_str(&value).map_err(|_| failure(value))?;
            ScalarValue::DateTime(parsed)
        }
        Datatype::AnyUri => match term {
            Term::NamedNode(node) => ScalarValue::Iri(node.clone()),
            _ => {
                let parsed = NamedNode::new(&value).map_err(|_| failure(value))?;
                ScalarValue::Iri(parsed)
            }
        },
    })
}
