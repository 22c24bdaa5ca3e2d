use crate::error::{LdPathEvaluationError, LdPathParseError};
use crate::{eval, parser};
use oxrdf::vocab::xsd;
use oxrdf::{Graph, NamedNode, NamedNodeRef};
use rdf_transform_model::FieldMap;
use std::collections::HashMap;

/// Prefixes available to every program without declaration.
///
/// An in-program `@prefix` declaration shadows these.
const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
];

/// A parsed, immutable path-query program.
///
/// Qualified names are resolved against the prefix environment at parse
/// time, so evaluation works on IRIs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdPathProgram {
    fields: Vec<Field>,
}

impl LdPathProgram {
    /// Parses a program from its source text.
    pub fn parse(source: &str) -> Result<Self, LdPathParseError> {
        let items = parser::parse_program(source)?;
        resolve_items(items)
    }

    /// Evaluates the program against `graph`, with `context` as the
    /// starting node of every field's path.
    pub fn evaluate(
        &self,
        graph: &Graph,
        context: NamedNodeRef<'_>,
    ) -> Result<FieldMap, LdPathEvaluationError> {
        eval::evaluate(self, graph, context)
    }

    pub(crate) fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) selector: Selector,
    pub(crate) datatype: Option<Datatype>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selector {
    /// `.`: the context node itself.
    Context,
    /// Follow an edge from subject to object.
    Forward(NamedNode),
    /// `^`: follow an edge from object back to subject.
    Reverse(NamedNode),
    /// `/`: apply selectors left to right.
    Sequence(Vec<Selector>),
    /// `|`: concatenation of all branch results, first occurrence wins.
    Union(Vec<Selector>),
}

/// The datatypes a field can coerce its values to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Datatype {
    String,
    Boolean,
    Int,
    Integer,
    Long,
    Float,
    Double,
    Decimal,
    DateTime,
    AnyUri,
}

impl Datatype {
    fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        Some(match iri {
            _ if iri == xsd::STRING => Datatype::String,
            _ if iri == xsd::BOOLEAN => Datatype::Boolean,
            _ if iri == xsd::INT => Datatype::Int,
            _ if iri == xsd::INTEGER => Datatype::Integer,
            _ if iri == xsd::LONG => Datatype::Long,
            _ if iri == xsd::FLOAT => Datatype::Float,
            _ if iri == xsd::DOUBLE => Datatype::Double,
            _ if iri == xsd::DECIMAL => Datatype::Decimal,
            _ if iri == xsd::DATE_TIME => Datatype::DateTime,
            _ if iri == xsd::ANY_URI => Datatype::AnyUri,
            _ => return None,
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Datatype::String => "xsd:string",
            Datatype::Boolean => "xsd:boolean",
            Datatype::Int => "xsd:int",
            Datatype::Integer => "xsd:integer",
            Datatype::Long => "xsd:long",
            Datatype::Float => "xsd:float",
            Datatype::Double => "xsd:double",
            Datatype::Decimal => "xsd:decimal",
            Datatype::DateTime => "xsd:dateTime",
            Datatype::AnyUri => "xsd:anyURI",
        }
    }
}

// Parser output, before prefix resolution.

#[derive(Debug, Clone)]
pub(crate) enum RawItem {
    Prefix { prefix: String, iri: String },
    Field {
        name: String,
        path: RawPath,
        datatype: Option<RawAtom>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct RawPath {
    pub(crate) branches: Vec<Vec<RawStep>>,
}

#[derive(Debug, Clone)]
pub(crate) enum RawStep {
    Context,
    Forward(RawAtom),
    Reverse(RawAtom),
    Group(RawPath),
}

#[derive(Debug, Clone)]
pub(crate) enum RawAtom {
    Iri(String),
    QName { prefix: String, local: String },
}

/// Walks the parsed items in order, maintaining the prefix environment, and
/// produces the resolved program. Declarations only affect fields that
/// follow them.
fn resolve_items(items: Vec<RawItem>) -> Result<LdPathProgram, LdPathParseError> {
    let mut env: HashMap<String, String> = BUILTIN_PREFIXES
        .iter()
        .map(|(prefix, iri)| ((*prefix).to_owned(), (*iri).to_owned()))
        .collect();
    let mut fields = Vec::new();
    for item in items {
        match item {
            RawItem::Prefix { prefix, iri } => {
                env.insert(prefix, iri);
            }
            RawItem::Field {
                name,
                path,
                datatype,
            } => {
                let selector = resolve_path(&path, &env)?;
                let datatype = datatype
                    .map(|atom| {
                        let iri = resolve_atom(&atom, &env)?;
                        Datatype::from_iri(iri.as_ref())
                            .ok_or(LdPathParseError::UnsupportedDatatype(iri))
                    })
                    .transpose()?;
                fields.push(Field {
                    name,
                    selector,
                    datatype,
                });
            }
        }
    }
    Ok(LdPathProgram { fields })
}

fn resolve_path(
    path: &RawPath,
    env: &HashMap<String, String>,
) -> Result<Selector, LdPathParseError> {
    let mut branches = Vec::with_capacity(path.branches.len());
    for steps in &path.branches {
        let mut resolved = Vec::with_capacity(steps.len());
        for step in steps {
            resolved.push(resolve_step(step, env)?);
        }
        branches.push(match resolved.len() {
            1 => resolved.pop().unwrap_or(Selector::Context),
            _ => Selector::Sequence(resolved),
        });
    }
    Ok(match branches.len() {
        1 => branches.pop().unwrap_or(Selector::Context),
        _ => Selector::Union(branches),
    })
}

fn resolve_step(
    step: &RawStep,
    env: &HashMap<String, String>,
) -> Result<Selector, LdPathParseError> {
    Ok(match step {
        RawStep::Context => Selector::Context,
        RawStep::Forward(atom) => Selector::Forward(resolve_atom(atom, env)?),
        RawStep::Reverse(atom) => Selector::Reverse(resolve_atom(atom, env)?),
        RawStep::Group(path) => resolve_path(path, env)?,
    })
}

fn resolve_atom(
    atom: &RawAtom,
    env: &HashMap<String, String>,
) -> Result<NamedNode, LdPathParseError> {
    let iri = match atom {
        RawAtom::Iri(iri) => iri.clone(),
        RawAtom::QName { prefix, local } => {
            let namespace = env
                .get(prefix)
                .ok_or_else(|| LdPathParseError::UnknownPrefix(prefix.clone()))?;
            format!("{namespace}{local}")
        }
    };
    NamedNode::new(&iri).map_err(|error| LdPathParseError::InvalidIri { iri, error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_prefixes_resolve() {
        let program = LdPathProgram::parse("title = dc:title :: xsd:string ;").unwrap();
        assert_eq!(
            program.fields(),
            &[Field {
                name: "title".into(),
                selector: Selector::Forward(
                    NamedNode::new("http://purl.org/dc/elements/1.1/title").unwrap()
                ),
                datatype: Some(Datatype::String),
            }]
        );
    }

    #[test]
    fn declared_prefix_shadows_builtin() {
        let program = LdPathProgram::parse(
            "@prefix dc : <http://example.org/dc#> ;\ntitle = dc:title ;",
        )
        .unwrap();
        assert_eq!(
            program.fields()[0].selector,
            Selector::Forward(NamedNode::new("http://example.org/dc#title").unwrap())
        );
    }

    #[test]
    fn declaration_only_affects_later_fields() {
        let program = LdPathProgram::parse(
            "before = dc:title ;\n@prefix dc : <http://example.org/dc#> ;\nafter = dc:title ;",
        )
        .unwrap();
        assert_eq!(
            program.fields()[0].selector,
            Selector::Forward(
                NamedNode::new("http://purl.org/dc/elements/1.1/title").unwrap()
            )
        );
        assert_eq!(
            program.fields()[1].selector,
            Selector::Forward(NamedNode::new("http://example.org/dc#title").unwrap())
        );
    }

    #[test]
    fn unknown_prefix_is_reported() {
        let error = LdPathProgram::parse("title = nope:title ;").unwrap_err();
        assert!(matches!(
            error,
            LdPathParseError::UnknownPrefix(ref prefix) if prefix == "nope"
        ));
    }

    #[test]
    fn unsupported_datatype_is_reported() {
        let error = LdPathProgram::parse("title = dc:title :: xsd:gYear ;").unwrap_err();
        assert!(matches!(
            error,
            LdPathParseError::UnsupportedDatatype(ref datatype)
                if datatype.as_str() == "http://www.w3.org/2001/XMLSchema#gYear"
        ));
    }

    #[test]
    fn equal_sources_parse_to_equal_programs() {
        let a = LdPathProgram::parse("title = dc:title ;").unwrap();
        let b = LdPathProgram::parse("title = dc:title ;").unwrap();
        assert_eq!(a, b);
    }
}
