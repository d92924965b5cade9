//! GROQ Query Construction
//!
//! Pure functions for turning a search intent into a GROQ query string plus
//! bound parameters for a document-oriented content store. The user-supplied
//! term is never interpolated into the query text; it is bound as
//! `$searchTerm` so the store client performs the escaping.

use serde_json::{json, Map, Value};

/// A search intent: which documents to match and how to shape each result
#[derive(Debug, Clone)]
pub struct SearchQuerySpec {
    pub document_type: String,
    pub searchable_fields: Vec<String>,
    pub search_term: String,
    /// Projection appended verbatim to the query
    pub result_fragment: String,
}

/// Query text plus parameter bindings, consumed opaquely by the store client
#[derive(Debug, Clone)]
pub struct QueryPlan {
    pub query: String,
    pub params: Map<String, Value>,
}

/// Rich-text fields are matched against their extracted plain text
/// (`pt::text(...)`) instead of the raw portable-text structure.
fn is_rich_text_field(field: &str) -> bool {
    field == "body"
}

fn field_condition(field: &str) -> String {
    if is_rich_text_field(field) {
        format!("pt::text({}) match $searchTerm", field)
    } else {
        format!("{} match $searchTerm", field)
    }
}

/// Build a query matching published documents of the spec's type whose
/// fields match the search term as a prefix.
///
/// Draft revisions (`drafts.**`) are always excluded. Per-field conditions
/// are OR-combined; an empty field list yields a `false` filter that matches
/// no documents rather than an error. The term is bound with a trailing `*`
/// so partial-word typing already matches.
pub fn build_search_query(spec: &SearchQuerySpec) -> QueryPlan {
    let conditions = if spec.searchable_fields.is_empty() {
        // No fields to match against: a filter that is always false
        "false".to_string()
    } else {
        spec.searchable_fields
            .iter()
            .map(|field| field_condition(field))
            .collect::<Vec<_>>()
            .join(" || ")
    };

    let query = format!(
        "*[_type == $documentType && !(_id in path(\"drafts.**\")) && ({})] {}",
        conditions, spec.result_fragment
    );

    let mut params = Map::new();
    params.insert("documentType".to_string(), json!(spec.document_type));
    params.insert("searchTerm".to_string(), json!(format!("{}*", spec.search_term)));

    QueryPlan { query, params }
}
