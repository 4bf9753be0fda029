//! Tool definitions: argument types, descriptions and the listing served at `GET /tools`.

use factcheck_common::tool::{CHECK_CLAIM, EXTRACT_CLAIMS, GENERATE_POST};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for extract_claims tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExtractClaimsInput {
    /// Article text to extract claims from
    pub text: String,
}

/// Input for check_claim tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CheckClaimInput {
    /// Factual statement to look up
    pub statement: String,
}

/// Input for generate_post tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratePostInput {
    /// Claim text, used as the post body
    pub statement: String,

    /// Whether the claim was verified
    #[serde(default)]
    pub verified: bool,

    /// Source URL backing the verdict
    #[serde(default)]
    pub source: String,
}

/// One entry of the tool listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

fn info<T: JsonSchema>(name: &str, description: &str) -> ToolInfo {
    let schema = schemars::schema_for!(T);
    ToolInfo {
        name: name.to_string(),
        description: description.trim().to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or_default(),
    }
}

/// Every tool this server hosts.
pub fn catalog() -> Vec<ToolInfo> {
    vec![
        info::<ExtractClaimsInput>(EXTRACT_CLAIMS, descriptions::EXTRACT_CLAIMS),
        info::<CheckClaimInput>(CHECK_CLAIM, descriptions::CHECK_CLAIM),
        info::<GeneratePostInput>(GENERATE_POST, descriptions::GENERATE_POST),
    ]
}

/// Tool descriptions for the listing.
pub mod descriptions {
    pub const EXTRACT_CLAIMS: &str = r#"
Extract concise, standalone factual claims from an article.

Returns a JSON array of claim strings.

Example:
{
    "text": "Water boils at 100C at sea level. Experts say..."
}
"#;

    pub const CHECK_CLAIM: &str = r#"
Check whether a statement matches a Wikidata entity.

Returns {"verified": true, "source": "<entity url>"} on a match,
{"verified": false, "source": ""} when nothing matches, or
{"error": "..."} when the lookup itself failed.

Example:
{
    "statement": "Water boils at 100C"
}
"#;

    pub const GENERATE_POST: &str = r#"
Write a fact-check result as a static-site post and rebuild the site.

Returns {"status_code": <build exit code>, "path": "<post file>"}.
A status_code of 0 means the post was published.

Example:
{
    "statement": "Water boils at 100C",
    "verified": true,
    "source": "https://www.wikidata.org/wiki/Q1"
}
"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_three_tools() {
        let tools = catalog();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["extract_claims", "check_claim", "generate_post"]);
        assert!(tools.iter().all(|t| !t.description.starts_with('\n')));
    }

    #[test]
    fn test_schema_names_arguments() {
        let tools = catalog();
        let post = &tools[2].input_schema;

        assert!(post["properties"]["statement"].is_object());
        assert!(post["properties"]["verified"].is_object());
        assert_eq!(post["required"], serde_json::json!(["statement"]));
    }

    #[test]
    fn test_post_input_defaults() {
        let input: GeneratePostInput =
            serde_json::from_value(serde_json::json!({"statement": "s"})).unwrap();
        assert!(!input.verified);
        assert!(input.source.is_empty());
    }
}
