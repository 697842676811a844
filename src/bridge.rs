/// Response shapes handed to JavaScript callers

use crate::catalog::find_tool;
use crate::domain::sanitize_and_validate;
use crate::links::generate;
use serde::Serialize;

/// `{ "value": "example.com" }` or `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DomainResponse {
    Value(String),
    Error(String),
}

/// `{ "url": "https://..." }` or `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LinkResponse {
    Url(String),
    Error(String),
}

pub fn domain_response(raw: &str) -> DomainResponse {
    match sanitize_and_validate(raw) {
        Ok(domain) => DomainResponse::Value(domain.into_string()),
        Err(e) => DomainResponse::Error(e.to_string()),
    }
}

/// Generate a link for a catalog tool. The domain is re-validated so callers
/// cannot bypass the normalizer.
pub fn link_response(tool_id: &str, domain: &str) -> LinkResponse {
    let Some(tool) = find_tool(tool_id) else {
        return LinkResponse::Error(format!("unknown tool '{}'", tool_id));
    };

    let domain = match sanitize_and_validate(domain) {
        Ok(domain) => domain,
        Err(e) => return LinkResponse::Error(e.to_string()),
    };

    match generate(tool, domain.as_str()) {
        Ok(url) => LinkResponse::Url(url),
        Err(e) => LinkResponse::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domain_response_value() {
        let response = domain_response("https://www.Example.com/path");

        assert_eq!(response, DomainResponse::Value("example.com".to_string()));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "value": "example.com" })
        );
    }

    #[test]
    fn test_domain_response_error() {
        let response = domain_response("example.123");

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "error": "The top-level domain cannot be entirely numeric." })
        );
    }

    #[test]
    fn test_link_response_url() {
        let response = link_response("whois", "example.com");

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "url": "https://who.is/whois/example.com" })
        );
    }

    #[test]
    fn test_link_response_domain_name_tool() {
        assert_eq!(
            link_response("github", "rust-lang.org"),
            LinkResponse::Url("https://github.com/rust-lang".to_string())
        );
    }

    #[test]
    fn test_link_response_unknown_tool() {
        assert_eq!(
            link_response("nope", "example.com"),
            LinkResponse::Error("unknown tool 'nope'".to_string())
        );
    }

    #[test]
    fn test_link_response_invalid_domain() {
        assert!(matches!(link_response("whois", "-bad.com"), LinkResponse::Error(_)));
    }
}
