/// Link generation: template substitution, batch generation, card state

use crate::tool_data::{DOMAIN_NAME_TOKEN, DOMAIN_TOKEN, ToolDescriptor, UrlType};
use thiserror::Error;
use url::Url;

/// How long a card shows its loading state after being opened
pub const LOADING_RESET_MS: i32 = 1000;

/// A tool whose template cannot produce a usable link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("tool '{tool_id}' has no {{{{DOMAIN}}}} or {{{{DOMAIN_NAME}}}} placeholder")]
    MissingPlaceholder { tool_id: String },

    #[error("tool '{tool_id}' produced an invalid URL '{url}': {source}")]
    InvalidUrl {
        tool_id: String,
        url: String,
        source: url::ParseError,
    },
}

impl GenerationError {
    pub fn tool_id(&self) -> &str {
        match self {
            GenerationError::MissingPlaceholder { tool_id } => tool_id,
            GenerationError::InvalidUrl { tool_id, .. } => tool_id,
        }
    }
}

/// The part of the domain substituted for `{{DOMAIN_NAME}}`
///
/// - Domain: "sub.example.com" → "sub.example.com"
/// - DomainName: "sub.example.com" → "sub"
pub fn domain_part(domain: &str, url_type: UrlType) -> &str {
    match url_type {
        UrlType::Domain => domain,
        UrlType::DomainName => match domain.split_once('.') {
            Some((name, _)) if !name.is_empty() => name,
            _ => domain,
        },
    }
}

/// Build the destination URL for one tool
///
/// Replaces the first `{{DOMAIN}}` and the first `{{DOMAIN_NAME}}` in the
/// template, then checks the result is an absolute URL. Failures are logged
/// and returned, never raised.
pub fn generate(tool: &ToolDescriptor, domain: &str) -> Result<String, GenerationError> {
    let result = substitute(tool, domain);

    if let Err(e) = &result {
        log::warn!("Link generation failed: {}", e);
    }

    result
}

fn substitute(tool: &ToolDescriptor, domain: &str) -> Result<String, GenerationError> {
    if !tool.has_placeholder() {
        return Err(GenerationError::MissingPlaceholder {
            tool_id: tool.id.clone(),
        });
    }

    let url = tool
        .url_template
        .replacen(DOMAIN_TOKEN, domain, 1)
        .replacen(DOMAIN_NAME_TOKEN, domain_part(domain, tool.url_type), 1);

    match Url::parse(&url) {
        Ok(_) => Ok(url),
        Err(source) => Err(GenerationError::InvalidUrl {
            tool_id: tool.id.clone(),
            url,
            source,
        }),
    }
}

/// Generate links for many tools, in order
///
/// Each tool is independent: a broken template yields an error in its slot
/// and processing continues with the next tool.
pub fn batch_generate<'a, I>(tools: I, domain: &str) -> Vec<Result<String, GenerationError>>
where
    I: IntoIterator<Item = &'a ToolDescriptor>,
{
    tools.into_iter().map(|tool| generate(tool, domain)).collect()
}

/// Visible state of a tool card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Loading,
    Error(GenerationError),
}

impl CardState {
    /// Derive a card's state from its generated link and loading flag.
    /// A failed link wins over loading, so a broken card never looks busy.
    pub fn resolve(outcome: &Result<String, GenerationError>, loading: bool) -> CardState {
        match outcome {
            Err(e) => CardState::Error(e.clone()),
            Ok(_) if loading => CardState::Loading,
            Ok(_) => CardState::Idle,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CardState::Error(_))
    }

    pub fn can_open(&self) -> bool {
        matches!(self, CardState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_data::Category;

    fn create_test_tool(id: &str, template: &str, url_type: UrlType) -> ToolDescriptor {
        ToolDescriptor::new(id, id, "", template, url_type, Category::Whois)
    }

    #[test]
    fn test_generate_domain() {
        let tool = create_test_tool("whois", "https://who.is/whois/{{DOMAIN}}", UrlType::Domain);

        assert_eq!(
            generate(&tool, "example.com"),
            Ok("https://who.is/whois/example.com".to_string())
        );
    }

    #[test]
    fn test_generate_domain_name() {
        let tool = create_test_tool("x", "https://x.test/{{DOMAIN_NAME}}", UrlType::DomainName);

        assert_eq!(
            generate(&tool, "sub.example.com"),
            Ok("https://x.test/sub".to_string())
        );
    }

    #[test]
    fn test_domain_name_token_with_domain_type_uses_full_domain() {
        let tool = create_test_tool("x", "https://x.test/{{DOMAIN_NAME}}", UrlType::Domain);

        assert_eq!(
            generate(&tool, "sub.example.com"),
            Ok("https://x.test/sub.example.com".to_string())
        );
    }

    #[test]
    fn test_generate_both_tokens() {
        let tool = create_test_tool(
            "both",
            "https://x.test/{{DOMAIN_NAME}}?site={{DOMAIN}}",
            UrlType::DomainName,
        );

        assert_eq!(
            generate(&tool, "example.org"),
            Ok("https://x.test/example?site=example.org".to_string())
        );
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let tool = create_test_tool("twice", "https://x.test/{{DOMAIN}}/{{DOMAIN}}", UrlType::Domain);

        assert_eq!(
            generate(&tool, "example.com"),
            Ok("https://x.test/example.com/{{DOMAIN}}".to_string())
        );
    }

    #[test]
    fn test_domain_part() {
        assert_eq!(domain_part("sub.example.com", UrlType::Domain), "sub.example.com");
        assert_eq!(domain_part("sub.example.com", UrlType::DomainName), "sub");
        assert_eq!(domain_part("example", UrlType::DomainName), "example");
        assert_eq!(domain_part(".example", UrlType::DomainName), ".example");
    }

    #[test]
    fn test_missing_placeholder() {
        let tool = create_test_tool("static", "https://x.test/static", UrlType::Domain);

        assert_eq!(
            generate(&tool, "example.com"),
            Err(GenerationError::MissingPlaceholder {
                tool_id: "static".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_url_is_an_error_not_a_panic() {
        let bad_host = create_test_tool("bad-host", "https://exa mple.test/{{DOMAIN}}", UrlType::Domain);
        let relative = create_test_tool("relative", "lookup/{{DOMAIN}}", UrlType::Domain);

        let err = generate(&bad_host, "example.com").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidUrl { .. }));
        assert_eq!(err.tool_id(), "bad-host");

        let err = generate(&relative, "example.com").unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidUrl {
                source: url::ParseError::RelativeUrlWithoutBase,
                ..
            }
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationError::MissingPlaceholder {
            tool_id: "static".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tool 'static' has no {{DOMAIN}} or {{DOMAIN_NAME}} placeholder"
        );
    }

    #[test]
    fn test_batch_generate_isolates_failures() {
        let tools = vec![
            create_test_tool("a", "https://a.test/{{DOMAIN}}", UrlType::Domain),
            create_test_tool("broken", "https://exa mple.test/{{DOMAIN}}", UrlType::Domain),
            create_test_tool("c", "https://c.test/{{DOMAIN_NAME}}", UrlType::DomainName),
            create_test_tool("d", "https://d.test/?q={{DOMAIN}}", UrlType::Domain),
        ];

        let results = batch_generate(&tools, "example.com");

        assert_eq!(results.len(), 4);
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
        assert_eq!(results[0], Ok("https://a.test/example.com".to_string()));
        assert_eq!(results[1].as_ref().unwrap_err().tool_id(), "broken");
        assert_eq!(results[2], Ok("https://c.test/example".to_string()));
        assert_eq!(results[3], Ok("https://d.test/?q=example.com".to_string()));
    }

    #[test]
    fn test_batch_generate_empty() {
        let tools: Vec<ToolDescriptor> = Vec::new();
        assert!(batch_generate(&tools, "example.com").is_empty());
    }

    #[test]
    fn test_card_state_resolve() {
        let ok: Result<String, GenerationError> = Ok("https://a.test/example.com".to_string());
        let err: Result<String, GenerationError> = Err(GenerationError::MissingPlaceholder {
            tool_id: "static".to_string(),
        });

        assert_eq!(CardState::resolve(&ok, false), CardState::Idle);
        assert_eq!(CardState::resolve(&ok, true), CardState::Loading);
        assert!(CardState::resolve(&err, false).is_error());
        assert!(CardState::resolve(&err, true).is_error());

        assert!(CardState::Idle.can_open());
        assert!(!CardState::Loading.can_open());
        assert!(!CardState::resolve(&err, false).can_open());
    }
}
