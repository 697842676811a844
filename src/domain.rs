/// Domain normalization and validation for Domain Research Hub
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Maximum length of a full domain name, in characters
pub const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single dot-separated label
pub const MAX_LABEL_LEN: usize = 63;

static DOMAIN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]$",
    )
    .expect("domain format pattern compiles")
});

/// Why a sanitized domain was rejected. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a domain name.")]
    Missing,

    #[error("Domain name is too long (maximum 253 characters).")]
    TooLong,

    #[error("Domain contains invalid characters. Only letters, numbers, hyphens, and periods are allowed.")]
    InvalidCharacters,

    #[error("Invalid format. A domain must include a TLD (e.g., \".com\").")]
    MissingTld,

    #[error("Invalid format. A domain cannot contain consecutive or trailing periods.")]
    EmptyLabel,

    #[error("The label \"{label}\" is too long (maximum 63 characters).")]
    LabelTooLong { label: String },

    #[error("Domain labels cannot start or end with a hyphen.")]
    HyphenPlacement,

    #[error("The top-level domain cannot be entirely numeric.")]
    NumericTld,

    #[error("Invalid domain format.")]
    InvalidFormat,
}

/// A domain that passed `validate`. Only built through `sanitize_and_validate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDomain(String);

impl NormalizedDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NormalizedDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        sanitize_and_validate(s)
    }
}

/// Turn whatever the user typed into a bare, lower-case host name
///
/// Algorithm:
/// 1. Empty input stays empty (means "no domain", not an error)
/// 2. Prepend "https://" unless the input already carries a scheme
/// 3. Parse as a URL and keep the host, minus any leading "www." labels
/// 4. If parsing fails, normalize by hand: drop the scheme, "www." labels, and any
///    path, then keep only [a-z0-9.-]
///
/// Passes repeat until the output stops changing, so the result is always a
/// fixed point of `sanitize`.
///
/// Examples:
/// - https://WWW.Example.com/path?x=1 → example.com
/// - example.com:8080 → example.com
/// - exa mple.com → example.com
pub fn sanitize(input: &str) -> String {
    let mut current = sanitize_once(input);

    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    match Url::parse(&candidate) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
            strip_www(&host).to_string()
        }
        Err(_) => normalize_by_hand(input),
    }
}

fn normalize_by_hand(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);

    let host = strip_www(without_scheme)
        .split('/')
        .next()
        .unwrap_or_default();

    host.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect()
}

fn strip_www(mut host: &str) -> &str {
    while let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }
    host
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Check a sanitized domain against domain-name syntax rules
///
/// Rules are checked in a fixed order and the first failure wins, so the
/// user always sees the most basic problem first.
pub fn validate(domain: &str) -> Result<(), ValidationError> {
    if domain.trim().is_empty() {
        return Err(ValidationError::Missing);
    }

    if domain.chars().count() > MAX_DOMAIN_LEN {
        return Err(ValidationError::TooLong);
    }

    if !domain.chars().all(is_domain_char) {
        return Err(ValidationError::InvalidCharacters);
    }

    if !domain.contains('.') {
        return Err(ValidationError::MissingTld);
    }

    let labels: Vec<&str> = domain.split('.').collect();

    if labels.iter().any(|label| label.is_empty()) {
        return Err(ValidationError::EmptyLabel);
    }

    if let Some(label) = labels.iter().find(|label| label.len() > MAX_LABEL_LEN) {
        return Err(ValidationError::LabelTooLong {
            label: label.to_string(),
        });
    }

    if labels
        .iter()
        .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return Err(ValidationError::HyphenPlacement);
    }

    let tld = labels.last().copied().unwrap_or_default();
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NumericTld);
    }

    if !DOMAIN_FORMAT.is_match(domain) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(())
}

/// Sanitize raw input and validate the result in one step
pub fn sanitize_and_validate(raw: &str) -> Result<NormalizedDomain, ValidationError> {
    let domain = sanitize(raw);
    validate(&domain)?;
    Ok(NormalizedDomain(domain))
}
