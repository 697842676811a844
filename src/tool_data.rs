/// Data structures for Domain Research Hub
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the full domain, e.g. "sub.example.com"
pub const DOMAIN_TOKEN: &str = "{{DOMAIN}}";

/// Placeholder replaced with the portion selected by `UrlType`
pub const DOMAIN_NAME_TOKEN: &str = "{{DOMAIN_NAME}}";

/// Which part of the domain a tool substitutes for `{{DOMAIN_NAME}}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UrlType {
    /// The whole domain
    #[default]
    Domain,
    /// Only the first label ("example" for "example.com")
    DomainName,
}

/// Grouping used by the dashboard tabs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Whois,
    Dns,
    Appraisal,
    Security,
    Seo,
    Archive,
    Social,
    Trademark,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Whois,
        Category::Dns,
        Category::Appraisal,
        Category::Security,
        Category::Seo,
        Category::Archive,
        Category::Social,
        Category::Trademark,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Whois => "WHOIS",
            Category::Dns => "DNS",
            Category::Appraisal => "Appraisal",
            Category::Security => "Security",
            Category::Seo => "SEO & Traffic",
            Category::Archive => "History",
            Category::Social => "Social Media",
            Category::Trademark => "Trademarks",
        }
    }
}

/// A third-party research service the user can open for a domain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url_template: String,
    pub url_type: UrlType,
    pub category: Category,
}

impl ToolDescriptor {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        url_template: &str,
        url_type: UrlType,
        category: Category,
    ) -> ToolDescriptor {
        ToolDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url_template: url_template.to_string(),
            url_type,
            category,
        }
    }

    /// Whether the template carries at least one placeholder
    pub fn has_placeholder(&self) -> bool {
        self.url_template.contains(DOMAIN_TOKEN) || self.url_template.contains(DOMAIN_NAME_TOKEN)
    }

    /// Case-insensitive match against title and description
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
