/// Built-in catalog of research tools
use crate::tool_data::{Category, ToolDescriptor, UrlType};
use std::sync::LazyLock;

static CATALOG: LazyLock<Vec<ToolDescriptor>> = LazyLock::new(build_catalog);

/// All tools, in display order. Built once on first access and never mutated.
pub fn catalog() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// Look up a tool by id
pub fn find_tool(id: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|tool| tool.id == id)
}

/// Tools in one category, in display order
pub fn tools_in_category(category: Category) -> Vec<&'static ToolDescriptor> {
    CATALOG.iter().filter(|tool| tool.category == category).collect()
}

/// Categories that have at least one tool, with their tool counts
pub fn category_counts() -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| (category, tools_in_category(category).len()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn build_catalog() -> Vec<ToolDescriptor> {
    use Category::*;
    use UrlType::*;

    let tools = vec![
        // WHOIS
        ToolDescriptor::new(
            "whois",
            "Who.is",
            "Registrar, registration dates and name servers.",
            "https://who.is/whois/{{DOMAIN}}",
            Domain,
            Whois,
        ),
        ToolDescriptor::new(
            "icann-lookup",
            "ICANN Lookup",
            "Official registration data lookup (RDAP).",
            "https://lookup.icann.org/en/lookup?name={{DOMAIN}}",
            Domain,
            Whois,
        ),
        ToolDescriptor::new(
            "domaintools",
            "DomainTools",
            "WHOIS record with hosting history summary.",
            "https://whois.domaintools.com/{{DOMAIN}}",
            Domain,
            Whois,
        ),
        // DNS
        ToolDescriptor::new(
            "dnschecker",
            "DNS Checker",
            "Global DNS propagation check for A records.",
            "https://dnschecker.org/#A/{{DOMAIN}}",
            Domain,
            Dns,
        ),
        ToolDescriptor::new(
            "mxtoolbox-mx",
            "MX Lookup",
            "Mail exchanger records via MxToolbox.",
            "https://mxtoolbox.com/SuperTool.aspx?action=mx%3a{{DOMAIN}}",
            Domain,
            Dns,
        ),
        ToolDescriptor::new(
            "securitytrails",
            "SecurityTrails",
            "Current and historical DNS records.",
            "https://securitytrails.com/domain/{{DOMAIN}}/dns",
            Domain,
            Dns,
        ),
        // Appraisal
        ToolDescriptor::new(
            "godaddy-appraisal",
            "GoDaddy Appraisal",
            "Automated domain value estimate.",
            "https://www.godaddy.com/domain-value-appraisal/appraisal/?domainToCheck={{DOMAIN}}",
            Domain,
            Appraisal,
        ),
        ToolDescriptor::new(
            "dynadot-appraisal",
            "Dynadot Appraisal",
            "Second-opinion value estimate.",
            "https://www.dynadot.com/domain/appraisal?domain={{DOMAIN}}",
            Domain,
            Appraisal,
        ),
        ToolDescriptor::new(
            "namebio",
            "NameBio",
            "Comparable historical sales for the name.",
            "https://namebio.com/?s={{DOMAIN_NAME}}",
            DomainName,
            Appraisal,
        ),
        // Security
        ToolDescriptor::new(
            "mxtoolbox-blacklist",
            "Blacklist Check",
            "Spam blacklist status via MxToolbox.",
            "https://mxtoolbox.com/SuperTool.aspx?action=blacklist%3a{{DOMAIN}}",
            Domain,
            Security,
        ),
        ToolDescriptor::new(
            "virustotal",
            "VirusTotal",
            "Malware and phishing reputation.",
            "https://www.virustotal.com/gui/domain/{{DOMAIN}}",
            Domain,
            Security,
        ),
        ToolDescriptor::new(
            "safe-browsing",
            "Google Safe Browsing",
            "Site status from Google's transparency report.",
            "https://transparencyreport.google.com/safe-browsing/search?url={{DOMAIN}}",
            Domain,
            Security,
        ),
        ToolDescriptor::new(
            "crtsh",
            "crt.sh",
            "Certificate transparency log entries.",
            "https://crt.sh/?q={{DOMAIN}}",
            Domain,
            Security,
        ),
        // SEO & traffic
        ToolDescriptor::new(
            "similarweb",
            "Similarweb",
            "Traffic estimates and audience overview.",
            "https://www.similarweb.com/website/{{DOMAIN}}/",
            Domain,
            Seo,
        ),
        ToolDescriptor::new(
            "ahrefs-authority",
            "Ahrefs Authority",
            "Domain rating and backlink summary.",
            "https://ahrefs.com/website-authority-checker/?input={{DOMAIN}}",
            Domain,
            Seo,
        ),
        ToolDescriptor::new(
            "google-index",
            "Google Index",
            "Pages Google has indexed for the site.",
            "https://www.google.com/search?q=site%3A{{DOMAIN}}",
            Domain,
            Seo,
        ),
        // History
        ToolDescriptor::new(
            "wayback",
            "Wayback Machine",
            "Archived snapshots over time.",
            "https://web.archive.org/web/*/{{DOMAIN}}",
            Domain,
            Archive,
        ),
        ToolDescriptor::new(
            "archive-today",
            "archive.today",
            "On-demand page archives.",
            "https://archive.ph/{{DOMAIN}}",
            Domain,
            Archive,
        ),
        // Social media, keyed by the name only
        ToolDescriptor::new(
            "x",
            "X (Twitter)",
            "Handle matching the domain name.",
            "https://x.com/{{DOMAIN_NAME}}",
            DomainName,
            Social,
        ),
        ToolDescriptor::new(
            "instagram",
            "Instagram",
            "Profile matching the domain name.",
            "https://www.instagram.com/{{DOMAIN_NAME}}/",
            DomainName,
            Social,
        ),
        ToolDescriptor::new(
            "facebook",
            "Facebook",
            "Page matching the domain name.",
            "https://www.facebook.com/{{DOMAIN_NAME}}",
            DomainName,
            Social,
        ),
        ToolDescriptor::new(
            "github",
            "GitHub",
            "Organization or user matching the domain name.",
            "https://github.com/{{DOMAIN_NAME}}",
            DomainName,
            Social,
        ),
        ToolDescriptor::new(
            "youtube",
            "YouTube",
            "Channel handle matching the domain name.",
            "https://www.youtube.com/@{{DOMAIN_NAME}}",
            DomainName,
            Social,
        ),
        ToolDescriptor::new(
            "reddit",
            "Reddit",
            "Mentions of the domain across Reddit.",
            "https://www.reddit.com/search/?q={{DOMAIN}}",
            Domain,
            Social,
        ),
        // Trademarks
        ToolDescriptor::new(
            "uspto",
            "USPTO Trademarks",
            "US trademark search for the name.",
            "https://tmsearch.uspto.gov/search/search-results?query={{DOMAIN_NAME}}",
            DomainName,
            Trademark,
        ),
        ToolDescriptor::new(
            "wipo",
            "WIPO Brand Database",
            "International trademark search for the name.",
            "https://branddb.wipo.int/en/quicksearch?by=brandName&v={{DOMAIN_NAME}}",
            DomainName,
            Trademark,
        ),
    ];

    log::debug!("Loaded {} research tools", tools.len());
    tools
}
