/// Multi-open selection of tool ids

use crate::links::generate;
use crate::tool_data::ToolDescriptor;

/// Tool ids chosen for "open selected", kept in the order they were picked
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Selection { ids: Vec::new() }
    }

    /// Add the id if absent, remove it if present. Returns true if now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let original_len = self.ids.len();
        self.ids.retain(|selected| selected != id);

        if self.ids.len() < original_len {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Add every id not already selected, keeping the existing order first
    pub fn select_all<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            if !self.contains(id) {
                self.ids.push(id.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Drop ids that are not in the catalog
    pub fn retain_known(&mut self, catalog: &[ToolDescriptor]) {
        self.ids.retain(|id| catalog.iter().any(|tool| &tool.id == id));
    }

    /// Keep only known tools that produce a link for `domain`
    pub fn retain_openable(&mut self, catalog: &[ToolDescriptor], domain: &str) {
        self.retain_known(catalog);
        self.ids.retain(|id| {
            catalog
                .iter()
                .find(|tool| &tool.id == id)
                .is_some_and(|tool| generate(tool, domain).is_ok())
        });
    }

    /// Selected tools in selection order. Unknown ids are skipped.
    pub fn resolve<'a>(&self, catalog: &'a [ToolDescriptor]) -> Vec<&'a ToolDescriptor> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|tool| &tool.id == id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_data::{Category, UrlType};

    fn create_test_catalog() -> Vec<ToolDescriptor> {
        ["whois", "dns", "github"]
            .iter()
            .map(|id| {
                ToolDescriptor::new(
                    id,
                    id,
                    "",
                    "https://x.test/{{DOMAIN}}",
                    UrlType::Domain,
                    Category::Whois,
                )
            })
            .collect()
    }

    #[test]
    fn test_selection_new() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();

        assert!(selection.toggle("whois"));
        assert!(selection.contains("whois"));

        assert!(!selection.toggle("whois"));
        assert!(!selection.contains("whois"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_keeps_pick_order() {
        let mut selection = Selection::new();
        selection.toggle("github");
        selection.toggle("whois");
        selection.toggle("dns");
        selection.toggle("whois");
        selection.toggle("whois");

        assert_eq!(selection.ids(), ["github", "dns", "whois"]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection = Selection::new();
        selection.toggle("dns");
        selection.select_all(["whois", "dns", "github"]);

        assert_eq!(selection.ids(), ["dns", "whois", "github"]);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_resolve_in_selection_order() {
        let catalog = create_test_catalog();
        let mut selection = Selection::new();
        selection.toggle("github");
        selection.toggle("removed-tool");
        selection.toggle("whois");

        let tools = selection.resolve(&catalog);

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].id, "github");
        assert_eq!(tools[1].id, "whois");
    }

    #[test]
    fn test_retain_openable_drops_broken_and_unknown_tools() {
        let mut catalog = create_test_catalog();
        catalog[1].url_template = "https://exa mple.test/{{DOMAIN}}".to_string();

        let mut selection = Selection::new();
        selection.toggle("github");
        selection.toggle("dns");
        selection.toggle("removed-tool");
        selection.toggle("whois");

        selection.retain_openable(&catalog, "example.com");

        assert_eq!(selection.ids(), ["github", "whois"]);
    }

    #[test]
    fn test_retain_known() {
        let catalog = create_test_catalog();
        let mut selection = Selection::new();
        selection.toggle("removed-tool");
        selection.toggle("dns");

        selection.retain_known(&catalog);

        assert_eq!(selection.ids(), ["dns"]);
    }
}
