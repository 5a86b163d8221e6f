//! Catalog query engine: filter + sort over the immutable record set.
//!
//! The engine is a pure function from `(records, params)` to an ordered view
//! of references. It never copies or mutates records, has no error states
//! (no matches is an empty view), and is deterministic for fixed inputs.
//! Query-input state (the search box, the active tab) lives in the caller;
//! the caller re-runs `query` on every change.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::model::{Access, AgentRecord, System, Template};

/// Seam between concrete record types and the engine. Implementors expose
/// the handful of fields the filter/sort pipeline reads.
pub trait CatalogEntry {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// The label the category/vendor filter matches against: the functional
    /// category for agents, vendor id for systems, namespace for templates.
    fn classification(&self) -> &str;
    fn version(&self) -> &str;
    fn access(&self) -> Access;
    fn updated_at(&self) -> DateTime<Utc>;
    /// Append every free-text field to the search haystack.
    fn search_text(&self, out: &mut String);
}

/// Sort orders offered by the directory UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Name A-Z, case-insensitive.
    #[value(name = "az")]
    NameAz,
    /// Descending lexicographic compare of the raw version string.
    Version,
    /// Free before paid, then name A-Z.
    Access,
}

/// Category/vendor filter: the `all` sentinel or an exact label match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// "all" (any case) is the pass-through sentinel; anything else is an
    /// exact-match filter.
    pub fn parse(raw: &str) -> CategoryFilter {
        if raw.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    fn admits(&self, entry: &impl CatalogEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => entry.classification() == label,
        }
    }
}

/// One query-engine invocation's worth of parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Free text, case-insensitive. Empty or whitespace-only means no
    /// text filter.
    pub text: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

/// Filter and stable-sort `records`, returning an ordered view of
/// references into the same slice.
pub fn query<'a, R: CatalogEntry>(records: &'a [R], params: &QueryParams) -> Vec<&'a R> {
    let needle = params.text.trim().to_lowercase();

    let mut view: Vec<&R> = records
        .iter()
        .filter(|r| params.category.admits(*r))
        .filter(|r| needle.is_empty() || haystack(*r).contains(&needle))
        .collect();

    // Vec::sort_by is stable: equal keys keep their input order.
    match params.sort {
        SortKey::Updated => view.sort_by(|a, b| b.updated_at().cmp(&a.updated_at())),
        SortKey::NameAz => view.sort_by(|a, b| name_key(*a).cmp(&name_key(*b))),
        SortKey::Version => view.sort_by(|a, b| b.version().cmp(a.version())),
        SortKey::Access => view.sort_by(|a, b| {
            a.access()
                .cmp(&b.access())
                .then_with(|| name_key(*a).cmp(&name_key(*b)))
        }),
    }

    view
}

fn name_key(entry: &impl CatalogEntry) -> String {
    entry.name().to_lowercase()
}

/// One lowercased blob per record: plain substring containment, no
/// tokenization, stemming, or ranking.
fn haystack(entry: &impl CatalogEntry) -> String {
    let mut hay = String::new();
    push(&mut hay, entry.name());
    push(&mut hay, entry.classification());
    push(&mut hay, entry.version());
    push(&mut hay, &entry.access().to_string());
    entry.search_text(&mut hay);
    hay.to_lowercase()
}

fn push(hay: &mut String, part: &str) {
    if !hay.is_empty() {
        hay.push(' ');
    }
    hay.push_str(part);
}

impl CatalogEntry for AgentRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn classification(&self) -> &str {
        self.category.label()
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn access(&self) -> Access {
        self.access
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn search_text(&self, out: &mut String) {
        push(out, &self.role);
        push(out, &self.summary);
        for tag in &self.tags {
            push(out, tag);
        }
        push(out, &self.system_prompt);
        push(out, &self.user_prompt);
        push(out, &self.context);
        push(out, &self.app_context);
        for endpoint in &self.endpoints {
            push(out, &endpoint.url);
            push(out, &endpoint.api);
        }
    }
}

impl CatalogEntry for System {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn classification(&self) -> &str {
        &self.vendor_id
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn access(&self) -> Access {
        // Commercial licensing is the closest analogue of the paid tier.
        match self.license.as_deref() {
            Some("Commercial") => Access::Paid,
            _ => Access::Free,
        }
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn search_text(&self, out: &mut String) {
        push(out, &self.name);
        for interface in &self.interfaces {
            push(out, interface.label());
        }
        for hosting in &self.hosting {
            push(out, hosting.label());
        }
        if let Some(license) = &self.license {
            push(out, license);
        }
    }
}

impl CatalogEntry for Template {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn classification(&self) -> &str {
        &self.namespace
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn access(&self) -> Access {
        Access::Free
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn search_text(&self, out: &mut String) {
        push(out, &self.name);
        for tag in &self.tags {
            push(out, tag);
        }
        if let Some(readme) = &self.readme_md {
            push(out, readme);
        }
        if let Ok(manifest) = serde_json::to_string(&self.manifest) {
            push(out, &manifest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::TimeZone;

    fn ts(mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, mo, d, 12, 0, 0).unwrap()
    }

    fn agent(id: &str, name: &str, category: Category, access: Access) -> AgentRecord {
        AgentRecord {
            id: id.to_string(),
            name: name.to_string(),
            role: "Engineer • Testing".to_string(),
            category,
            version: "1.0.0".to_string(),
            access,
            tags: vec!["Tag".to_string()],
            summary: "summary text".to_string(),
            system_prompt: "system prompt text".to_string(),
            user_prompt: "user prompt text".to_string(),
            context: "context text".to_string(),
            app_context: "app context text".to_string(),
            endpoints: vec![],
            created_at: ts(6, 1),
            updated_at: ts(8, 1),
        }
    }

    #[test]
    fn empty_text_and_all_category_returns_everything() {
        let records = vec![
            agent("a", "Alpha", Category::Frontend, Access::Free),
            agent("b", "Beta", Category::Backend, Access::Paid),
        ];
        let view = query(&records, &QueryParams::default());
        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn whitespace_only_text_is_no_filter() {
        let records = vec![agent("a", "Alpha", Category::Frontend, Access::Free)];
        let params = QueryParams {
            text: "   \t ".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(query(&records, &params).len(), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        let records = vec![
            agent("a", "Alpha", Category::Frontend, Access::Free),
            agent("b", "Beta", Category::Backend, Access::Free),
        ];
        let params = QueryParams {
            category: CategoryFilter::Only("Backend".to_string()),
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "b");
    }

    #[test]
    fn category_filter_parses_all_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Frontend"),
            CategoryFilter::Only("Frontend".to_string())
        );
    }

    #[test]
    fn text_filter_matches_substring_case_insensitively() {
        let records = vec![
            agent("a", "A-17 FRONTEND.UI", Category::Frontend, Access::Free),
            agent("b", "B-04 BACKEND.API", Category::Backend, Access::Free),
        ];
        let params = QueryParams {
            text: "frontend.ui".to_string(),
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "a");
    }

    #[test]
    fn text_filter_reaches_long_form_fields() {
        let mut a = agent("a", "Alpha", Category::Frontend, Access::Free);
        a.system_prompt = "Always return strongly typed components".to_string();
        let records = vec![a, agent("b", "Beta", Category::Backend, Access::Free)];
        let params = QueryParams {
            text: "strongly typed".to_string(),
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "a");
    }

    #[test]
    fn text_filter_reaches_endpoint_urls() {
        let mut a = agent("a", "Alpha", Category::Frontend, Access::Free);
        a.endpoints.push(crate::model::Endpoint {
            url: "https://perf.example.com/runs".to_string(),
            api: "GET /runs".to_string(),
        });
        let records = vec![a, agent("b", "Beta", Category::Backend, Access::Free)];
        let params = QueryParams {
            text: "perf.example.com".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(query(&records, &params).len(), 1);
    }

    #[test]
    fn updated_sort_is_descending() {
        let mut a = agent("a", "Alpha", Category::Frontend, Access::Free);
        let mut b = agent("b", "Beta", Category::Frontend, Access::Free);
        let mut c = agent("c", "Gamma", Category::Frontend, Access::Free);
        a.updated_at = ts(8, 1);
        b.updated_at = ts(8, 10);
        c.updated_at = ts(7, 1);
        let records = vec![a, b, c];
        let view = query(&records, &QueryParams::default());
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn access_sort_puts_free_first_then_name() {
        let records = vec![
            agent("z", "Zeta", Category::Frontend, Access::Paid),
            agent("a", "Alpha", Category::Frontend, Access::Free),
            agent("b", "Beta", Category::Frontend, Access::Free),
        ];
        let params = QueryParams {
            sort: SortKey::Access,
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn version_sort_is_plain_lexicographic_descending() {
        let mut a = agent("a", "Alpha", Category::Frontend, Access::Free);
        let mut b = agent("b", "Beta", Category::Frontend, Access::Free);
        let mut c = agent("c", "Gamma", Category::Frontend, Access::Free);
        a.version = "2.0.0".to_string();
        b.version = "10.0.0".to_string();
        c.version = "1.5.0".to_string();
        let records = vec![a, b, c];
        let params = QueryParams {
            sort: SortKey::Version,
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        // "2" > "10" under string compare, and "10" > "1." since '.' < '0'.
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let a = agent("first", "Same Name", Category::Frontend, Access::Free);
        let b = agent("second", "Same Name", Category::Backend, Access::Free);
        let records = vec![a, b];
        let params = QueryParams {
            sort: SortKey::NameAz,
            ..QueryParams::default()
        };
        let view = query(&records, &params);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn no_matches_yields_empty_view_not_error() {
        let records = vec![agent("a", "Alpha", Category::Frontend, Access::Free)];
        let params = QueryParams {
            text: "definitely-not-present-anywhere".to_string(),
            ..QueryParams::default()
        };
        assert!(query(&records, &params).is_empty());
    }

    #[test]
    fn query_does_not_mutate_input_order() {
        let records = vec![
            agent("b", "Beta", Category::Frontend, Access::Free),
            agent("a", "Alpha", Category::Frontend, Access::Free),
        ];
        let params = QueryParams {
            sort: SortKey::NameAz,
            ..QueryParams::default()
        };
        let _ = query(&records, &params);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "a");
    }

    #[test]
    fn system_access_maps_commercial_license_to_paid() {
        let system = System {
            id: "sys://anthropic/claude-code@1.2.0".to_string(),
            vendor_id: "vndr://anthropic".to_string(),
            name: "claude-code".to_string(),
            title: "Claude Code".to_string(),
            version: "1.2.0".to_string(),
            interfaces: vec![],
            hosting: vec![],
            license: Some("Commercial".to_string()),
            deprecated: false,
            created_at: None,
        };
        assert_eq!(CatalogEntry::access(&system), Access::Paid);
    }

    #[test]
    fn system_haystack_covers_interfaces_and_hosting() {
        use crate::model::{Hosting, Interface};
        let mk = |id: &str, interfaces: Vec<Interface>, hosting: Vec<Hosting>| System {
            id: id.to_string(),
            vendor_id: "vndr://acme".to_string(),
            name: "x".to_string(),
            title: "X".to_string(),
            version: "1.0.0".to_string(),
            interfaces,
            hosting,
            license: None,
            deprecated: false,
            created_at: None,
        };
        let systems = vec![
            mk("sys://acme/a@1.0.0", vec![Interface::Editor], vec![Hosting::Cloud]),
            mk("sys://acme/b@1.0.0", vec![Interface::Cli], vec![Hosting::Local]),
        ];

        let params = QueryParams {
            text: "editor".to_string(),
            ..QueryParams::default()
        };
        let view = query(&systems, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "sys://acme/a@1.0.0");

        let params = QueryParams {
            text: "local".to_string(),
            ..QueryParams::default()
        };
        let view = query(&systems, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "sys://acme/b@1.0.0");
    }

    #[test]
    fn systems_filter_by_vendor_classification() {
        let mk = |id: &str, vendor: &str| System {
            id: id.to_string(),
            vendor_id: vendor.to_string(),
            name: "x".to_string(),
            title: "X".to_string(),
            version: "1.0.0".to_string(),
            interfaces: vec![],
            hosting: vec![],
            license: None,
            deprecated: false,
            created_at: None,
        };
        let systems = vec![
            mk("sys://a/x@1.0.0", "vndr://anthropic"),
            mk("sys://b/x@1.0.0", "vndr://openai"),
        ];
        let params = QueryParams {
            category: CategoryFilter::Only("vndr://openai".to_string()),
            ..QueryParams::default()
        };
        let view = query(&systems, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].vendor_id, "vndr://openai");
    }
}
