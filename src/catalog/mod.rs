//! The static, versioned record store.
//!
//! The whole catalog is loaded wholesale at startup and never mutated; there
//! is no partial-load or pagination contract. Lookup helpers resolve the
//! cross-references between vendors, systems, and templates.

mod seed;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::model::{AgentRecord, CategoryInfo, System, Template, Vendor};

/// Immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub agents: Vec<AgentRecord>,
    pub vendors: Vec<Vendor>,
    pub systems: Vec<System>,
    pub templates: Vec<Template>,
    pub categories: Vec<CategoryInfo>,
}

/// Reference to any record kind, for id-based lookups across the catalog.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Entry<'a> {
    Agent(&'a AgentRecord),
    Vendor(&'a Vendor),
    System(&'a System),
    Template(&'a Template),
}

impl Entry<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Agent(_) => "agent",
            Entry::Vendor(_) => "vendor",
            Entry::System(_) => "system",
            Entry::Template(_) => "template",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entry::Agent(a) => &a.id,
            Entry::Vendor(v) => &v.id,
            Entry::System(s) => &s.id,
            Entry::Template(t) => &t.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Entry::Agent(a) => &a.name,
            Entry::Vendor(v) => &v.name,
            Entry::System(s) => &s.title,
            Entry::Template(t) => &t.title,
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::seed);

impl Catalog {
    /// Build the seed catalog. Prefer [`Catalog::get`] outside tests.
    pub fn seed() -> Catalog {
        Catalog {
            agents: seed::agents(),
            vendors: seed::vendors(),
            systems: seed::systems(),
            templates: seed::templates(),
            categories: seed::categories(),
        }
    }

    /// The process-wide catalog instance.
    pub fn get() -> &'static Catalog {
        &CATALOG
    }

    pub fn vendor_by_id(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn system_by_id(&self, id: &str) -> Option<&System> {
        self.systems.iter().find(|s| s.id == id)
    }

    pub fn systems_by_vendor(&self, vendor_id: &str) -> Vec<&System> {
        self.systems
            .iter()
            .filter(|s| s.vendor_id == vendor_id)
            .collect()
    }

    /// Templates whose tags intersect the category's related tags.
    pub fn templates_by_category(&self, category_id: &str) -> Vec<&Template> {
        let Some(category) = self.categories.iter().find(|c| c.id == category_id) else {
            return Vec::new();
        };
        self.templates
            .iter()
            .filter(|t| t.tags.iter().any(|tag| category.tags.contains(tag)))
            .collect()
    }

    /// Resolve any record kind by id. Agent ids, `vndr://`, `sys://`, and
    /// `agt://` uris all land here.
    pub fn entry_by_id(&self, id: &str) -> Option<Entry<'_>> {
        if let Some(a) = self.agents.iter().find(|a| a.id == id) {
            return Some(Entry::Agent(a));
        }
        if let Some(v) = self.vendor_by_id(id) {
            return Some(Entry::Vendor(v));
        }
        if let Some(s) = self.system_by_id(id) {
            return Some(Entry::System(s));
        }
        self.templates
            .iter()
            .find(|t| t.id == id)
            .map(Entry::Template)
    }
}
