//! Shared fixtures for integration tests.
#![allow(dead_code)]

use agent_hq::model::{Access, AgentRecord, Category, Endpoint};
use chrono::{DateTime, TimeZone, Utc};

pub fn ts(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
}

/// Builder for agent records with sane defaults, fixture-style.
pub struct AgentFixtureBuilder {
    record: AgentRecord,
}

impl AgentFixtureBuilder {
    pub fn new(id: &str) -> AgentFixtureBuilder {
        AgentFixtureBuilder {
            record: AgentRecord {
                id: id.to_string(),
                name: id.to_uppercase(),
                role: "Engineer • Fixture".to_string(),
                category: Category::Frontend,
                version: "1.0.0".to_string(),
                access: Access::Free,
                tags: vec!["Fixture".to_string()],
                summary: "fixture summary".to_string(),
                system_prompt: "fixture system prompt".to_string(),
                user_prompt: "fixture user prompt".to_string(),
                context: "fixture context".to_string(),
                app_context: "fixture app context".to_string(),
                endpoints: vec![],
                created_at: ts(2025, 6, 1),
                updated_at: ts(2025, 8, 1),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.record.category = category;
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.record.version = version.to_string();
        self
    }

    pub fn access(mut self, access: Access) -> Self {
        self.record.access = access;
        self
    }

    pub fn updated(mut self, updated_at: DateTime<Utc>) -> Self {
        self.record.updated_at = updated_at;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.record.tags.push(tag.to_string());
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.record.summary = summary.to_string();
        self
    }

    pub fn endpoint(mut self, url: &str, api: &str) -> Self {
        self.record.endpoints.push(Endpoint {
            url: url.to_string(),
            api: api.to_string(),
        });
        self
    }

    pub fn build(self) -> AgentRecord {
        self.record
    }
}
