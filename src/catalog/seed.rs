//! Seed data for the curated directory.
//!
//! Field text is catalog data, not prose to edit.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use crate::model::{
    Access, AgentRecord, Category, CategoryInfo, Endpoint, Hosting, Interface, System, Template,
    Vendor,
};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn endpoint(url: &str, api: &str) -> Endpoint {
    Endpoint {
        url: url.to_string(),
        api: api.to_string(),
    }
}

pub(super) fn agents() -> Vec<AgentRecord> {
    vec![
        AgentRecord {
            id: "agt-frontend-ui".into(),
            name: "A-17 FRONTEND.UI".into(),
            role: "Specialist • React/Next Tailwind".into(),
            category: Category::Frontend,
            version: "1.4.2".into(),
            access: Access::Free,
            tags: vec!["SSR".into(), "RSC".into(), "UI-Gen".into(), "A11y".into()],
            summary: "Generates accessible UI with RSC patterns, Tailwind semantics, and shadcn \
                      primitives. Enforces design tokens and IA."
                .into(),
            system_prompt: "You are A-17 FRONTEND.UI. You generate accessible, performant \
                            React/Next code using the App Router and Tailwind. Always return \
                            strongly typed components and avoid inline styles unless necessary."
                .into(),
            user_prompt: "Create a responsive dashboard with a left nav, KPI cards, and a table. \
                          Prioritize a11y and keyboard navigation."
                .into(),
            context: "Target stack: Next.js (App Router), TypeScript, Tailwind, shadcn/ui. Use \
                      Lucide icons. Avoid blue unless asked."
                .into(),
            app_context: "Runs in CI as a codegen step. Receives schema JSON, emits components \
                          and test stubs. Can open PRs with diffs."
                .into(),
            endpoints: vec![
                endpoint("https://api.example.com/generate/ui", "POST /generate/ui"),
                endpoint("https://api.example.com/validate/a11y", "POST /validate/a11y"),
            ],
            created_at: ts(2025, 8, 1, 12, 0),
            updated_at: ts(2025, 8, 10, 9, 15),
        },
        AgentRecord {
            id: "agt-backend-api".into(),
            name: "B-04 BACKEND.API".into(),
            role: "Engineer • API Orchestration".into(),
            category: Category::Backend,
            version: "2.1.0".into(),
            access: Access::Paid,
            tags: vec!["REST".into(), "AuthZ".into(), "Caching".into()],
            summary: "Designs and enforces REST APIs with schema-first approach. Implements \
                      authz, rate limits, and cache strategy."
                .into(),
            system_prompt: "You are B-04 BACKEND.API. Produce OpenAPI-first services with \
                            consistent resource naming. Add observability."
                .into(),
            user_prompt: "Draft an API for project/issue tracking with roles and audit logs. \
                          Include pagination and filtering patterns."
                .into(),
            context: "Languages: TypeScript/Node. Infra: Vercel, Neon. Use zod validation on \
                      boundaries. Emit OpenAPI JSON."
                .into(),
            app_context: "Used by platform squads to bootstrap internal services with guardrails \
                          and consistent patterns."
                .into(),
            endpoints: vec![endpoint(
                "https://api.example.com/openapi.json",
                "GET /openapi.json",
            )],
            created_at: ts(2025, 7, 18, 8, 20),
            updated_at: ts(2025, 8, 9, 14, 55),
        },
        AgentRecord {
            id: "agt-systems-lowlat".into(),
            name: "S-09 SYSTEMS.LL".into(),
            role: "Engineer • Low-Latency".into(),
            category: Category::Systems,
            version: "0.9.7".into(),
            access: Access::Paid,
            tags: vec!["Rust".into(), "SIMD".into(), "Profiling".into()],
            summary: "Optimizes critical paths with lock-free structures and cache-aware \
                      layouts. Targets tail latency p99.9."
                .into(),
            system_prompt: "You are S-09 SYSTEMS.LL. Apply perf-first design, measure before \
                            optimize, and document tradeoffs."
                .into(),
            user_prompt: "Refactor ingestion pipeline to reduce p99 latency by 30%. Provide \
                          flamegraph guidance and benchmarks."
                .into(),
            context: "Runtime: Rust + Tokio. Targets Linux x86_64. Use criterion for benches. \
                      Avoid unsafe unless justified."
                .into(),
            app_context: "Runs in perf CI on PRs to annotate regressions and suggest patches."
                .into(),
            endpoints: vec![
                endpoint("https://perf.example.com/runs", "GET /runs"),
                endpoint("https://perf.example.com/patch", "POST /patch"),
            ],
            created_at: ts(2025, 7, 1, 10, 0),
            updated_at: ts(2025, 8, 8, 11, 22),
        },
        AgentRecord {
            id: "agt-arch-ref".into(),
            name: "R-02 ARCH.REF".into(),
            role: "Architect • Reference Designs".into(),
            category: Category::Architecture,
            version: "1.0.5".into(),
            access: Access::Free,
            tags: vec![
                "ADR".into(),
                "Bounded-Context".into(),
                "Event-Driven".into(),
            ],
            summary: "Produces ADRs, context maps, and reference event-driven topologies. \
                      Ensures evolution paths and SLOs."
                .into(),
            system_prompt: "You are R-02 ARCH.REF. Align technical decisions to business \
                            capabilities. Prefer explicit boundaries."
                .into(),
            user_prompt: "Propose a reference architecture for a multi-tenant SaaS with strong \
                          isolation and cost controls."
                .into(),
            context: "Tooling: C4, PlantUML, Mermaid. Infra: Vercel, Neon, S3. Observability \
                      first."
                .into(),
            app_context: "Used in discovery to converge on tenable architectures before build."
                .into(),
            endpoints: vec![endpoint(
                "https://arch.example.com/reference",
                "GET /reference",
            )],
            created_at: ts(2025, 6, 10, 12, 0),
            updated_at: ts(2025, 8, 5, 18, 0),
        },
        AgentRecord {
            id: "agt-data-analyst".into(),
            name: "D-11 DATA.ANALYST".into(),
            role: "Analyst • SQL/Visualization".into(),
            category: Category::Data,
            version: "3.2.0".into(),
            access: Access::Free,
            tags: vec!["SQL".into(), "BI".into(), "Metrics".into()],
            summary: "Builds canonical metrics, SQL models, and visual dashboards. Ensures \
                      definitions are consistent."
                .into(),
            system_prompt: "You are D-11 DATA.ANALYST. Create metrics with clear grain and \
                            dimensions. Ship validated SQL."
                .into(),
            user_prompt: "Define product adoption metrics with weekly cohorts and retention. \
                          Provide datasets and charts."
                .into(),
            context: "Warehouse: Postgres/Neon. Tools: dbt-like modeling, SQLFluff. Charts via \
                      Vega."
                .into(),
            app_context: "Runs notebooks and publishes dashboards on commit.".into(),
            endpoints: vec![endpoint("https://data.example.com/metrics", "GET /metrics")],
            created_at: ts(2025, 6, 28, 9, 0),
            updated_at: ts(2025, 8, 7, 16, 45),
        },
        AgentRecord {
            id: "agt-devops-ci".into(),
            name: "O-07 DEVOPS.CI".into(),
            role: "Engineer • CI/CD".into(),
            category: Category::DevOps,
            version: "2.4.1".into(),
            access: Access::Paid,
            tags: vec!["Pipelines".into(), "Policies".into(), "Caching".into()],
            summary: "Authoritatively defines pipelines, caching, and policies. Optimizes build \
                      graph and secrets hygiene."
                .into(),
            system_prompt: "You are O-07 DEVOPS.CI. Prefer reproducibility, deterministic \
                            builds, and fast feedback."
                .into(),
            user_prompt: "Improve build reliability and reduce cold start time by 40% across \
                          monorepo services."
                .into(),
            context: "Platforms: Vercel, GitHub Actions. Use OpenID Connect for cloud creds. \
                      Cache via remote store."
                .into(),
            app_context: "Runs policy checks and annotates PRs with actionable guidance.".into(),
            endpoints: vec![
                endpoint("https://ci.example.com/pipelines", "GET /pipelines"),
                endpoint("https://ci.example.com/run", "POST /run"),
            ],
            created_at: ts(2025, 5, 11, 12, 20),
            updated_at: ts(2025, 8, 9, 10, 30),
        },
        AgentRecord {
            id: "agt-security-audit".into(),
            name: "X-03 SECURITY.AUDIT".into(),
            role: "Engineer • AppSec".into(),
            category: Category::Security,
            version: "0.8.3".into(),
            access: Access::Free,
            tags: vec!["SAST".into(), "DAST".into(), "SBOM".into()],
            summary: "Performs static/dynamic analysis and SBOM validation. Flags supply-chain \
                      risks and insecure defaults."
                .into(),
            system_prompt: "You are X-03 SECURITY.AUDIT. Provide actionable findings with \
                            proofs and remediations."
                .into(),
            user_prompt: "Audit a Next.js app for common vulnerabilities, focus on SSRF, XSS, \
                          and dependency risks."
                .into(),
            context: "Tooling: Semgrep, Trivy, OPA. Outputs SARIF for CI.".into(),
            app_context: "Automated security gate for critical repos.".into(),
            endpoints: vec![endpoint("https://sec.example.com/scans", "GET /scans")],
            created_at: ts(2025, 4, 1, 8, 0),
            updated_at: ts(2025, 7, 15, 13, 12),
        },
    ]
}

pub(super) fn vendors() -> Vec<Vendor> {
    let vendor = |id: &str, name: &str, homepage: &str| Vendor {
        id: id.to_string(),
        name: name.to_string(),
        homepage: Some(homepage.to_string()),
        created_at: None,
    };
    vec![
        vendor("vndr://anthropic", "Anthropic", "https://www.anthropic.com"),
        vendor("vndr://openai", "OpenAI", "https://openai.com"),
        vendor("vndr://google", "Google", "https://ai.google"),
        vendor("vndr://github", "GitHub", "https://github.com"),
        vendor("vndr://meta", "Meta", "https://meta.ai"),
        vendor("vndr://mistral", "Mistral", "https://mistral.ai"),
        vendor("vndr://xai", "xAI", "https://x.ai"),
        vendor("vndr://aws", "AWS", "https://aws.amazon.com"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn system(
    id: &str,
    vendor_id: &str,
    name: &str,
    title: &str,
    version: &str,
    interfaces: Vec<Interface>,
    hosting: Vec<Hosting>,
    license: &str,
    created_at: DateTime<Utc>,
) -> System {
    System {
        id: id.to_string(),
        vendor_id: vendor_id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        version: version.to_string(),
        interfaces,
        hosting,
        license: Some(license.to_string()),
        deprecated: false,
        created_at: Some(created_at),
    }
}

pub(super) fn systems() -> Vec<System> {
    use Hosting::{Cloud, Local};
    use Interface::{Api, Cli, Editor};
    vec![
        system(
            "sys://anthropic/claude-code@1.2.0",
            "vndr://anthropic",
            "claude-code",
            "Claude Code",
            "1.2.0",
            vec![Editor, Cli, Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 6, 20, 10, 0),
        ),
        system(
            "sys://openai/gpt-cursor@0.9.0",
            "vndr://openai",
            "gpt-cursor",
            "GPT Cursor",
            "0.9.0",
            vec![Editor, Cli, Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 5, 18, 8, 0),
        ),
        system(
            "sys://google/gemini-cli@2.3.1",
            "vndr://google",
            "gemini-cli",
            "Gemini CLI",
            "2.3.1",
            vec![Cli, Api],
            vec![Local, Cloud],
            "Apache-2.0",
            ts(2025, 5, 1, 12, 0),
        ),
        system(
            "sys://github/copilot@3.0.0",
            "vndr://github",
            "copilot",
            "GitHub Copilot",
            "3.0.0",
            vec![Editor, Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 4, 2, 12, 0),
        ),
        system(
            "sys://openai/amp@1.1.0",
            "vndr://openai",
            "amp",
            "AMP",
            "1.1.0",
            vec![Cli, Api],
            vec![Local, Cloud],
            "Commercial",
            ts(2025, 7, 12, 9, 0),
        ),
        system(
            "sys://meta/llama-agent@1.0.0",
            "vndr://meta",
            "llama-agent",
            "Llama Agent",
            "1.0.0",
            vec![Cli, Api],
            vec![Local, Cloud],
            "Open Source",
            ts(2025, 8, 15, 10, 0),
        ),
        system(
            "sys://mistral/mistral-agent@2.0.0",
            "vndr://mistral",
            "mistral-agent",
            "Mistral Agent",
            "2.0.0",
            vec![Cli, Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 9, 1, 8, 0),
        ),
        system(
            "sys://xai/grok-agent@1.5.0",
            "vndr://xai",
            "grok-agent",
            "Grok Agent",
            "1.5.0",
            vec![Editor, Cli, Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 7, 20, 14, 0),
        ),
        system(
            "sys://aws/bedrock-agents@1.0.0",
            "vndr://aws",
            "bedrock-agents",
            "Bedrock Agents",
            "1.0.0",
            vec![Api],
            vec![Cloud],
            "Commercial",
            ts(2025, 6, 10, 9, 0),
        ),
    ]
}

fn template(
    id: &str,
    name: &str,
    version: &str,
    title: &str,
    tags: &[&str],
    manifest: serde_json::Value,
    created_at: DateTime<Utc>,
) -> Template {
    Template {
        id: id.to_string(),
        namespace: "agentlist".to_string(),
        name: name.to_string(),
        version: version.to_string(),
        vendor_id: None,
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        manifest,
        readme_md: None,
        created_at: Some(created_at),
    }
}

pub(super) fn templates() -> Vec<Template> {
    vec![
        template(
            "agt://agentlist/frontend-specialist@1.4.2",
            "frontend-specialist",
            "1.4.2",
            "Frontend Specialist",
            &["SSR", "RSC", "UI-Gen"],
            json!({"runtime": "node", "framework": "nextjs"}),
            ts(2025, 8, 1, 12, 0),
        ),
        template(
            "agt://agentlist/security-audit@0.8.3",
            "security-audit",
            "0.8.3",
            "Security Audit",
            &["SAST", "DAST"],
            json!({"tools": ["semgrep", "trivy"]}),
            ts(2025, 7, 15, 13, 12),
        ),
        template(
            "agt://agentlist/fullstack-dev@2.1.0",
            "fullstack-dev",
            "2.1.0",
            "Fullstack Developer",
            &["React", "Node", "PostgreSQL"],
            json!({"runtime": "node", "framework": "nextjs"}),
            ts(2025, 9, 10, 10, 0),
        ),
        template(
            "agt://agentlist/data-analyst@1.2.0",
            "data-analyst",
            "1.2.0",
            "Data Analyst",
            &["SQL", "Python", "Visualization"],
            json!({"runtime": "python", "tools": ["pandas", "matplotlib"]}),
            ts(2025, 8, 20, 15, 0),
        ),
        template(
            "agt://agentlist/devops-engineer@1.0.0",
            "devops-engineer",
            "1.0.0",
            "DevOps Engineer",
            &["Kubernetes", "Terraform", "CI/CD"],
            json!({"tools": ["kubectl", "terraform", "github-actions"]}),
            ts(2025, 9, 5, 9, 0),
        ),
    ]
}

pub(super) fn categories() -> Vec<CategoryInfo> {
    let category = |id: &str, name: &str, description: &str, tags: &[&str]| CategoryInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    vec![
        category(
            "frontend",
            "Frontend",
            "UI generation, SSR, component specs",
            &["ui", "react", "nextjs", "css"],
        ),
        category(
            "backend",
            "Backend",
            "API design, auth, caching",
            &["api", "rest", "graphql", "auth"],
        ),
        category(
            "devops",
            "DevOps",
            "Pipelines, policies, infrastructure",
            &["ci", "cd", "kubernetes", "terraform"],
        ),
        category(
            "security",
            "Security",
            "SAST, DAST, vulnerability scanning",
            &["audit", "sast", "dast", "sbom"],
        ),
        category(
            "data",
            "Data",
            "SQL models, metrics, dashboards",
            &["sql", "analytics", "bi", "etl"],
        ),
        category(
            "systems",
            "Systems",
            "Performance, profiling, optimization",
            &["performance", "profiling", "optimization"],
        ),
    ]
}
