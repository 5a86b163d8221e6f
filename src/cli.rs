//! Command-line surface.
//!
//! The CLI plays the rendering layer's role: it supplies query parameters
//! to the engine, prints ordered views, and dumps spec sheets. `--json`
//! emits machine-readable output on stdout for scripting.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::catalog::{Catalog, Entry};
use crate::clipboard::{BufferClipboard, copy_spec};
use crate::model::AgentRecord;
use crate::query::{CatalogEntry, CategoryFilter, QueryParams, SortKey, query};

#[derive(Debug, Parser)]
#[command(name = "ahq", version, about = "Curated directory of AI agent templates, systems, and vendors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Which record kind `list` searches over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    #[default]
    Agents,
    Systems,
    Templates,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search, filter, and sort catalog records.
    List {
        /// Free-text search, case-insensitive substring match.
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category (agents), vendor id (systems), or namespace
        /// (templates); "all" disables the filter.
        #[arg(short, long, default_value = "all")]
        category: String,
        #[arg(short, long, value_enum, default_value_t = SortKey::Updated)]
        sort: SortKey,
        #[arg(short = 'k', long, value_enum, default_value_t = RecordKind::Agents)]
        kind: RecordKind,
        /// Emit a JSON array instead of the table.
        #[arg(long)]
        json: bool,
    },
    /// Show one record's full spec sheet (any id: agent, vndr://, sys://,
    /// agt://).
    Show {
        id: String,
        /// Emit the raw spec JSON.
        #[arg(long)]
        json: bool,
        /// Copy the spec JSON to the host sink (stdout), for piping into a
        /// clipboard tool.
        #[arg(long)]
        copy: bool,
    },
    /// List the functional categories.
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// List vendors with their systems.
    Vendors {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::get();
    match cli.command {
        Commands::List {
            query: text,
            category,
            sort,
            kind,
            json,
        } => {
            let params = QueryParams {
                text,
                category: CategoryFilter::parse(&category),
                sort,
            };
            match kind {
                RecordKind::Agents => list(&catalog.agents, &params, json),
                RecordKind::Systems => list(&catalog.systems, &params, json),
                RecordKind::Templates => list(&catalog.templates, &params, json),
            }
        }
        Commands::Show { id, json, copy } => show(catalog, &id, json, copy),
        Commands::Categories { json } => categories(catalog, json),
        Commands::Vendors { json } => vendors(catalog, json),
    }
}

fn list<R>(records: &[R], params: &QueryParams, json: bool) -> Result<()>
where
    R: CatalogEntry + serde::Serialize,
{
    let view = query(records, params);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "{} {}",
        style("RESULTS:").dim(),
        style(view.len()).bold()
    );
    if view.is_empty() {
        println!("No records match your filters. Try adjusting your search.");
        return Ok(());
    }
    for record in view {
        println!(
            "{:<44} {:<24} {:<16} v{:<8} {}",
            style(record.id()).cyan(),
            record.name(),
            style(record.classification()).dim(),
            record.version(),
            style(record.access()).dim(),
        );
    }
    Ok(())
}

fn show(catalog: &Catalog, id: &str, json: bool, copy: bool) -> Result<()> {
    let entry = catalog
        .entry_by_id(id)
        .ok_or_else(|| anyhow!("no record with id `{id}`"))?;

    if copy {
        let mut sink = BufferClipboard::default();
        if copy_spec(&entry, &mut sink) {
            if let Some(payload) = sink.contents {
                println!("{payload}");
            }
        }
        return Ok(());
    }
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entry).context("serializing record")?
        );
        return Ok(());
    }

    match entry {
        Entry::Agent(agent) => print_agent(agent),
        Entry::Vendor(vendor) => {
            println!("{} {}", style("VENDOR").dim(), style(&vendor.name).bold());
            if let Some(homepage) = &vendor.homepage {
                println!("  {homepage}");
            }
        }
        Entry::System(system) => {
            println!(
                "{} {} v{}",
                style("SYSTEM").dim(),
                style(&system.title).bold(),
                system.version
            );
            println!("  vendor: {}", system.vendor_id);
            if let Some(license) = &system.license {
                println!("  license: {license}");
            }
        }
        Entry::Template(template) => {
            println!(
                "{} {} v{}",
                style("TEMPLATE").dim(),
                style(&template.title).bold(),
                template.version
            );
            println!("  tags: {}", template.tags.join(", "));
            println!("  manifest: {}", template.manifest);
        }
    }
    Ok(())
}

fn print_agent(agent: &AgentRecord) {
    println!(
        "{} {} • v{}",
        style(&agent.name).bold(),
        style(&agent.role).dim(),
        agent.version
    );
    println!(
        "  {} {} | {} {}",
        style("CATEGORY").dim(),
        agent.category,
        style("ACCESS").dim(),
        agent.access
    );
    println!("  {} {}", style("TAGS").dim(), agent.tags.join(", "));
    println!(
        "  {} {}",
        style("UPDATED").dim(),
        agent.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!("\n  {}\n  {}", style("SUMMARY").dim(), agent.summary);
    println!("\n  {}\n  {}", style("SYSTEM PROMPT").dim(), agent.system_prompt);
    println!("\n  {}\n  {}", style("USER PROMPT").dim(), agent.user_prompt);
    println!("\n  {}\n  {}", style("CONTEXT").dim(), agent.context);
    println!(
        "\n  {}\n  {}",
        style("APPLICATION CONTEXT").dim(),
        agent.app_context
    );
    if !agent.endpoints.is_empty() {
        println!("\n  {}", style("ENDPOINTS").dim());
        for endpoint in &agent.endpoints {
            println!("    {} — {}", endpoint.api, endpoint.url);
        }
    }
}

fn categories(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.categories)?);
        return Ok(());
    }
    for category in &catalog.categories {
        println!(
            "{:<12} {:<10} {}",
            style(&category.id).cyan(),
            category.name,
            style(&category.description).dim()
        );
    }
    Ok(())
}

fn vendors(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.vendors)?);
        return Ok(());
    }
    for vendor in &catalog.vendors {
        println!(
            "{} {}",
            style(&vendor.name).bold(),
            style(vendor.homepage.as_deref().unwrap_or("")).dim()
        );
        for system in catalog.systems_by_vendor(&vendor.id) {
            println!("  {:<20} v{:<8} {}", system.title, system.version, system.id);
        }
    }
    Ok(())
}
