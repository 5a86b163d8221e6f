//! Agent HQ: a curated, in-memory directory of AI agent templates,
//! systems, and vendors.
//!
//! The two load-bearing pieces are [`query`] (filter/sort/search over the
//! immutable catalog) and [`overlay`] (selection lifecycle plus pure panel
//! placement geometry). Everything else ([`catalog`] seed data,
//! [`settings`], [`sound`], [`clipboard`], [`auth`]) is the supporting
//! cast those two are wired to.

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod model;
pub mod overlay;
pub mod query;
pub mod settings;
pub mod sound;
pub mod trace;

pub use cli::{Cli, run};
