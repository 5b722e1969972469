//! Command runners shared by the CLI entry point.

use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use roster_cache::FileCache;
use roster_core::{CacheBridge, Session, SessionConfig};
use roster_fetch::HttpSource;
use roster_model::RecordId;

use crate::cli::{BrowseArgs, Cli, DeleteArgs, EditArgs, ListArgs};
use roster_cli::render::render_page;

/// Default page size for commands that don't take one.
const DEFAULT_PAGE_SIZE: usize = 5;

/// Default debounce interval in milliseconds.
const DEFAULT_DEBOUNCE_MS: u64 = 1500;

/// Build a hydrated session from the global CLI options.
fn build_session(cli: &Cli, page_size: usize, debounce_ms: u64) -> Result<Session> {
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("ROSTER_ENDPOINT").ok());
    let source = HttpSource::new(endpoint).context("build http source")?;

    let bridge: Option<Box<dyn CacheBridge>> = if cli.no_cache {
        None
    } else {
        Some(Box::new(FileCache::new(cli.cache_file.clone())))
    };

    let config = SessionConfig {
        page_size: NonZeroUsize::new(page_size).context("page size must be at least 1")?,
        debounce: Duration::from_millis(debounce_ms),
    };

    let mut session = Session::new(config, bridge, Box::new(source));
    session.hydrate();
    Ok(session)
}

pub fn run_fetch(cli: &Cli) -> Result<()> {
    let session = build_session(cli, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE_MS)?;
    info!(count = session.records().len(), "roster ready");
    println!("{} records loaded", session.records().len());
    Ok(())
}

pub fn run_list(cli: &Cli, args: &ListArgs, ansi: bool) -> Result<()> {
    let mut session = build_session(cli, args.page_size, DEFAULT_DEBOUNCE_MS)?;
    session.set_search(args.search.clone());
    session.set_filter(args.filter.into());
    session.set_sort(args.sort.into());
    session.go_to_page(args.page);

    let view = session.current_page();
    println!("{}", render_page(&view, None, ansi));
    Ok(())
}

pub fn run_edit(cli: &Cli, args: &EditArgs) -> Result<()> {
    let mut session = build_session(cli, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE_MS)?;
    let id = RecordId::new(args.id);

    session.edit(id).context("open edit buffer")?;
    if let Some(name) = &args.name {
        session.edit_name(name.clone()).context("buffer name")?;
    }
    if let Some(email) = &args.email {
        session.edit_email(email.clone()).context("buffer email")?;
    }
    session.save().context("save record")?;

    println!("record {id} updated");
    Ok(())
}

pub fn run_delete(cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let mut session = build_session(cli, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE_MS)?;
    let id = RecordId::new(args.id);

    if session.records().iter().all(|record| record.id != id) {
        bail!("no record with id {id}");
    }
    session.delete(id);

    println!("record {id} deleted");
    Ok(())
}

pub fn run_browse(cli: &Cli, args: &BrowseArgs, ansi: bool) -> Result<()> {
    let mut session = build_session(cli, args.page_size, args.debounce_ms)?;
    crate::browse::run_browse(&mut session, ansi)
}
