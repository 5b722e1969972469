//! Interactive browsing loop.
//!
//! Each input line is one event. `/text` feeds a keystroke into the
//! debouncer; the commit happens on a later event once the quiet
//! interval has elapsed, so pressing Enter on an empty line after a
//! pause applies the pending search. Everything else maps directly onto
//! a session intent.

use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::Result;

use roster_core::Session;
use roster_model::{RecordId, SortOrder, WebsiteFilter};

use roster_cli::render::render_page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Filter(WebsiteFilter),
    Sort(SortOrder),
    Next,
    Prev,
    Page(usize),
    Edit(u64),
    Name(String),
    Email(String),
    Save,
    Cancel,
    Delete(u64),
    Help,
    Refresh,
    Quit,
}

/// Parse one input line into a command.
///
/// Empty lines are a refresh (they advance the debounce clock without
/// other effects). Unknown words parse to `None` and are reported.
pub fn parse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Some(BrowseCommand::Refresh);
    }
    if let Some(text) = line.strip_prefix('/') {
        return Some(BrowseCommand::Search(text.to_string()));
    }
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "filter" | "f" => rest.parse::<WebsiteFilter>().ok().map(BrowseCommand::Filter),
        "sort" | "s" => rest.parse::<SortOrder>().ok().map(BrowseCommand::Sort),
        "next" | "n" => Some(BrowseCommand::Next),
        "prev" | "p" => Some(BrowseCommand::Prev),
        "page" => rest.parse().ok().map(BrowseCommand::Page),
        "edit" | "e" => rest.parse().ok().map(BrowseCommand::Edit),
        "name" => Some(BrowseCommand::Name(rest.to_string())),
        "email" => Some(BrowseCommand::Email(rest.to_string())),
        "save" => Some(BrowseCommand::Save),
        "cancel" => Some(BrowseCommand::Cancel),
        "delete" | "d" => rest.parse().ok().map(BrowseCommand::Delete),
        "help" | "?" => Some(BrowseCommand::Help),
        "quit" | "q" => Some(BrowseCommand::Quit),
        _ => None,
    }
}

const HELP: &str = "\
commands:
  /text          type into the search box (commits after a quiet pause)
  filter <f>     website filter: all, org, net, info, biz
  sort <o>       sort order: none, asc, desc
  next, prev     change page
  page <n>       jump to page n
  edit <id>      start editing a row
  name <value>   change the buffered name
  email <value>  change the buffered email
  save, cancel   finish or abandon the edit
  delete <id>    delete a row
  <enter>        refresh (applies a pending search)
  quit           leave";

/// Run the interactive loop over stdin until `quit` or EOF.
pub fn run_browse(session: &mut Session, ansi: bool) -> Result<()> {
    println!("{HELP}");
    show(session, ansi);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        let committed = session.tick(now);

        let Some(command) = parse_command(&line) else {
            eprintln!("unknown command: {line} (try: help)");
            continue;
        };
        match command {
            BrowseCommand::Search(text) => {
                session.search_input(&text, now);
                println!("(search pending; press Enter after a pause to apply)");
                continue;
            }
            BrowseCommand::Filter(filter) => session.set_filter(filter),
            BrowseCommand::Sort(sort) => session.set_sort(sort),
            BrowseCommand::Next => session.next_page(),
            BrowseCommand::Prev => session.prev_page(),
            BrowseCommand::Page(page) => session.go_to_page(page),
            BrowseCommand::Edit(id) => {
                if let Err(error) = session.edit(RecordId::new(id)) {
                    eprintln!("error: {error}");
                }
            }
            BrowseCommand::Name(value) => {
                if let Err(error) = session.edit_name(value) {
                    eprintln!("error: {error}");
                }
            }
            BrowseCommand::Email(value) => {
                if let Err(error) = session.edit_email(value) {
                    eprintln!("error: {error}");
                }
            }
            BrowseCommand::Save => {
                if let Err(error) = session.save() {
                    eprintln!("error: {error}");
                }
            }
            BrowseCommand::Cancel => session.cancel_edit(),
            BrowseCommand::Delete(id) => session.delete(RecordId::new(id)),
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            }
            BrowseCommand::Refresh => {
                if !committed && session.has_pending_search() {
                    println!("(search still pending)");
                }
            }
            BrowseCommand::Quit => break,
        }
        show(session, ansi);
    }

    session.dispose();
    Ok(())
}

fn show(session: &mut Session, ansi: bool) {
    let view = session.current_page();
    let buffer = session.edit_buffer().cloned();
    println!("{}", render_page(&view, buffer.as_ref(), ansi));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_lines() {
        assert_eq!(
            parse_command("/leanne"),
            Some(BrowseCommand::Search("leanne".to_string()))
        );
        assert_eq!(parse_command("/"), Some(BrowseCommand::Search(String::new())));
    }

    #[test]
    fn test_parse_filter_and_sort() {
        assert_eq!(
            parse_command("filter org"),
            Some(BrowseCommand::Filter(WebsiteFilter::Org))
        );
        assert_eq!(
            parse_command("s desc"),
            Some(BrowseCommand::Sort(SortOrder::Descending))
        );
        assert_eq!(parse_command("filter com"), None);
    }

    #[test]
    fn test_parse_paging_and_mutations() {
        assert_eq!(parse_command("next"), Some(BrowseCommand::Next));
        assert_eq!(parse_command("p"), Some(BrowseCommand::Prev));
        assert_eq!(parse_command("page 3"), Some(BrowseCommand::Page(3)));
        assert_eq!(parse_command("edit 7"), Some(BrowseCommand::Edit(7)));
        assert_eq!(
            parse_command("name Ann Marie"),
            Some(BrowseCommand::Name("Ann Marie".to_string()))
        );
        assert_eq!(parse_command("delete 2"), Some(BrowseCommand::Delete(2)));
        assert_eq!(parse_command("edit seven"), None);
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse_command("   "), Some(BrowseCommand::Refresh));
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command("q"), Some(BrowseCommand::Quit));
    }
}
