use super::render::{
    print_messages, render_detail, render_json, render_stats, render_table, render_types,
};
use super::setup::{Cli, SessionCommand};
use super::shell::{run_batch, run_interactive};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use doctrack::api::{CmdMessage, DocTrackApi, DocumentFilter, TypeFilter};
use doctrack::config::{Columns, TrackerConfig};
use doctrack::error::Result;
use doctrack::model::{NewDocument, NO_EXPIRY_SENTINEL};
use doctrack::store::memory::InMemoryStore;
use doctrack::store::StoreEvent;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct AppContext {
    pub api: DocTrackApi<InMemoryStore>,
    pub columns: Columns,
    /// Session filter applied by `list` when it gets no flags of its own
    pub filter: DocumentFilter,
    changed: Rc<Cell<bool>>,
}

impl AppContext {
    /// Returns whether the store changed since the last call, and resets the flag.
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if cli.commands.is_empty() {
        run_interactive(&mut ctx)
    } else {
        run_batch(&mut ctx, &cli.commands)
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "doctrack=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "doctrack", "doctrack").map(|d| d.config_dir().to_path_buf())
    })
}

pub fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir(cli) {
        Some(dir) => TrackerConfig::load(&dir)?,
        None => {
            warn!("could not determine a config directory, using defaults");
            TrackerConfig::default()
        }
    };

    let columns = config.columns;
    let seed = config.seed_samples && !cli.empty;

    let mut api = DocTrackApi::new(InMemoryStore::new(), config);
    if let Some(today) = cli.today {
        api = api.with_today(today);
    }
    if seed {
        api.seed_samples()?;
    }

    // Registered after seeding so the starter set does not count as a change
    let changed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&changed);
    api.subscribe(Box::new(move |_: &StoreEvent| flag.set(true)));

    debug!(today = %api.today(), revision = api.revision(), "session ready");

    Ok(AppContext {
        api,
        columns,
        filter: DocumentFilter::default(),
        changed,
    })
}

pub fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Add {
            name,
            by,
            expires,
            doc_type,
            summary,
            file,
        } => handle_add(ctx, name, by, expires, doc_type, summary, file)?,
        SessionCommand::List {
            doc_type,
            search,
            json,
        } => handle_list(ctx, doc_type, search, json)?,
        SessionCommand::Filter {
            doc_type,
            search,
            clear,
        } => handle_filter(ctx, doc_type, search, clear),
        SessionCommand::View { id } => handle_view(ctx, &id)?,
        SessionCommand::Edit { id } => handle_edit(ctx, &id)?,
        SessionCommand::Delete { id } => handle_delete(ctx, &id)?,
        SessionCommand::Stats => handle_stats(ctx)?,
        SessionCommand::Types { categories } => handle_types(ctx, categories)?,
        SessionCommand::Columns { names } => handle_columns(ctx, &names),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_add(
    ctx: &mut AppContext,
    name: Vec<String>,
    by: Option<String>,
    expires: Option<String>,
    doc_type: Option<String>,
    summary: Option<String>,
    file: Option<String>,
) -> Result<()> {
    let expires = expires.unwrap_or_default();
    let expires = if expires.trim().eq_ignore_ascii_case("never") {
        NO_EXPIRY_SENTINEL.to_string()
    } else {
        expires
    };

    let mut input = NewDocument::new(name.join(" "), by.unwrap_or_default(), expires);
    if let Some(doc_type) = doc_type {
        input = input.with_type(doc_type);
    }
    if let Some(summary) = summary {
        input = input.with_summary(summary);
    }
    if let Some(file) = file {
        input = input.with_file(file);
    }

    let result = ctx.api.add_document(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    doc_type: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = if doc_type.is_none() && search.is_none() {
        ctx.filter.clone()
    } else {
        DocumentFilter::new(
            doc_type.as_deref().unwrap_or_default(),
            search.as_deref().unwrap_or_default(),
        )
    };

    let result = ctx.api.list_documents(filter)?;
    if json {
        print!("{}", render_json(&result.listed_documents)?);
    } else {
        print!("{}", render_table(&result.listed_documents, &ctx.columns));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(
    ctx: &mut AppContext,
    doc_type: Option<String>,
    search: Option<String>,
    clear: bool,
) {
    if clear {
        ctx.filter = DocumentFilter::default();
    } else {
        let current_type = match &ctx.filter.doc_type {
            TypeFilter::All => String::new(),
            TypeFilter::Only(t) => t.to_string(),
        };
        let current_search = ctx.filter.search_term.clone().unwrap_or_default();
        ctx.filter = DocumentFilter::new(
            doc_type.as_deref().unwrap_or(&current_type),
            search.as_deref().unwrap_or(&current_search),
        );
    }

    let type_label = match &ctx.filter.doc_type {
        TypeFilter::All => "All".to_string(),
        TypeFilter::Only(t) => t.to_string(),
    };
    let search_label = ctx.filter.search_term.as_deref().unwrap_or("-");
    println!(
        "{}",
        format!("Filter: type={} search={}", type_label, search_label).dimmed()
    );
}

fn handle_view(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_document(id)?;
    let status = result.listed_documents.first().map(|v| v.status);
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail, status));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.edit_document(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_document(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    if let Some(stats) = ctx.api.stats()?.stats {
        print!("{}", render_stats(&stats));
    }
    Ok(())
}

fn handle_types(ctx: &mut AppContext, categories: bool) -> Result<()> {
    let types: Vec<String> = if categories {
        ctx.api
            .category_choices()
            .iter()
            .map(|t| t.to_string())
            .collect()
    } else {
        ctx.api.document_types()?.document_types
    };
    print!("{}", render_types(&types));
    Ok(())
}

fn handle_columns(ctx: &mut AppContext, names: &[String]) {
    let warnings: Vec<CmdMessage> = names
        .iter()
        .filter(|name| !ctx.columns.toggle(name))
        .map(|name| {
            CmdMessage::warning(format!(
                "Unknown column '{}' (expected type, expiry, status, by)",
                name
            ))
        })
        .collect();
    print_messages(&warnings);

    let c = &ctx.columns;
    let state = [
        ("type", c.doc_type),
        ("expiry", c.expiry_date),
        ("status", c.status),
        ("by", c.updated_by),
    ]
    .iter()
    .map(|(name, on)| format!("{}={}", name, if *on { "on" } else { "off" }))
    .collect::<Vec<_>>()
    .join(" ");
    println!("{}", format!("Columns: {}", state).dimmed());
}
