use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jobtrack::api::{
    ApplicationForm, ApplicationUpdate, CmdMessage, ConfigAction, MessageLevel, TrackerApi,
};
use jobtrack::config::TrackConfig;
use jobtrack::error::{Result, TrackError};
use jobtrack::index::ListEntry;
use jobtrack::model::Status;
use jobtrack::query::{Filter, SortBy, Stats};
use jobtrack::store::FsBackend;
use jobtrack::undo::UndoController;
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
mod shell;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TrackerApi<FsBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            company,
            position,
            date,
            status,
            link,
            notes,
        }) => handle_add(&mut ctx, company, position, date, status, link, notes),
        Some(Commands::List {
            status,
            search,
            sort,
        }) => handle_list(&mut ctx, status, search, sort),
        Some(Commands::Show { indexes }) => handle_show(&mut ctx, indexes),
        Some(Commands::Edit {
            index,
            company,
            position,
            date,
            status,
            link,
            notes,
        }) => handle_edit(&mut ctx, index, company, position, date, status, link, notes),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, index, yes),
        Some(Commands::Undo) => handle_undo(&mut ctx),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Export { output }) => handle_export(&mut ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell) => shell::run(&mut ctx.api),
        None => handle_list(&mut ctx, None, None, "date-desc".to_string()),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let config = TrackConfig::load(&data_dir).unwrap_or_default();
    let undo = UndoController::with_window(config.undo_window());
    let api = TrackerApi::new(FsBackend::new(data_dir.clone()), undo, data_dir);
    Ok(AppContext { api })
}

fn resolve_data_dir() -> Result<PathBuf> {
    // JOBTRACK_HOME overrides the OS data directory (primarily for testing)
    if let Some(home) = std::env::var("JOBTRACK_HOME").ok().filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "jobtrack", "jobtrack")
        .ok_or_else(|| TrackError::Api("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    company: String,
    position: String,
    date: Option<String>,
    status: String,
    link: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let form = ApplicationForm {
        company,
        position,
        apply_date: parse_date_or_today(date.as_deref())?,
        status: parse_status(&status)?,
        job_link: link,
        notes,
    };
    let result = ctx.api.add(form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    status: Option<String>,
    search: Option<String>,
    sort: String,
) -> Result<()> {
    let filter = Filter {
        status: match status {
            Some(s) => Some(parse_status(&s)?),
            None => None,
        },
        search,
    };
    let sort = SortBy::from_str(&sort).map_err(TrackError::Api)?;

    let result = ctx.api.list(&filter, sort)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.show(&indexes)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    company: Option<String>,
    position: Option<String>,
    date: Option<String>,
    status: Option<String>,
    link: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let update = ApplicationUpdate {
        company,
        position,
        apply_date: match date {
            Some(d) => Some(parse_date(&d)?),
            None => None,
        },
        status: match status {
            Some(s) => Some(parse_status(&s)?),
            None => None,
        },
        job_link: link,
        notes,
    };
    let result = ctx.api.edit(index, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let result = ctx.api.delete(index, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_undo(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.undo()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("undo-window-secs = {}", config.undo_window_secs);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TrackError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(Utc::now().date_naive()),
    }
}

fn parse_status(s: &str) -> Result<Status> {
    Status::from_str(s).map_err(TrackError::Api)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 15;
const TIME_WIDTH: usize = 14;

fn print_records(entries: &[ListEntry]) {
    if entries.is_empty() {
        println!("No applications found.");
        return;
    }

    for entry in entries {
        let record = &entry.record;
        let idx_str = format!("{}. ", entry.index);
        let text = format!("{}  {}", record.company, record.position);

        let fixed_width = 4 + idx_str.width() + STATUS_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let text_display = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text_display.width());

        // Pad before coloring so escape codes stay out of the width math.
        let status_padded = format!("{:<width$}", record.status.label(), width = STATUS_WIDTH);
        let status_colored = colored_status(record.status, &status_padded);
        let time_colored = format_time_ago(record.apply_date).dimmed();

        println!(
            "    {}{}{}{}{}",
            idx_str,
            text_display,
            " ".repeat(padding),
            status_colored,
            time_colored
        );
    }
}

fn print_full_records(entries: &[ListEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let record = &entry.record;
        println!(
            "{} {}",
            format!("{}.", entry.index).yellow(),
            format!("{} - {}", record.company, record.position).bold()
        );
        println!("--------------------------------");
        println!(
            "Status:  {}",
            colored_status(record.status, record.status.label())
        );
        println!(
            "Applied: {} {}",
            record.apply_date,
            format!("({})", relative_date(record.apply_date)).dimmed()
        );
        if let Some(link) = &record.job_link {
            println!("Link:    {}", link);
        }
        if let Some(notes) = &record.notes {
            println!("Notes:   {}", notes);
        }
    }
}

fn print_stats(stats: &Stats) {
    println!("Total applications: {}", stats.total);
    println!("Active:             {}", stats.active);
    println!("Offers:             {}", stats.offers);
}

fn colored_status(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Offer => text.green(),
        Status::Rejected => text.red(),
        _ => text.yellow(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn relative_date(date: NaiveDate) -> String {
    let duration = Utc::now().date_naive().signed_duration_since(date);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn format_time_ago(date: NaiveDate) -> String {
    // Singular units get an extra space so the unit column lines up.
    let time_str = relative_date(date)
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
