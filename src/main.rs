use chrono::Local;
use clap::Parser;
use diary::application::{init::init, ConfigService, EntryService, SaveOutcome};
use diary::cli::{format_entry, format_entry_list, Cli, Commands, Shell};
use diary::domain::EntryRef;
use diary::error::Result;
use diary::infrastructure::{ExternalEditor, FileSystemJournal, JournalRepository};
use diary::logging::init_logging;
use std::io::{self, BufRead, Write};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config = init(&path)?;
            println!("Initialized diary journal at {}", path.display());
            println!("Entries file: {}", config.data_file);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let journal = FileSystemJournal::discover()?;
            let service = EntryService::open(&journal)?;
            println!("{}", format_entry_list(&service.list(limit)).trim_end());
            Ok(())
        }
        Some(Commands::Show { reference }) => {
            let journal = FileSystemJournal::discover()?;
            let service = EntryService::open(&journal)?;
            let (id, entry) = service.show(&EntryRef::parse(&reference)?)?;
            print!("{}", format_entry(&id, entry));
            Ok(())
        }
        Some(Commands::Add { title, content }) => {
            let journal = FileSystemJournal::discover()?;
            let mut service = EntryService::open(&journal)?;
            let content = match content {
                Some(content) => content,
                None => editor_for(&journal)?.compose("")?,
            };

            let outcome = service.add(&title, &content, Local::now())?;
            report_saved(&service, &outcome);
            Ok(())
        }
        Some(Commands::Edit {
            reference,
            title,
            content,
        }) => {
            let journal = FileSystemJournal::discover()?;
            let mut service = EntryService::open(&journal)?;
            let reference = EntryRef::parse(&reference)?;

            let content = match (&title, content) {
                (None, None) => {
                    let (_, entry) = service.show(&reference)?;
                    let current = entry.content.clone();
                    Some(editor_for(&journal)?.compose(&current)?)
                }
                (_, content) => content,
            };

            let outcome =
                service.edit(&reference, title.as_deref(), content.as_deref(), Local::now())?;
            report_saved(&service, &outcome);
            Ok(())
        }
        Some(Commands::Delete { reference, yes }) => {
            let journal = FileSystemJournal::discover()?;
            let mut service = EntryService::open(&journal)?;
            let reference = EntryRef::parse(&reference)?;

            if !yes {
                let (_, entry) = service.show(&reference)?;
                let prompt = format!(
                    "Are you sure you want to delete '{}'? [y/N] ",
                    entry.short_title()
                );
                if !confirm(&prompt)? {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            let (id, _) = service.delete(&reference)?;
            println!("{} ({})", service.status(), id);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let journal = FileSystemJournal::discover()?;
            let service = ConfigService::new(journal);

            if list {
                let config = service.list()?;
                println!("data_file = {}", config.data_file);
                println!("editor = {}", config.editor);
                println!(
                    "on_corrupt = {}",
                    format!("{:?}", config.on_corrupt).to_lowercase()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: diary config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, editor, on_corrupt, created");
                Ok(())
            }
        }
        Some(Commands::Shell) | None => {
            let journal = FileSystemJournal::discover()?;
            let store = journal.open_store()?;
            let editor = editor_for(&journal)?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(store, editor, stdin.lock(), stdout.lock());
            shell.run()
        }
    }
}

fn editor_for(journal: &FileSystemJournal) -> Result<ExternalEditor> {
    let config = journal.load_config()?;
    Ok(ExternalEditor::new(config.get_editor()))
}

fn report_saved(service: &EntryService, outcome: &SaveOutcome) {
    println!("{} ({})", service.status(), outcome.id());
    println!("Diary entry saved successfully!");
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
