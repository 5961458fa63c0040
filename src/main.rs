use clap::Parser;
use memoir::application::{
    init, list_entries, show_entry, AddEntryService, DeleteEntryService, ExportService,
    ImportService, ThemeService,
};
use memoir::cli::{confirm, format_entry, format_entry_list, Cli, Commands};
use memoir::error::MemoirError;
use memoir::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MemoirError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Add { text }) => {
            let repo = FileSystemRepository::discover()?;
            let entry = AddEntryService::new(repo).execute(&text)?;
            println!("Added entry {}", entry.id);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let entries = list_entries(&repo, limit)?;
            let rendered = format_entry_list(&entries);
            if entries.is_empty() {
                println!("{}", rendered);
            } else {
                print!("{}", rendered);
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let repo = FileSystemRepository::discover()?;
            let entry = show_entry(&repo, &id)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let repo = FileSystemRepository::discover()?;
            if DeleteEntryService::new(repo).execute(&id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id '{}'; nothing deleted", id);
            }
            Ok(())
        }
        Some(Commands::Theme { toggle }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ThemeService::new(repo);
            if toggle {
                let theme = service.toggle()?;
                println!("Theme set to {}", theme);
            } else {
                println!("{}", service.current()?);
            }
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let repo = FileSystemRepository::discover()?;
            let (path, count) = ExportService::new(repo).execute(output.as_deref())?;
            println!("Exported {} entries to {}", count, path.display());
            Ok(())
        }
        Some(Commands::Import { file, yes }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ImportService::new(repo);

            let pending = service.prepare(&file)?;

            let confirmed = yes
                || confirm(&format!(
                    "This will replace your entire journal with {} entries from {}. Continue?",
                    pending.entry_count(),
                    file.display()
                ))?;

            if !confirmed {
                println!("Import cancelled. Journal left unchanged.");
                return Ok(());
            }

            let count = service.apply(pending)?;
            println!("Imported {} entries from {}", count, file.display());
            Ok(())
        }
        None => {
            println!("memoir - Personal journal for the terminal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
