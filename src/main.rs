use clap::Parser;
use rptodo::application::{init_app, Todoer};
use rptodo::cli::{
    confirm_stdin, format_added, format_completed, format_removed, format_todo_list, Cli,
    Commands,
};
use rptodo::domain::StorageKind;
use rptodo::error::{ErrorCode, Result, TodoError};
use rptodo::infrastructure::{logging, open_store, Config, TodoStore};
use std::str::FromStr;

fn main() {
    logging::init();

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

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { db_path, db_type } => {
            let kind = StorageKind::from_str(&db_type).map_err(TodoError::Config)?;
            let database = db_path.unwrap_or_else(|| Config::default_database(kind));
            let config_dir = Config::default_dir()?;

            init_app(&config_dir, &database, kind).into_result("Initializing the to-do database")?;
            println!("The to-do database is {}", database);
            Ok(())
        }
        Commands::Add {
            description,
            priority,
        } => {
            let todoer = get_todoer()?;
            if let Some(todo) = todoer.add(&description, priority).into_result("Adding to-do")? {
                println!("{}", format_added(&todo));
            }
            Ok(())
        }
        Commands::List => {
            let todo_list = get_todoer()?
                .get_todo_list()
                .into_result("Reading to-do list")?;
            println!("{}", format_todo_list(&todo_list));
            Ok(())
        }
        Commands::Complete { todo_id } => {
            let todoer = get_todoer()?;
            if let Some(todo) = todoer
                .set_done(todo_id)
                .into_result("Completing to-do")?
            {
                println!("{}", format_completed(todo_id, &todo));
            }
            Ok(())
        }
        Commands::Remove { todo_id, force } => {
            let todoer = get_todoer()?;

            if !force {
                let todo_list = todoer.get_todo_list().into_result("Reading to-do list")?;
                let Some(todo) = usize::try_from(todo_id)
                    .ok()
                    .and_then(|id| id.checked_sub(1))
                    .and_then(|index| todo_list.get(index))
                else {
                    return ErrorCode::IdError.into_result("Removing to-do");
                };

                let question = format!("Delete to-do # {}: {}?", todo_id, todo.description);
                if !confirm_stdin(&question)? {
                    println!("Operation canceled");
                    return Ok(());
                }
            }

            if let Some(todo) = todoer.remove(todo_id).into_result("Removing to-do")? {
                println!("{}", format_removed(todo_id, &todo));
            }
            Ok(())
        }
        Commands::Clear { force } => {
            let todoer = get_todoer()?;

            if !force && !confirm_stdin("Delete all to-dos?")? {
                println!("Operation canceled");
                return Ok(());
            }

            todoer.remove_all().into_result("Removing to-dos")?;
            println!("All to-dos were removed");
            Ok(())
        }
        Commands::Serve { addr } => serve(&addr, get_todoer()?),
    }
}

/// Open the configured backend and wrap it in the service
fn get_todoer() -> Result<Todoer<Box<dyn TodoStore>>> {
    let config = Config::load()?;
    Ok(Todoer::new(open_store(&config)?))
}

#[cfg(feature = "http")]
fn serve(addr: &str, todoer: Todoer<Box<dyn TodoStore>>) -> Result<()> {
    rptodo::http::serve(addr, todoer)
}

#[cfg(not(feature = "http"))]
fn serve(_addr: &str, _todoer: Todoer<Box<dyn TodoStore>>) -> Result<()> {
    Err(TodoError::FeatureNotEnabled("http".to_string()))
}
