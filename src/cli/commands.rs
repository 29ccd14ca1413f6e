//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rptodo")]
#[command(about = "Personal to-do list manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the to-do database
    Init {
        /// Database location: a file path for json, a connection string for mongodb
        #[arg(short = 'd', long)]
        db_path: Option<String>,

        /// Database type (json, mongodb)
        #[arg(short = 't', long, default_value = "json")]
        db_type: String,
    },

    /// Add a new to-do with a DESCRIPTION
    Add {
        /// Words of the description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Priority of the to-do
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        priority: i64,
    },

    /// List all to-dos
    List,

    /// Complete a to-do by setting it as done using its TODO_ID
    Complete {
        #[arg(allow_negative_numbers = true)]
        todo_id: i64,
    },

    /// Remove a to-do using its TODO_ID
    Remove {
        #[arg(allow_negative_numbers = true)]
        todo_id: i64,

        /// Remove without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all to-dos
    Clear {
        /// Remove without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Serve the to-do list over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8000")]
        addr: String,
    },
}
