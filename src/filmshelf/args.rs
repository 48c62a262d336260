use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filmshelf", version)]
#[command(about = "Personal movie catalog with plain text storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Account to log in as
    #[arg(short, long, global = true, env = "FILMSHELF_USER")]
    pub user: Option<String>,

    /// Password for --user
    #[arg(short, long, global = true, env = "FILMSHELF_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory holding credentials and catalogs
    #[arg(long, global = true, env = "FILMSHELF_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Register { username: String, password: String },

    /// Add a movie to the catalog
    #[command(alias = "n")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        director: String,

        /// Release year (1888-2100)
        #[arg(long)]
        year: i32,

        /// Rating from 1 to 10
        #[arg(long)]
        rating: f64,

        /// Directory with the video file and cover image
        #[arg(long, default_value = "")]
        path: String,

        #[arg(long, default_value = "")]
        categories: String,

        /// External database id (e.g. tt1375666)
        #[arg(long, default_value = "")]
        imdb: String,
    },

    /// List movies, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match title, director, year or categories
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Delete one or more movies
    #[command(alias = "rm")]
    Delete {
        /// Indexes as shown by `list` (with the same --search)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,

        #[arg(short, long)]
        search: Option<String>,
    },

    /// Write a grouped report of the whole catalog
    Report { output: PathBuf },

    /// Show the video and cover files for a movie
    Media {
        index: usize,

        #[arg(short, long)]
        search: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (hash-passwords, catalog-ext, report-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
