use clap::Parser;
use colored::*;
use filmshelf::api::{CmdMessage, ConfigAction, DisplayMovie, FilmshelfApi, MessageLevel, Session};
use filmshelf::config::{default_data_dir, FilmshelfConfig};
use filmshelf::error::{FilmshelfError, Result};
use filmshelf::model::MovieDraft;
use filmshelf::report::format_rating;
use filmshelf::store::fs::{FileAccountStore, FileCatalogStore};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "filmshelf=debug" } else { "filmshelf=warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let mut api = FilmshelfApi::open(data_dir)?;

    match &cli.command {
        Some(Commands::Register { username, password }) => {
            let result = api.register(username, password)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&api, key.clone(), value.clone()),
        Some(Commands::Add {
            title,
            director,
            year,
            rating,
            path,
            categories,
            imdb,
        }) => {
            let draft = MovieDraft::new(title.as_str(), director.as_str(), *year, *rating)
                .with_media_path(path.as_str())
                .with_categories(categories.as_str())
                .with_external_id(imdb.as_str());
            let mut session = login(&api, &cli)?;
            let result = session.add_movie(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::List { search }) => {
            let mut session = login(&api, &cli)?;
            handle_list(&mut session, search.as_deref())
        }
        Some(Commands::Delete { indexes, search }) => {
            let mut session = login(&api, &cli)?;
            let result = session.delete_movies(search.as_deref(), indexes)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let session = login(&api, &cli)?;
            let result = session.export_report(output)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Media { index, search }) => {
            let mut session = login(&api, &cli)?;
            let result = session.media(search.as_deref(), *index)?;
            if let Some(media) = &result.media {
                if let Some(video) = &media.video {
                    println!("video: {}", video.display());
                }
                if let Some(cover) = &media.cover {
                    println!("cover: {}", cover.display());
                }
            }
            print_messages(&result.messages);
            Ok(())
        }
        None => {
            let mut session = login(&api, &cli)?;
            handle_list(&mut session, None)
        }
    }
}

fn login(api: &FilmshelfApi<FileAccountStore>, cli: &Cli) -> Result<Session<FileCatalogStore>> {
    let username = cli
        .user
        .as_deref()
        .ok_or_else(|| FilmshelfError::Api("No user given (use --user or FILMSHELF_USER)".into()))?;
    let password = cli.password.as_deref().unwrap_or("");
    api.login_files(username, password)
}

fn handle_list(session: &mut Session<FileCatalogStore>, search: Option<&str>) -> Result<()> {
    let result = session.list_movies(search)?;
    print_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &FilmshelfApi<FileAccountStore>, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let shown_key = match &action {
        ConfigAction::ShowKey(k) => Some(k.clone()),
        _ => None,
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config, shown_key.as_deref());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config(config: &FilmshelfConfig, only: Option<&str>) {
    for key in FilmshelfConfig::KEYS {
        if only.is_some_and(|k| k != *key) {
            continue;
        }
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
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
const RATING_WIDTH: usize = 6;

fn print_movies(movies: &[DisplayMovie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }

    let idx_width = movies.len().to_string().len() + 2;
    for dm in movies {
        let m = &dm.movie;
        let idx_str = format!("{:>width$}", format!("{}.", dm.index), width = idx_width);

        let mut description = format!("{} ({})", m.title, m.release_year);
        if !m.director.is_empty() {
            description.push_str(&format!(" · {}", m.director));
        }
        if !m.categories.is_empty() {
            description.push_str(&format!(" [{}]", m.categories));
        }

        let available = LINE_WIDTH.saturating_sub(idx_width + 1 + RATING_WIDTH);
        let shown = truncate_to_width(&description, available);
        let padding = available.saturating_sub(shown.width());
        let rating = format!("{:>width$}", format_rating(m.rating), width = RATING_WIDTH);

        println!(
            "{} {}{}{}",
            idx_str.yellow(),
            shown,
            " ".repeat(padding),
            rating.dimmed()
        );
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
