use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use quiz_hub::catalog::{Catalog, load_catalog, save_catalog};
use quiz_hub::identity::Identity;
use quiz_hub::models::QuizDraft;
use quiz_hub::protocol::DEFAULT_PORT;
use quiz_hub::{QuizError, QuizHub};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quiz-hub", version, about = "Browse, take and host multiple-choice quizzes")]
struct Cli {
    /// JSON catalog to load quizzes from (defaults to the built-in samples)
    #[arg(short, long, global = true, env = "QUIZ_HUB_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take quizzes in the terminal (the default)
    Play {
        /// Write logs to this file; the terminal UI owns stdout
        #[arg(long, env = "QUIZ_HUB_LOG_FILE")]
        log_file: Option<PathBuf>,
    },

    /// Host quiz sessions over WebSocket
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "QUIZ_HUB_PORT")]
        port: u16,
    },

    /// Print the quizzes matching a search
    List {
        /// Case-insensitive text to look for in titles and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a quiz from a JSON draft to the catalog file
    Create {
        /// Draft with title, description and questions
        #[arg(long)]
        draft: PathBuf,

        /// Author email; the quiz is credited to "Anonymous" without one
        #[arg(long, env = "QUIZ_HUB_EMAIL")]
        email: Option<String>,

        #[arg(long, env = "QUIZ_HUB_PASSWORD", requires = "email")]
        password: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { log_file: None });

    let result = match command {
        Commands::Play { log_file } => init_file_logging(log_file.as_deref())
            .and_then(|()| play(cli.catalog.as_deref())),
        Commands::Serve { port } => {
            init_logging();
            serve(cli.catalog.as_deref(), port)
        }
        Commands::List { search, json } => {
            init_logging();
            list(cli.catalog.as_deref(), &search, json)
        }
        Commands::Create {
            draft,
            email,
            password,
        } => {
            init_logging();
            create(cli.catalog.as_deref(), &draft, email, password)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_hub=info"))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The player draws on stdout, so logs only go to a file when asked.
fn init_file_logging(path: Option<&Path>) -> Result<(), QuizError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| QuizError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn open_catalog(path: Option<&Path>) -> Result<Catalog, QuizError> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(Catalog::seeded()),
    }
}

fn play(catalog: Option<&Path>) -> Result<(), QuizError> {
    QuizHub::new(open_catalog(catalog)?).run()
}

fn serve(catalog: Option<&Path>, port: u16) -> Result<(), QuizError> {
    let catalog = open_catalog(catalog)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(quiz_hub::server::run(port, catalog))
}

fn list(catalog: Option<&Path>, search: &str, json: bool) -> Result<(), QuizError> {
    let catalog = open_catalog(catalog)?;
    let summaries = catalog.summaries(search);

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No quizzes found");
        return Ok(());
    }
    for summary in &summaries {
        println!(
            "{}  {}  ({} questions, ~{} min, by {})",
            summary.id,
            summary.title,
            summary.question_count,
            summary.estimated_minutes,
            summary.created_by
        );
        println!("    {}", summary.description);
    }
    Ok(())
}

fn create(
    catalog_path: Option<&Path>,
    draft_path: &Path,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), QuizError> {
    let Some(catalog_path) = catalog_path else {
        return Err(QuizError::invalid(
            "catalog",
            "--catalog is required to save a new quiz",
        ));
    };

    // A missing catalog file starts out empty.
    let mut catalog = if catalog_path.exists() {
        load_catalog(catalog_path)?
    } else {
        Catalog::new()
    };

    let mut identity = Identity::new();
    if let Some(email) = email {
        identity.login(&email, password.as_deref().unwrap_or_default())?;
    }

    let json = std::fs::read_to_string(draft_path).map_err(|source| QuizError::Load {
        path: draft_path.to_path_buf(),
        source,
    })?;
    let mut draft: QuizDraft = serde_json::from_str(&json)?;
    draft.created_by = identity.display_name().to_string();

    let quiz = catalog.create_quiz(draft)?.clone();
    save_catalog(catalog_path, &catalog)?;

    println!("Created quiz {} ({})", quiz.title, quiz.id);
    Ok(())
}
