use clap::{Parser, Subcommand, ValueEnum};
use playground_highlight::error::Error;
use playground_highlight::render::DEFAULT_CLASS_PREFIX;
use playground_highlight::response::{BackendResponse, RunResponse};
use playground_highlight::{source_from_bytes, token_reports, AnsiRenderer, Highlighter, Lexicon, Options};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "highlight")]
#[command(about = "Highlight - Rust source to annotated HTML")]
struct Cli {
    /// Log classifier and worker activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Ansi,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a .rs file, a directory of them, or stdin
    Render {
        /// Path to .rs file or directory
        #[arg(required_unless_present = "stdin")]
        file: Option<PathBuf>,

        /// Read from stdin
        #[arg(long)]
        stdin: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: Format,

        /// JSON lexicon replacing the built-in Rust word tables
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Prefix for category class names
        #[arg(long, default_value = DEFAULT_CLASS_PREFIX)]
        class_prefix: String,

        /// Do not append a newline after the markup
        #[arg(long)]
        no_trailing_newline: bool,
    },
    /// Print a run response (output and timings) or a format response from the backend
    Report {
        /// Path to a JSON run or format response
        #[arg(required_unless_present = "stdin")]
        file: Option<PathBuf>,

        /// Read from stdin
        #[arg(long)]
        stdin: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render { file, stdin, format, lexicon, class_prefix, no_trailing_newline } => {
            load_options(lexicon.as_deref(), class_prefix, !no_trailing_newline)
                .and_then(|options| render(file, stdin, format, options))
        }
        Commands::Report { file, stdin } => report(file, stdin),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_options(lexicon: Option<&Path>, class_prefix: String, trailing_newline: bool) -> Result<Options, Error> {
    let lexicon = match lexicon {
        Some(path) => Lexicon::from_path(path)?,
        None => Lexicon::rust(),
    };
    Ok(Options { lexicon, class_prefix, trailing_newline })
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> Result<String, Error> {
    if stdin {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        return Ok(source_from_bytes(bytes));
    }
    match file {
        Some(path) => read_source(&path),
        None => Err(Error::Usage("provide a file or use --stdin".to_string())),
    }
}

fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|err| Error::io(path, err))?;
    Ok(source_from_bytes(bytes))
}

fn render(file: Option<PathBuf>, stdin: bool, format: Format, options: Options) -> Result<(), Error> {
    let highlighter = Highlighter::new(options);

    if let Some(dir) = file.as_deref().filter(|path| !stdin && path.is_dir()) {
        if format != Format::Html {
            return Err(Error::Usage("directories can only be rendered as html".to_string()));
        }
        return render_directory(&highlighter, dir);
    }

    let source = read_input(file, stdin)?;
    print!("{}", render_source(&highlighter, &source, format)?);
    Ok(())
}

fn render_source(highlighter: &Highlighter, source: &str, format: Format) -> Result<String, Error> {
    match format {
        Format::Html => Ok(highlighter.highlight(source)),
        Format::Ansi => Ok(highlighter.render_with(source, &AnsiRenderer)?),
        Format::Json => {
            let tokens = highlighter.classify(source);
            let mut json = serde_json::to_string_pretty(&token_reports(source, &tokens))?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_directory(highlighter: &Highlighter, dir: &Path) -> Result<(), Error> {
    let start = Instant::now();
    let mut file_count = 0;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let path = entry.path();
        let source = read_source(path)?;
        let output = html_path(path);
        fs::write(&output, highlighter.highlight(&source)).map_err(|err| Error::io(&output, err))?;
        print_generated(&output.display().to_string());
        file_count += 1;
    }

    if file_count == 0 {
        return Err(Error::Usage(format!("No .rs files found in {}", dir.display())));
    }

    print_summary(file_count, start.elapsed());
    Ok(())
}

/// `src/main.rs` -> `src/main.rs.html`
fn html_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".html");
    PathBuf::from(name)
}

fn report(file: Option<PathBuf>, stdin: bool) -> Result<(), Error> {
    let json = read_input(file, stdin)?;
    match BackendResponse::from_json(&json)? {
        BackendResponse::Run(response) => report_run(&response),
        BackendResponse::Format(response) => match response.into_result() {
            Ok(formatted) => print!("{}", formatted),
            Err(message) => eprintln!("{}", message),
        },
    }
    Ok(())
}

fn report_run(response: &RunResponse) {
    println!("{}", response.display_text());

    let rows = response.profile_rows();
    if rows.is_empty() {
        eprintln!("No timing data available");
    }
    for row in rows {
        eprintln!("  {:<24} {}", row.label, row.value);
    }
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "file" } else { "files" };

    if is_tty {
        eprintln!("\n\x1b[1m✨ Highlighted {} {} in {}\x1b[0m", count, files_word, time_str);
    } else {
        eprintln!("\n✨ Highlighted {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
