//! Mathwriter CLI - shorthand math notation to LaTeX markup

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use mathwriter::{
    render_expression, to_mathtext, Normalizer, OutputTarget, RenderOutcome, RenderProfile,
    SymbolKind, SymbolTable, TexSourceEngine,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mw")]
#[command(version)]
#[command(about = "Mathwriter - shorthand math notation to LaTeX markup", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Expression to normalize (reads from stdin if not provided)
    expression: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Wrap the markup in $...$ for an inline math renderer
    #[arg(short, long)]
    mathtext: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render an expression through the LaTeX source engine
    Render {
        /// Expression to render (reads from stdin if not provided)
        expression: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Rendering profile
        #[arg(short, long, value_enum, default_value_t = Profile::Save)]
        profile: Profile,

        /// Override the profile's font size (points)
        #[arg(long)]
        font_size: Option<f32>,

        /// Override the profile's resolution (dots per inch)
        #[arg(long)]
        dpi: Option<f32>,
    },

    /// List the shorthand symbols
    Symbols {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize every line of a file
    Batch {
        /// Input file, one expression per line
        input: String,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Wrap each line in $...$
        #[arg(short, long)]
        mathtext: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    /// Low-fidelity live preview
    Preview,
    /// High-fidelity save
    Save,
}

#[cfg(feature = "cli")]
impl Profile {
    fn settings(self) -> RenderProfile {
        match self {
            Profile::Preview => RenderProfile::preview(),
            Profile::Save => RenderProfile::save(),
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let table = SymbolTable::standard();
    let normalizer = match Normalizer::new(&table) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd, &table, &normalizer);
    }

    let input = read_input(cli.expression)?;
    let markup = normalizer.normalize(&input);
    let result = if cli.mathtext {
        to_mathtext(&markup)
    } else {
        markup
    };

    write_output(cli.output.as_deref(), &result)
}

#[cfg(feature = "cli")]
fn handle_subcommand(
    cmd: Commands,
    table: &SymbolTable,
    normalizer: &Normalizer<'_>,
) -> io::Result<()> {
    match cmd {
        Commands::Render {
            expression,
            output,
            profile,
            font_size,
            dpi,
        } => {
            let input = read_input(expression)?;
            let mut settings = profile.settings();
            if let Some(size) = font_size {
                settings.font_size = size;
            }
            if let Some(dpi) = dpi {
                settings.dpi = dpi;
            }

            match render_expression(
                &input,
                normalizer,
                &TexSourceEngine::new(),
                OutputTarget::new(&output),
                &settings,
            ) {
                Ok(RenderOutcome::Rendered { markup }) => {
                    eprintln!("✓ {} written to: {}", markup, output);
                }
                Ok(RenderOutcome::Empty) => {
                    eprintln!("Nothing to render: type an expression");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Symbols { json } => {
            if json {
                let text = symbols_json(&table)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                println!("{}", text);
            } else {
                for entry in table.iter() {
                    let kind = match entry.kind {
                        SymbolKind::Symbol => "",
                        SymbolKind::Function => "  (function)",
                    };
                    println!("{:<8} {}{}", entry.shorthand, entry.markup, kind);
                }
            }
        }

        Commands::Batch {
            input,
            output,
            mathtext,
        } => {
            let content = fs::read_to_string(&input)?;
            let mut lines = Vec::new();
            let mut skipped = 0;

            for (number, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    log::warn!("{}:{}: blank line skipped", input, number + 1);
                    skipped += 1;
                    continue;
                }
                let markup = normalizer.normalize(line);
                lines.push(if mathtext {
                    to_mathtext(&markup)
                } else {
                    markup
                });
            }

            write_output(output.as_deref(), &lines.join("\n"))?;
            eprintln!(
                "\nBatch complete: {} normalized, {} skipped",
                lines.len(),
                skipped
            );
        }

        Commands::Info => {
            println!("Mathwriter - shorthand math notation to LaTeX markup");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Whole-token shorthand substitution ({} symbols)", table.len());
            println!("  ✓ sqrt(x) and sqrt x call forms");
            println!("  ✓ Standalone LaTeX output for rendering");
            println!("  ✓ Batch file processing");
            println!();
            println!("Profiles:");
            let preview = RenderProfile::preview();
            let save = RenderProfile::save();
            println!("  - preview: {}pt at {} dpi", preview.font_size, preview.dpi);
            println!("  - save:    {}pt at {} dpi", save.font_size, save.dpi);
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

#[cfg(feature = "cli")]
fn read_input(arg: Option<String>) -> io::Result<String> {
    match arg {
        Some(expr) => Ok(expr),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

/// The table as a pretty-printed JSON array for `symbols --json`
#[cfg(feature = "cli")]
fn symbols_json(table: &SymbolTable) -> serde_json::Result<String> {
    let entries: Vec<_> = table.iter().collect();
    serde_json::to_string_pretty(&entries)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathwriter --features cli");
    eprintln!("  mw [OPTIONS] [EXPRESSION]");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_json() {
        let table = SymbolTable::standard();
        let text = symbols_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), table.len());
        let sqrt = entries
            .iter()
            .find(|e| e["shorthand"] == "sqrt")
            .unwrap();
        assert_eq!(sqrt["markup"], "\\sqrt");
        assert_eq!(sqrt["kind"], "function");
    }
}
