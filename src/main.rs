//! ProcureWatch CLI
//!
//! Usage:
//!   procurewatch --file contract.txt            # Analyze a contract file
//!   procurewatch --text "1. PAYMENT ..."        # Analyze inline text
//!   procurewatch --sample                       # Analyze the bundled sample
//!   procurewatch --chat [--file contract.txt]   # Interactive chat session
//!   procurewatch --file contract.txt --json     # JSON report

use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};

use procurewatch::core::{HeuristicSummarizer, Orchestrator, Responders};
use procurewatch::types::{Document, ResponderError};
use procurewatch::VERSION;

/// Demo contract behind the --sample flag
const SAMPLE_CONTRACT: &str = "\
SUPPLY CONTRACT - HEAVY METAL SOLUTIONS INC.

1. PAYMENT TERMS: Client must pay 100% of the total value in advance before production starts.
2. DELIVERY: Goods are delivered \"AS-IS\", with no warranty of merchantability.
3. TERMINATION: The Supplier may terminate this agreement at any time without notice.
";

#[derive(Parser, Debug)]
#[command(
    name = "procurewatch",
    version = VERSION,
    about = "ProcureWatch - contract clause extraction, risk scanning, and agent chat",
    long_about = "ProcureWatch reviews contract text with deterministic heuristics:\n\
                  numbered/keyword clause extraction, a fixed risk pattern scan,\n\
                  and a readable summary report.\n\n\
                  Modes:\n  \
                  --file/--text/--sample  One-shot contract review\n  \
                  --chat                  Interactive session (search / document / general routing)\n\n\
                  Chat commands: 'clear' resets the session, 'exit' quits."
)]
struct Args {
    /// Contract text file to load
    #[arg(short, long)]
    file: Option<String>,

    /// Inline contract text to analyze
    #[arg(short, long)]
    text: Option<String>,

    /// Use the bundled sample contract
    #[arg(long)]
    sample: bool,

    /// Interactive chat mode - routes each question to a responder
    #[arg(short, long)]
    chat: bool,

    /// Perspective the report is written for
    #[arg(long, default_value = "buyer")]
    audience: String,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let document = match load_document(&args) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    if args.chat {
        run_chat(document, &args.audience);
    } else {
        match document {
            Some(doc) => run_report(&doc, &args),
            None => {
                eprintln!(
                    "{} provide --file, --text, or --sample (or --chat for a session)",
                    "error:".red().bold()
                );
                std::process::exit(1);
            }
        }
    }
}

/// Resolve the contract source. A bare `--chat` session starts without a
/// document so general questions reach the general responder.
fn load_document(args: &Args) -> io::Result<Option<Document>> {
    if let Some(path) = &args.file {
        return Ok(Some(Document::new(fs::read_to_string(path)?)));
    }
    if let Some(text) = &args.text {
        return Ok(Some(Document::new(text.clone())));
    }
    if args.sample {
        return Ok(Some(Document::new(SAMPLE_CONTRACT)));
    }
    Ok(None)
}

// =============================================================================
// ONE-SHOT REPORT
// =============================================================================

fn run_report(document: &Document, args: &Args) {
    let summarizer = HeuristicSummarizer::new();
    let summary = summarizer.summarize(&document.raw_text, &args.audience);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", "=== ProcureWatch contract review ===".cyan().bold());
    println!();
    print!("{}", summary.render());
    println!();
    if summary.findings.is_empty() {
        println!("{}", "No high-severity pattern detected.".green());
    } else {
        println!(
            "{}",
            format!("{} risk pattern(s) detected.", summary.findings.len())
                .red()
                .bold()
        );
    }
}

// =============================================================================
// CHAT MODE
// =============================================================================

/// Offline responder set: answers from local heuristics only.
///
/// Stands in for the hosted model and news backends so the chat mode works
/// without network access. Search results are canned demo alerts.
struct OfflineResponders {
    summarizer: HeuristicSummarizer,
    audience: String,
}

impl Responders for OfflineResponders {
    fn search(&self, query: &str) -> Result<String, ResponderError> {
        Ok(format!(
            "Demo alerts for '{query}':\n\
             - Aluminum plant in Germany shuts down temporarily (possible supply disruption)\n\
             - Severe snowstorm expected in Quebec (potential cement transport delays)"
        ))
    }

    fn document_qa(&self, _query: &str, context: &str) -> Result<String, ResponderError> {
        if context.trim().is_empty() {
            return Err(ResponderError::Empty);
        }
        Ok(self.summarizer.summarize(context, &self.audience).render())
    }

    fn general(&self, _query: &str) -> Result<String, ResponderError> {
        Ok("I review supply contracts: load one with --file and ask about its terms, \
            or ask for 'news' to see external alerts."
            .to_string())
    }
}

fn run_chat(document: Option<Document>, audience: &str) {
    let orchestrator = Orchestrator::new(OfflineResponders {
        summarizer: HeuristicSummarizer::new(),
        audience: audience.to_string(),
    });
    let mut history = Vec::new();

    println!("{}", "ProcureWatch agent chat".cyan().bold());
    match &document {
        Some(doc) => println!("Loaded contract ({} chars).", doc.char_length),
        None => println!("No contract loaded; use --file or --sample to ask document questions."),
    }
    println!("Ask about the contract, or 'news ...' for alerts. 'clear' resets, 'exit' quits.");
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".green().bold());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            "clear" => {
                // Session reset is the caller's job, not the core's
                history.clear();
                println!("{}", "Session cleared.".yellow());
                continue;
            }
            query => {
                let turn = orchestrator.handle(query, document.as_ref(), &mut history);
                println!("{}", turn.content);
                if let Some(label) = &turn.handled_by {
                    println!("{}", format!("[handled by: {label}]").dimmed());
                }
                println!();
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sample: bool, chat: bool) -> Args {
        Args {
            file: None,
            text: None,
            sample,
            chat,
            audience: "buyer".to_string(),
            json: false,
            no_color: false,
        }
    }

    #[test]
    fn test_bare_chat_starts_without_document() {
        // General questions must reach the general responder
        let doc = load_document(&args(false, true)).unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_sample_flag_loads_demo_contract() {
        let doc = load_document(&args(true, true)).unwrap().expect("sample loaded");
        assert!(doc.raw_text.contains("HEAVY METAL SOLUTIONS"));
    }

    #[test]
    fn test_inline_text_beats_sample() {
        let mut a = args(true, false);
        a.text = Some("1. PAYMENT TERMS: net 30.".to_string());
        let doc = load_document(&a).unwrap().expect("text loaded");
        assert!(doc.raw_text.starts_with("1. PAYMENT"));
    }
}
