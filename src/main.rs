use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;

use rescale::language::TokenId;
use rescale::parsing;
use rescale::scaling::Rescaler;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("rescale")
        .version(VERSION)
        .propagate_version(true)
        .about("Detect quantities in text and rescale them proportionally.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug-level logging of the scanning and propagation steps."),
        )
        .subcommand(
            Command::new("scan")
                .about("List the quantities detected in the given file")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the detected quantities as JSON rather than a table."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text you want to scan for quantities."),
                ),
        )
        .subcommand(
            Command::new("scale")
                .about("Rescale every quantity in the given file after editing one of them")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text whose quantities you want to rescale."),
                )
                .arg(
                    Arg::new("token")
                        .required(true)
                        .value_parser(clap::value_parser!(usize))
                        .help("The number of the quantity being edited, as reported by scan."),
                )
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("The new text of the edited quantity."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("scan", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let content = load_or_exit(Path::new(filename));
            scan(&content, submatches.get_flag("json"));
        }
        Some(("scale", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let token = submatches
                .get_one::<usize>("token")
                .unwrap();
            let value = submatches
                .get_one::<String>("value")
                .unwrap();
            let content = load_or_exit(Path::new(filename));
            scale(&content, TokenId(*token), value);
        }
        _ => {
            println!("usage: rescale [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn scan(content: &str, json: bool) {
    let session = Rescaler::scan(content);
    let tokens = session.tokens();

    if json {
        let rendered = serde_json::to_string_pretty(tokens).expect("Serialize detected tokens");
        println!("{}", rendered);
        return;
    }

    for (id, token) in tokens.iter() {
        println!(
            "{:>4}  {:<12} {:>12}  {}",
            id.0,
            token.raw_text,
            token.baseline_value,
            if token.render_as_fraction {
                "fraction"
            } else {
                "decimal"
            }
        );
    }
}

fn scale(content: &str, edited: TokenId, value: &str) {
    let session = Rescaler::scan(content);

    let Some(token) = session
        .tokens()
        .get(edited)
    else {
        eprintln!(
            "{}: No quantity numbered {}; run scan to list them.",
            "error".bright_red(),
            edited.0
        );
        std::process::exit(1);
    };

    // Check the edit itself before propagating. An empty mapping from
    // propagate is not a failure signal: a region holding a single
    // quantity has nothing else to rescale.
    let Some(new_value) = parsing::normalize(value) else {
        eprintln!(
            "{}: \"{}\" is not a readable quantity.",
            "error".bright_red(),
            value
        );
        std::process::exit(1);
    };
    if !(new_value / token.baseline_value).is_finite() {
        eprintln!(
            "{}: Cannot rescale from a baseline of {}.",
            "error".bright_red(),
            token.baseline_value
        );
        std::process::exit(1);
    }

    let changes = session.propagate(edited, value);

    // Splice the new display strings back into the text, rightmost first
    // so earlier offsets stay valid. The edited token keeps the text
    // exactly as given.
    let mut replacements: Vec<(rescale::language::Span, String)> = changes
        .into_iter()
        .map(|(id, display)| {
            let span = session
                .tokens()
                .get(id)
                .expect("propagate only reports known tokens")
                .span;
            (span, display)
        })
        .collect();
    replacements.push((token.span, value.to_string()));
    replacements.sort_by(|a, b| {
        b.0.start
            .cmp(&a.0.start)
    });

    let mut output = content.to_string();
    for (span, display) in replacements {
        output.replace_range(span.start..span.end, &display);
    }

    print!("{}", output);
}
