//! ctrie: CLI tool for building and querying compressed trie files.

use clap::{Parser, Subcommand};
use ctrie::{CodecConfig, Tree, WordListReader};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ctrie")]
#[command(version = "0.1.0")]
#[command(about = "Build and query compressed trie files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a trie file from a word list (one word per line)
    Build {
        /// Input word list
        #[arg(short, long)]
        input: PathBuf,

        /// Output trie file
        #[arg(short, long)]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the words in a trie file that start with a prefix
    Query {
        /// Input trie file
        #[arg(short, long)]
        input: PathBuf,

        /// Prefix to search for (all words when omitted)
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Print a JSON object instead of one word per line
        #[arg(long)]
        json: bool,

        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print node and word counts of a trie file
    Stats {
        /// Input trie file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Render a trie file as a Graphviz DOT graph
    Dot {
        /// Input trie file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    prefix: &'a str,
    total: usize,
    words: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            verbose,
        } => build_file(&input, &output, verbose),
        Commands::Query {
            input,
            prefix,
            json,
            limit,
        } => query_file(&input, &prefix, json, limit),
        Commands::Stats { input } => print_stats(&input),
        Commands::Dot { input } => print_dot(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_file(input: &Path, output: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Reading word list: {:?}", input);
    }

    let mut tree = Tree::new();
    let lines = WordListReader::new(fs::File::open(input)?).load_into(&mut tree)?;

    if verbose {
        println!(
            "Inserted {} lines: {} words, {} nodes",
            lines,
            tree.word_count(),
            tree.node_count()
        );
    }

    let written = tree.save(output)?;

    println!(
        "Successfully built {:?} -> {:?} ({} bytes)",
        input, output, written
    );
    Ok(())
}

fn query_file(
    input: &Path,
    prefix: &str,
    json: bool,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = Tree::load(input)?;
    let matches = tree.find_words_with_prefix(prefix);
    let total = matches.len();

    let words: Vec<String> = matches
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|w| String::from_utf8_lossy(w).into_owned())
        .collect();

    if json {
        let out = QueryOutput {
            prefix,
            total,
            words,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for word in &words {
            println!("{}", word);
        }
    }
    Ok(())
}

fn print_stats(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let size = fs::metadata(input)?.len();
    let tree = Tree::load_with(input, CodecConfig::strict())?;

    println!("File:       {:?}", input);
    println!("Size:       {} bytes", size);
    println!("Nodes:      {}", tree.node_count());
    println!("Words:      {}", tree.word_count());
    Ok(())
}

fn print_dot(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let tree = Tree::load(input)?;
    print!("{}", render_dot(&tree)?);
    Ok(())
}

/// Render the tree as DOT. Word nodes are drawn as double circles.
fn render_dot(tree: &Tree) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.push_str("digraph Trie {\n");
    out.push_str("  node [shape=circle];\n");

    let mut next_id = 0usize;
    let mut stack = vec![(tree.root(), None::<usize>)];
    while let Some((node, parent)) = stack.pop() {
        let id = next_id;
        next_id += 1;

        let shape = if node.is_word() {
            ", shape=doublecircle"
        } else {
            ""
        };
        writeln!(out, "  n{} [label=\"\"{}];", id, shape)?;
        if let Some(parent) = parent {
            writeln!(
                out,
                "  n{} -> n{} [label=\"{}\"];",
                parent,
                id,
                escape_label(node.label())
            )?;
        }

        let children: Vec<_> = node.children().collect();
        for (_, child) in children.into_iter().rev() {
            stack.push((child, Some(id)));
        }
    }

    out.push_str("}\n");
    Ok(out)
}

fn escape_label(label: &[u8]) -> String {
    String::from_utf8_lossy(label)
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}
