use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Report, WrapErr};

use patsearch::options::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_EXPRESSION_LEN, DEFAULT_MAX_TOKENS};
use patsearch::{
    compile_query, parse_with, tokenize, Condition, ConditionTable, SearchError, SearchOptions,
};

/// Compile a patent search expression into a filter predicate
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// search expression, e.g. 'S1+S2×Not[S3]'
    expression: String,

    /// JSON file mapping condition ids to {"field": ..., "value": ...}
    #[arg(long)]
    conditions: Option<PathBuf>,

    /// inline condition as ID=FIELD:VALUE, may be repeated
    #[arg(short = 'c', long = "condition", value_parser = parse_inline_condition)]
    inline: Vec<Condition>,

    /// output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// print the canonical expression and its parse tree instead of compiling it
    #[arg(long)]
    ast: bool,

    /// maximum nesting of (...) and Not[...]
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// maximum expression length in characters
    #[arg(long = "max-length", default_value_t = DEFAULT_MAX_EXPRESSION_LEN)]
    max_length: usize,

    /// maximum number of tokens in the expression
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn parse_inline_condition(s: &str) -> Result<Condition, String> {
    let (id, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("'{s}': expected ID=FIELD:VALUE"))?;
    let (field, value) = rest
        .split_once(':')
        .ok_or_else(|| format!("'{s}': expected ID=FIELD:VALUE"))?;
    if id.is_empty() || field.is_empty() {
        return Err(format!("'{s}': id and field must not be empty"));
    }
    Ok(Condition::new(id, field, value))
}

fn load_conditions(path: &Path) -> miette::Result<ConditionTable> {
    let raw = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading conditions from {}", path.display()))?;
    serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err_with(|| format!("parsing conditions in {}", path.display()))
}

fn with_source(err: SearchError, expression: &str) -> Report {
    Report::new(err).with_source_code(expression.to_string())
}

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let mut conditions = match &args.conditions {
        Some(path) => load_conditions(path)?,
        None => ConditionTable::new(),
    };
    conditions.extend(args.inline);
    log::debug!("{} conditions loaded", conditions.len());

    let options = SearchOptions {
        max_depth: args.max_depth,
        max_expression_len: args.max_length,
        max_tokens: args.max_tokens,
    };
    let expression = args.expression.as_str();

    options
        .check_length(expression)
        .map_err(|e| with_source(e, expression))?;
    let tokens = tokenize(expression);
    let expr = parse_with(&tokens, &options).map_err(|e| with_source(e, expression))?;

    if args.ast {
        match &expr {
            Some(e) => println!("{}\n{:#?}", e, e),
            None => println!("(empty)"),
        }
        return Ok(());
    }

    let predicate =
        compile_query(expr.as_ref(), &conditions).map_err(|e| with_source(e, expression))?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&predicate).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", predicate),
    }

    Ok(())
}
