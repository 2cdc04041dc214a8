//! The `criteria` command-line tool: create a configuration directory and translate query
//! strings against the collections it describes.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};

use criteria_configuration::version1::CONFIGURATION_FILENAME;
use criteria_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};
use query_engine_criteria::criteria::{self, Criteria};
use query_engine_translation::translation::{document, relational};

/// The commands the CLI can run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Initialize a configuration directory with an empty configuration and its JSON schema.
    Initialize {
        #[arg(long, env = "CRITERIA_CONFIGURATION_DIR")]
        configuration: PathBuf,
    },
    /// Translate a query string for one collection and print the result as JSON.
    Translate {
        #[arg(long, env = "CRITERIA_CONFIGURATION_DIR")]
        configuration: PathBuf,
        /// The collection whose settings apply.
        #[arg(long)]
        collection: String,
        #[arg(long, value_enum, default_value_t = Target::Both)]
        target: Target,
        /// Fail on a malformed query instead of translating empty criteria.
        #[arg(long)]
        strict: bool,
        /// A full URL or a raw query string.
        query: String,
    },
}

/// Which translations to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Sql,
    Document,
    Both,
}

impl Target {
    fn includes_sql(self) -> bool {
        matches!(self, Target::Sql | Target::Both)
    }

    fn includes_document(self) -> bool {
        matches!(self, Target::Document | Target::Both)
    }
}

/// Run a command, writing its output to `stdout`.
pub fn run(command: Command, stdout: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Initialize { configuration } => initialize(&configuration),
        Command::Translate {
            configuration,
            collection,
            target,
            strict,
            query,
        } => translate(&configuration, &collection, target, strict, &query, stdout),
    }
}

/// Write an empty configuration to a directory that does not hold one yet.
fn initialize(configuration_dir: &Path) -> anyhow::Result<()> {
    let configuration_file = configuration_dir.join(CONFIGURATION_FILENAME);
    if configuration_file.exists() {
        anyhow::bail!("{} already exists", configuration_file.display());
    }

    write_parsed_configuration(&ParsedConfiguration::initial(), configuration_dir)
        .with_context(|| format!("writing configuration to {}", configuration_dir.display()))?;
    tracing::info!("Initialized configuration in {}", configuration_dir.display());
    Ok(())
}

fn translate(
    configuration_dir: &Path,
    collection: &str,
    target: Target,
    strict: bool,
    query: &str,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    let parsed = parse_configuration(configuration_dir)?;
    let configuration = make_runtime_configuration(parsed);

    let criteria = parse_query(query, strict)?;
    if criteria.is_unconstrained() {
        tracing::info!("No filters, order or pagination in '{}'", query);
    }
    let criteria = configuration.apply(collection, criteria)?;

    let mut output = serde_json::Map::new();
    if target.includes_sql() {
        let query = relational::translate_with(&criteria, configuration.placeholders)?;
        output.insert("sql".to_string(), serde_json::Value::String(query.sql));
        output.insert("params".to_string(), serde_json::to_value(&query.params)?);
    }
    if target.includes_document() {
        let (filter, options) =
            document::translate_with(&criteria, configuration.unsupported_operators);
        output.insert("filter".to_string(), serde_json::to_value(&filter)?);
        output.insert("options".to_string(), serde_json::to_value(&options)?);
    }

    writeln!(
        stdout,
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(output))?
    )?;
    Ok(())
}

/// A full URL is parsed by its query component, anything else as a raw query string.
fn parse_query(query: &str, strict: bool) -> anyhow::Result<Criteria> {
    match (url::Url::parse(query), strict) {
        (Ok(url), true) => criteria::from_url(&url).with_context(|| format!("parsing {query}")),
        (Ok(url), false) => Ok(criteria::must_from_url(&url)),
        (Err(_), true) => {
            criteria::from_query_str(query).with_context(|| format!("parsing {query}"))
        }
        (Err(_), false) => Ok(criteria::must_from_query_str(query)),
    }
}
