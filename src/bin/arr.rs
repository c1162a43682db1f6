//! arr - nested array helpers on the command line
//!
//! Runs the arrayutil operations over YAML/JSON files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use arrayutil::value::{self, Key, Value};
use arrayutil::{PropertyCase, Strictness};

#[derive(Debug, Parser)]
#[command(name = "arr", version, about = "Compare, query and merge nested YAML/JSON documents")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    /// Output format for documents
    #[arg(short, long, value_enum, default_value_t = Format::Yaml, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two documents ignoring key order and list order
    Equals {
        lhs: PathBuf,
        rhs: PathBuf,
        /// Coerce scalar types and ignore string case
        #[arg(long)]
        loose: bool,
    },
    /// Merge the second document into the first
    Merge {
        base: PathBuf,
        incoming: PathBuf,
        /// Concatenate lists instead of overwriting by position
        #[arg(long)]
        merge_indexed: bool,
    },
    /// Print the value at a key path
    Find {
        file: PathBuf,
        keys: Vec<String>,
        /// Value printed when the path does not exist (parsed as YAML)
        #[arg(long)]
        default: Option<String>,
    },
    /// Check whether a key path exists
    KeyExists {
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Check whether a top-level value matches (parsed as YAML)
    Contains {
        file: PathBuf,
        search: String,
        /// Compare types and string case exactly
        #[arg(long)]
        strict: bool,
    },
    /// Sort map keys at every depth
    KeySort { file: PathBuf },
    /// Collect every leaf value into one level
    Flatten {
        file: PathBuf,
        #[arg(long)]
        preserve_keys: bool,
    },
    /// Convert keyed containers into objects with converted property names
    ToObject {
        file: PathBuf,
        /// Leave nested containers as they are
        #[arg(long)]
        shallow: bool,
        /// Property case: camel, snake or none
        #[arg(long, default_value = "camel")]
        case: String,
    },
    /// Insert values (parsed as YAML) into a list
    Insert {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        position: isize,
        values: Vec<String>,
    },
    /// Join values with the same index across lists
    Concat {
        /// Separator placed between values
        #[arg(short, long, default_value = "")]
        separator: String,
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arrayutil=warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn read_document(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    let value = value::from_yaml(&content)
        .map_err(|e| format!("Failed to parse file {:?}: {}", file, e))?;
    Ok(value)
}

fn parse_scalar(text: &str) -> Result<Value, Box<dyn std::error::Error>> {
    value::from_yaml(text).map_err(|e| format!("Failed to parse value {:?}: {}", text, e).into())
}

fn write_document(
    doc: &Value,
    format: Format,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Yaml => write!(output, "{}", value::to_yaml(doc)?)?,
        Format::Json => writeln!(output, "{}", value::to_json_pretty(doc)?)?,
    }
    Ok(())
}

fn key_path(keys: &[String]) -> Vec<Key> {
    keys.iter().map(|k| Key::from(k.as_str())).collect()
}

/// Runs the command. `Ok(false)` means a check answered no.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };
    let format = cli.format;

    match cli.command {
        Command::Equals { lhs, rhs, loose } => {
            let strictness = if loose { Strictness::Loose } else { Strictness::Strict };
            let same = arrayutil::equals(&read_document(&lhs)?, &read_document(&rhs)?, strictness);
            writeln!(output, "{}", if same { "Documents are equal" } else { "Documents differ" })?;
            Ok(same)
        }
        Command::Merge {
            base,
            incoming,
            merge_indexed,
        } => {
            let merged = arrayutil::merge_distinct(
                &read_document(&base)?,
                &read_document(&incoming)?,
                merge_indexed,
            );
            write_document(&merged, format, &mut output)?;
            Ok(true)
        }
        Command::Find { file, keys, default } => {
            let doc = read_document(&file)?;
            let default = match default {
                Some(text) => parse_scalar(&text)?,
                None => Value::Null,
            };
            let found = arrayutil::find(&doc, &key_path(&keys), &default);
            write_document(found, format, &mut output)?;
            Ok(true)
        }
        Command::KeyExists { file, keys } => {
            let exists = arrayutil::key_exists(&read_document(&file)?, &key_path(&keys))?;
            writeln!(output, "{}", exists)?;
            Ok(exists)
        }
        Command::Contains {
            file,
            search,
            strict,
        } => {
            let found = arrayutil::contains(
                &read_document(&file)?,
                &parse_scalar(&search)?,
                Strictness::from(strict),
            );
            writeln!(output, "{}", found)?;
            Ok(found)
        }
        Command::KeySort { file } => {
            write_document(&arrayutil::key_sort(&read_document(&file)?), format, &mut output)?;
            Ok(true)
        }
        Command::Flatten {
            file,
            preserve_keys,
        } => {
            let flat = arrayutil::flatten(&read_document(&file)?, preserve_keys);
            write_document(&flat, format, &mut output)?;
            Ok(true)
        }
        Command::ToObject {
            file,
            shallow,
            case,
        } => {
            let case = match case.as_str() {
                "none" => None,
                name => Some(name.parse::<PropertyCase>()?),
            };
            let object = arrayutil::to_object(&read_document(&file)?, !shallow, case);
            write_document(&Value::Object(object), format, &mut output)?;
            Ok(true)
        }
        Command::Insert {
            file,
            position,
            values,
        } => {
            let items = values
                .iter()
                .map(|text| parse_scalar(text))
                .collect::<Result<Vec<_>, _>>()?;
            let result = arrayutil::insert(&read_document(&file)?, &items, position);
            write_document(&result, format, &mut output)?;
            Ok(true)
        }
        Command::Concat { separator, files } => {
            let arrays = files
                .iter()
                .map(|file| read_document(file))
                .collect::<Result<Vec<_>, _>>()?;
            for line in arrayutil::concat_strings(separator, &arrays)? {
                writeln!(output, "{}", line)?;
            }
            Ok(true)
        }
    }
}
