use clap::{Parser, Subcommand, ValueEnum};
use jsondate::{DateError, DateTimeValue, DateValue};
use serde::{Deserialize, Serialize};

const SAMPLE: &str = r#"{"ymd":"2008-12-25","ymdhms":"1742-12-25T13:32:20"}"#;

#[derive(thiserror::Error, Debug)]
pub enum JsonDateCliError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, PartialEq, Eq, ValueEnum, Debug)]
enum KindArg {
    Date,
    DateTime,
}

impl KindArg {
    /// Decodes `value` and returns its canonical JSON encoding.
    fn canonicalize(&self, value: &str, bare: bool) -> Result<String, DateError> {
        match (self, bare) {
            (KindArg::Date, false) => DateValue::from_json(value).map(|v| v.to_json()),
            (KindArg::Date, true) => value.parse::<DateValue>().map(|v| v.to_json()),
            (KindArg::DateTime, false) => DateTimeValue::from_json(value).map(|v| v.to_json()),
            (KindArg::DateTime, true) => value.parse::<DateTimeValue>().map(|v| v.to_json()),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Record {
    ymd: DateValue,
    ymdhms: DateTimeValue,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates a date or date-time JSON string literal and prints its canonical encoding
    Valid {
        /// The JSON string literal, quotes included (e.g. '"2008-12-25"')
        value: String,

        /// The template to validate against
        #[arg(short, long, value_enum, default_value_t = KindArg::Date)]
        kind: KindArg,

        /// Treat VALUE as unquoted text
        #[arg(long)]
        bare: bool,
    },

    /// Decodes a `{"ymd": ..., "ymdhms": ...}` document, prints its values and re-encodes it
    Roundtrip {
        /// The JSON document. Omit to use a sample.
        json: Option<String>,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, JsonDateCliError> {
    match cli.command {
        Commands::Valid { value, kind, bare } => Ok((kind.canonicalize(&value, bare)?, 0)),
        Commands::Roundtrip { json } => {
            let record: Record = serde_json::from_str(json.as_deref().unwrap_or(SAMPLE))?;
            let output = serde_json::to_string(&record)?;
            Ok((format!("{}\n{}\n{}", record.ymd, record.ymdhms, output), 0))
        }
    }
}
