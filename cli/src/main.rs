use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use caseconv::{CATALOG, ConversionStyle, convert};
use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};
use tracing_subscriber::EnvFilter;

/// convert text between identifier case conventions
#[derive(Parser, Debug)]
#[command(name = "caseconv", version)]
struct CaseConv {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// convert text to one case style
    Convert {
        /// target style: catalog name, short alias (snake, kebab, ...) or catalog index
        #[arg(short, long, env("CASECONV_STYLE"), default_value_t)]
        style: ConversionStyle,

        #[command(flatten)]
        input: Input,
    },
    /// print the text in every case style
    All {
        #[command(flatten)]
        input: Input,
    },
    /// list the available case styles
    Styles {
        /// print as json
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// text to convert. read from --file or stdin when omitted
    text: Option<String>,

    /// read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// keep characters other than a-z and 0-9
    #[arg(
        short,
        long,
        env("CASECONV_KEEP_ILLEGAL"),
        value_parser = BoolishValueParser::new()
    )]
    keep_illegal: bool,
}

impl Input {
    fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        let mut text = match &self.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        strip_trailing_newline(&mut text);
        Ok(text)
    }

    fn remove_illegal_chars(&self) -> bool {
        !self.keep_illegal
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG env var sets logging level */))
        .with_writer(io::stderr)
        .init();

    let args = CaseConv::parse();
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Convert { style, input } => {
            let text = input.read()?;
            tracing::info!(%style, bytes = text.len(), keep_illegal = input.keep_illegal, "convert");
            writeln!(stdout, "{}", convert(&text, style, input.remove_illegal_chars()))?;
        }
        Command::All { input } => {
            let text = input.read()?;
            tracing::info!(bytes = text.len(), keep_illegal = input.keep_illegal, "convert all");
            write_all_styles(&mut stdout, &text, input.remove_illegal_chars())?;
        }
        Command::Styles { json } => {
            if json {
                serde_json::to_writer_pretty(&mut stdout, &CATALOG)?;
                writeln!(stdout)?;
            } else {
                write_styles(&mut stdout)?;
            }
        }
    }

    Ok(())
}

/// Text read from a file or a pipe usually ends in a newline that is not meant
/// as an extra (empty) line.
fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

fn name_width() -> usize {
    CATALOG
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or_default()
}

fn write_all_styles(out: &mut dyn Write, text: &str, remove_illegal_chars: bool) -> io::Result<()> {
    let width = name_width();
    for entry in &CATALOG {
        let converted = convert(text, entry.style, remove_illegal_chars);
        for (idx, line) in converted.split('\n').enumerate() {
            let label = if idx == 0 { entry.name } else { "" };
            let row = format!("{label:<width$}  {line}");
            writeln!(out, "{}", row.trim_end())?;
        }
    }
    Ok(())
}

fn write_styles(out: &mut dyn Write) -> io::Result<()> {
    let width = name_width();
    for (idx, entry) in CATALOG.iter().enumerate() {
        writeln!(out, "{idx}  {:<width$}  {}", entry.name, entry.example)?;
    }
    Ok(())
}
