//! Label command implementation

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shirushi_core::{
    BilouSerializer, DictionaryMatcher, IndexedText, Iob2Serializer, IobesSerializer,
    JsonlSerializer, LongestMatch, MaximizedCount, Resolver, Serializer,
};

use crate::dictionary;

/// Arguments for the label command
#[derive(Debug, Args)]
pub struct LabelArgs {
    /// Dictionary JSON file: {"phrase": [{"label": "..."}], ...}
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Input file, one document per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "iob2")]
    pub format: OutputFormat,

    /// Overlap resolution policy
    #[arg(short, long, value_enum, default_value = "longest")]
    pub resolver: ResolverPolicy,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated atom/tag lines in IOB2
    Iob2,
    /// Tab-separated atom/tag lines in BILOU
    Bilou,
    /// Tab-separated atom/tag lines in IOBES
    Iobes,
    /// One JSON object per document with raw spans
    Jsonl,
}

/// Supported overlap resolution policies
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ResolverPolicy {
    /// Keep the longest spans
    Longest,
    /// Keep as many spans as possible
    Maximized,
}

impl LabelArgs {
    /// Execute the label command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("loading dictionary from {}", self.dictionary.display());
        let patterns = dictionary::load(&self.dictionary)?;

        let mut matcher = DictionaryMatcher::new();
        matcher.add(patterns);
        matcher.compile()?;

        let resolver: Box<dyn Resolver> = match self.resolver {
            ResolverPolicy::Longest => Box::new(LongestMatch),
            ResolverPolicy::Maximized => Box::new(MaximizedCount),
        };
        let serializer: Box<dyn Serializer> = match self.format {
            OutputFormat::Iob2 => Box::new(Iob2Serializer),
            OutputFormat::Bilou => Box::new(BilouSerializer),
            OutputFormat::Iobes => Box::new(IobesSerializer),
            OutputFormat::Jsonl => Box::new(JsonlSerializer),
        };

        let input = self.read_input()?;
        let mut output = self.open_output()?;

        for (number, line) in input.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let text = IndexedText::raw(line);
            let entities = resolver.resolve(matcher.find(&text)?);
            log::debug!("document {number}: {} entities", entities.len());

            let rendered = serializer.save(&text, &entities)?;
            writeln!(output, "{rendered}")?;
            if !matches!(self.format, OutputFormat::Jsonl) {
                // Blank line between tagged documents, CoNLL style
                writeln!(output)?;
            }
        }
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display())),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                Ok(buffer)
            }
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = fs::File::create(path)
                    .with_context(|| format!("failed to create output file {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }
    }
}
