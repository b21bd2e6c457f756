use clap::Parser;

#[derive(Parser, Clone)]
#[clap(author, version, long_about = None)]
#[clap(about = "A CLI for morphological analysis and lemmatization of Turkish text")]
#[clap(propagate_version = true)]
pub struct Args {
    /// Output format
    #[clap(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(clap::Subcommand, Clone)]
pub enum Commands {
    /// Print every morphological analysis of each word in the input
    Analyze {
        /// Text to analyze; reads stdin if omitted
        text: Option<String>,
    },
    /// Print just the lemma(s) of each word in the input
    Lemmatize {
        /// Text to lemmatize; reads stdin if omitted
        text: Option<String>,
    },
}
