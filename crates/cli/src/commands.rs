use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Render JSON statement trees as Postgres SQL
    Render {
        #[arg(
            long,
            default_value = "-",
            help = "JSON file holding one statement or an array of statements; '-' reads stdin"
        )]
        input: String,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// List every node kind with its origin and the rule set that renders it
    Kinds {
        #[arg(long, help = "If set, prints the table as JSON")]
        json: bool,
    },
}

/// Flags layered over the options file.
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    #[arg(
        long,
        help = "Options JSON file; defaults to <config dir>/pgrender/options.json when present"
    )]
    pub options: Option<String>,

    #[arg(long, help = "Emit keywords in lower case")]
    pub lowercase: bool,

    #[arg(long, help = "Replace literals with $n placeholders")]
    pub parameterized: bool,

    #[arg(long, help = "Write each statement on a single line")]
    pub compact: bool,

    #[arg(long, help = "Text emitted per indentation level")]
    pub indent_unit: Option<String>,
}
