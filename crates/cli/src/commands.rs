use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the create-connection form
    ConnectionCreate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Validate the edit-connection form
    ConnectionEdit {
        /// Id of the connection being edited; defaults to the form's `id` field
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        form: FormArgs,
    },
    /// Validate the create-transfer form
    TransferCreate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Ask the console to test the connection described by the form
    TestConnection {
        #[command(flatten)]
        form: FormArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Form field value, repeatable
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// File with one KEY=VALUE field per line; --field values take precedence
    #[arg(long, value_name = "PATH")]
    pub form_file: Option<PathBuf>,

    /// Write the JSON feedback to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
