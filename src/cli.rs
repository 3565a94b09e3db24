use clap::Parser;

/// Generate an attribution file from a third-party component list
#[derive(Parser, Debug)]
#[command(name = "oss-attribution")]
#[command(version)]
#[command(
    about = "Generate an attribution file from a third-party component list",
    long_about = None
)]
pub struct Args {
    /// Path to the component list (.xlsx, .xls, .csv, .json, .yaml, .yml)
    #[arg(short, long)]
    pub input: String,

    /// Output file path (writes to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// License text dictionary (YAML mapping of identifier to text)
    #[arg(short, long, default_value = "licenses.yaml")]
    pub licenses: String,

    /// Template definitions (YAML mapping of template name to format string)
    #[arg(short, long, default_value = "templates.yaml")]
    pub templates: String,

    /// Project configuration (YAML with project_name and copyright holders)
    #[arg(short = 'c', long = "config", default_value = "project_config.yaml")]
    pub config: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
