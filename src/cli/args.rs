use clap::{ArgAction, Parser};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nARGUMENTS:\n{positionals}\n\
\nOPTIONS:\n{options}\n\
{after-help}\n";

const AFTER_HELP: &str = "\
ENVIRONMENT:
    API_HOST       Base URL of the Spinnaker API (required)
    API_SESSION    Value of the SESSION cookie sent with the request (optional)

Example:
    API_HOST=https://gate.example.com spin-dcd-converter myapp 3f1c2a9e > template.yml";

#[derive(Parser, Debug)]
#[command(name = "spin-dcd-converter")]
#[command(version = crate::VERSION)]
#[command(about = "Convert a Spinnaker pipeline config into a pipeline template")]
#[command(help_template = HELP_TEMPLATE)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Application that owns the pipeline
    #[arg(value_name = "APP")]
    pub app: String,

    /// Identifier of the pipeline config to convert
    #[arg(value_name = "PIPELINE_CONFIG_ID")]
    pub pipeline_config_id: String,

    /// Log the endpoint, cookie, and raw response to stderr (true, 1, yes)
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_truthy
    )]
    pub debug: bool,
}

/// `true`, `1` and `yes` (any case) enable the flag; every other value disables it.
pub fn parse_truthy(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    ))
}
