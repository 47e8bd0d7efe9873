use crate::{
    cli::args::Args,
    core::{
        client::{ApiSettings, PipelineConfigClient},
        error::AppError,
        lint,
        pipeline_config::PipelineConfig,
        render,
    },
};
use serde_json::Value;
use std::io::{self, Write};

/// Fetch the requested pipeline config, convert it, and write the template to stdout.
pub async fn convert(args: Args) -> Result<(), AppError> {
    let settings = ApiSettings::from_env()?;
    let client = PipelineConfigClient::new(settings);
    let source = client.fetch(&args.app, &args.pipeline_config_id).await?;

    let rendered = convert_document(&source)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}

/// Convert an already retrieved document and render it, logging stage graph warnings.
pub fn convert_document(source: &Value) -> Result<String, AppError> {
    let template = crate::core::convert(source)?;

    let stages = PipelineConfig::new(source)?.stages()?;
    lint::log_results(&lint::lint_stages(&stages));

    tracing::info!(
        owner = %template.metadata.owner,
        stages = template.stages.len(),
        "rendered pipeline template"
    );
    render(&template)
}
