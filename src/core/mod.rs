pub mod client;
pub mod convert;
pub mod error;
pub mod lint;
pub mod pipeline_config;
pub mod render;
pub mod template;
pub mod types;

pub use client::{ApiSettings, ClientError, PipelineConfigClient};
pub use convert::convert;
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use pipeline_config::{PipelineConfig, SourceStage};
pub use render::{render, BANNER};
pub use template::PipelineTemplate;
pub use types::*;
