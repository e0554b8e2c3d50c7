use std::path::PathBuf;

use docread_core::analysis::AnalyzeResult;
use docread_core::report::render_read_report;
use serde::{Deserialize, Serialize};

use crate::analyze::client::{content_type_for, AnalyzeBody, ClientError, DocumentClient, READ_MODEL};
use crate::analyze::DiConfig;
use crate::prelude::{println, *};

/// Options for analyzing a document with the read model
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ReadOptions {
    /// Path to a local document (PDF or image) to analyze
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Publicly accessible URL of the document to analyze
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Output the raw analyze result as JSON
    #[arg(long)]
    pub json: bool,
}

/// The document to analyze: exactly one of a local path or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// Enforce the exactly-one-of constraint before any network activity.
    pub fn new(file: Option<PathBuf>, url: Option<String>) -> Result<Self, Error> {
        match (file, url) {
            (Some(_), Some(_)) => Err(Error::InvalidInput(
                "provide only one of --file or --url".to_string(),
            )),
            (None, None) => Err(Error::InvalidInput(
                "provide a --file or a --url".to_string(),
            )),
            (Some(path), None) => Ok(Self::File(path)),
            (None, Some(url)) => Ok(Self::Url(url)),
        }
    }
}

/// Analyze a local or remote document with the prebuilt read model.
///
/// For a file source the full binary content is read and submitted; for a URL
/// the service fetches the document itself. Blocks until the remote operation
/// completes. Any failure past this point, file I/O included, comes back as
/// `Error::AnalysisFailed` with the cause attached.
pub async fn analyze_read_data(
    client: &DocumentClient,
    source: DocumentSource,
) -> Result<AnalyzeResult, Error> {
    let body = match source {
        DocumentSource::File(path) => {
            let data = tokio::fs::read(&path)
                .await
                .map_err(|source| ClientError::Read {
                    path: path.clone(),
                    source,
                })?;
            AnalyzeBody::Bytes {
                content_type: content_type_for(&path),
                data,
            }
        }
        DocumentSource::Url(url) => AnalyzeBody::UrlSource(url),
    };

    Ok(client.submit_and_wait(READ_MODEL, body).await?)
}

/// Handle the read command
pub async fn handler(options: ReadOptions, global: crate::Global) -> Result<()> {
    let source = DocumentSource::new(options.file, options.url)?;
    let config = DiConfig::from_env()?;
    let client = DocumentClient::new(&config)?;

    if global.verbose {
        println!("Submitting {source:?} to the '{READ_MODEL}' model...");
    }

    let result = analyze_read_data(&client, source).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_report(&result);
    }

    Ok(())
}

/// Print the rendered report to stdout, one line at a time.
fn display_report(result: &AnalyzeResult) {
    for line in render_read_report(result) {
        println!("{line}");
    }
}
