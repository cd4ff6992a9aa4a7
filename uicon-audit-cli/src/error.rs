use thiserror::Error;

/// Errors that abort an audit run. Any of these means no report is written.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] uicon_audit_catalog::CatalogError),

    #[error("Asset listing error: {0}")]
    Assets(#[from] uicon_audit_assets::AssetError),

    #[error("Report error: {0}")]
    Report(#[from] uicon_audit_report::ReportError),
}
