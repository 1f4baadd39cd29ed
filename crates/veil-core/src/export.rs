//! Standalone-document export contract
//!
//! Re-opening the front-end inside an about:blank window or a blob
//! document is the embedding shell's job. The controller only decides
//! when to delegate, based on the auto-navigation settings.

use crate::Result;

pub trait PageExporter: Send + Sync {
    fn open_about_blank(&self) -> Result<()>;
    fn open_blob(&self) -> Result<()>;
}

/// Exporter used until the embedder installs a real one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExporter;

impl PageExporter for NoopExporter {
    fn open_about_blank(&self) -> Result<()> {
        tracing::debug!("about:blank export requested with no exporter installed");
        Ok(())
    }

    fn open_blob(&self) -> Result<()> {
        tracing::debug!("blob export requested with no exporter installed");
        Ok(())
    }
}
