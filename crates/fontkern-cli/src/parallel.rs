//! Parallel file processing utilities.

use std::{
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use log::{error, info};
use rayon::prelude::*;

/// Result of a parallel batch operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if self.failed > 0 {
            bail!("{operation} failed: {} succeeded, {} failed", self.succeeded, self.failed);
        }
        Ok(())
    }
}

/// Render every file in parallel and write the successful reports to
/// `out` in input order. Failures are logged and counted.
pub fn render_parallel<F>(
    label: &str,
    files: &[PathBuf],
    out: &mut impl Write,
    render: F,
) -> Result<BatchResult>
where
    F: Fn(&Path) -> Result<String> + Sync,
{
    let reports: Vec<_> = files
        .par_iter()
        .map(|path| render(path).with_context(|| format!("Failed to process {}", path.display())))
        .collect();

    let mut result = BatchResult::default();
    for report in reports {
        match report {
            Ok(text) => {
                out.write_all(text.as_bytes()).context("Failed to write output")?;
                result.succeeded += 1;
            }
            Err(e) => {
                error!("{e:?}");
                result.failed += 1;
            }
        }
    }

    info!("{label}: {} succeeded, {} failed", result.succeeded, result.failed);
    Ok(result)
}

/// [`render_parallel`] to stdout, failing when any file failed.
pub fn run_parallel<F>(label: &str, files: &[PathBuf], render: F) -> Result<()>
where
    F: Fn(&Path) -> Result<String> + Sync,
{
    let mut out = stdout().lock();
    render_parallel(label, files, &mut out, render)?.ok_or_bail(label)
}
