//! Installation check.
//!
//! A coarse filesystem heuristic: the package counts as installed when its
//! directory exists under site-packages. Package-manager metadata is not
//! consulted here; that is the verify step's job.

use std::path::PathBuf;

use crate::platform::PackageLayout;

/// Result of looking for the package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// The package directory exists.
    Present { path: PathBuf },
    /// The package directory is absent.
    Missing { path: PathBuf },
}

impl InstallStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, InstallStatus::Present { .. })
    }

    /// The directory that was probed.
    pub fn path(&self) -> &PathBuf {
        match self {
            InstallStatus::Present { path } | InstallStatus::Missing { path } => path,
        }
    }
}

/// Probe for the package directory described by `layout`.
pub fn check_installation(layout: &PackageLayout) -> InstallStatus {
    let path = layout.package_dir();
    let present = path.is_dir();
    tracing::debug!(
        "{} {} at {}",
        layout.package,
        if present { "found" } else { "not found" },
        path.display()
    );

    if present {
        InstallStatus::Present { path }
    } else {
        InstallStatus::Missing { path }
    }
}
