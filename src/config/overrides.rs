//! User-supplied replacements for variant defaults.
//!
//! Every field is optional. A supplied value replaces the corresponding
//! default of the selected [`VariantPolicy`](crate::scope::VariantPolicy);
//! a blank value is the same as no value.

use std::path::{Path, PathBuf};

use crate::utils::non_blank;

/// Overrides for the documentation defaults of a variant.
///
/// Relative paths are anchored to the base directory of each resolved
/// project, so one set of overrides can be shared across a reactor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeOverrides {
    /// Destination directory of the generated documentation
    pub output_directory: Option<PathBuf>,

    /// Title placed near the top of the overview page
    pub doctitle: Option<String>,

    /// Title placed in the HTML title tag
    pub windowtitle: Option<String>,

    /// Overview source file
    pub overview: Option<PathBuf>,

    /// Directory of extra documentation resources (package.html, images, ...)
    pub resource_directory: Option<PathBuf>,
}

fn non_blank_str(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ScopeOverrides {
    /// Configured output directory, if not blank.
    #[must_use]
    pub fn output_directory(&self) -> Option<&Path> {
        non_blank(self.output_directory.as_deref())
    }

    /// Configured doctitle, if not blank.
    #[must_use]
    pub fn doctitle(&self) -> Option<&str> {
        non_blank_str(self.doctitle.as_deref())
    }

    /// Configured window title, if not blank.
    #[must_use]
    pub fn windowtitle(&self) -> Option<&str> {
        non_blank_str(self.windowtitle.as_deref())
    }

    /// Configured overview file, if not blank.
    #[must_use]
    pub fn overview(&self) -> Option<&Path> {
        non_blank(self.overview.as_deref())
    }

    /// Configured resource directory, if not blank.
    #[must_use]
    pub fn resource_directory(&self) -> Option<&Path> {
        non_blank(self.resource_directory.as_deref())
    }
}
