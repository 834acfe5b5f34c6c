use std::fmt;

use crate::domain::AppError;

/// Repository coordinates in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || {
            AppError::config_error(format!(
                "Invalid repository '{}': expected the form 'owner/name'",
                raw
            ))
        };

        let (owner, name) = raw.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self { owner: owner.to_string(), name: name.to_string() })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
