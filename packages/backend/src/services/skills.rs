use std::path::{Path, PathBuf};

use skill_decay_algo::{DecayError, SkillSet};

#[derive(Debug, thiserror::Error)]
pub enum SkillDataError {
    #[error("failed to read skill data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid skill data {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DecayError,
    },
}

/// Read and parse the skill data file. Any failure is fatal for startup.
pub async fn load_skill_set(path: &Path) -> Result<SkillSet, SkillDataError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SkillDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let skills = SkillSet::from_json_str(&contents).map_err(|source| SkillDataError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), skill_count = skills.len(), "skill data loaded");
    Ok(skills)
}
