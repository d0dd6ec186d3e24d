use std::{env, str::FromStr};

use dotenvy;

use crate::{
    constants::{
        COLUMNS_KEY, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SIZE, DEFAULT_STEPS_PER_FRAME,
        ROWS_KEY, SEED_KEY, SIZE_KEY, STEPS_PER_FRAME_KEY,
    },
    error::MazeError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub size: u32,
    pub rows: usize,
    pub columns: usize,
    pub steps_per_frame: usize,
    pub seed: Option<u64>, // `None` means a fresh random maze every run.
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Reads overrides from the process environment, after loading a `.env`
    /// file from the working directory if there is one. Unset keys keep their
    /// defaults.
    pub fn from_env() -> Result<Self, MazeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MazeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            size: read_setting(&lookup, SIZE_KEY)?.unwrap_or(defaults.size),
            rows: read_setting(&lookup, ROWS_KEY)?.unwrap_or(defaults.rows),
            columns: read_setting(&lookup, COLUMNS_KEY)?.unwrap_or(defaults.columns),
            steps_per_frame: read_setting(&lookup, STEPS_PER_FRAME_KEY)?
                .unwrap_or(defaults.steps_per_frame),
            seed: read_setting(&lookup, SEED_KEY)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.size == 0 {
            return Err(MazeError::ZeroSize);
        }
        if self.rows == 0 {
            return Err(MazeError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(MazeError::ZeroColumns);
        }
        if self.steps_per_frame == 0 {
            return Err(MazeError::ZeroStepsPerFrame);
        }
        Ok(())
    }
}

fn read_setting<T, F>(lookup: &F, key: &str) -> Result<Option<T>, MazeError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value = raw.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| MazeError::InvalidSetting {
            key: key.to_string(),
            value: raw.clone(),
        })
}
