//! Parameter files.  A TOML file may hold one section per shape; any
//! missing section or field keeps its default.
//!
//! ```toml
//! [spiral]
//! radius = 2.5
//! turns = 10
//!
//! [hyperboloid]
//! u_steps = 20
//! ```

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::shapes::{Hyperboloid, Lissajous, Shape, SineWave, Spiral, Trefoil,
                    MAX_POINTS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid parameter file {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("{section}.{field} must be a finite number")]
    NonFinite { section: &'static str, field: &'static str },
    #[error("{section} needs more than {max} points")]
    TooManyPoints { section: &'static str, max: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsFile {
    pub sine: SineWave,
    pub lissajous: Lissajous,
    pub trefoil: Trefoil,
    pub hyperboloid: Hyperboloid,
    pub spiral: Spiral,
}

fn check<S: Shape>(shape: &S) -> Result<(), ConfigError> {
    if let Some(field) = shape.non_finite_field() {
        return Err(ConfigError::NonFinite { section: S::NAME, field })
    }
    if !shape.within_limit() {
        return Err(ConfigError::TooManyPoints { section: S::NAME,
                                                max: MAX_POINTS })
    }
    Ok(())
}

impl ParamsFile {
    /// Load and validate the parameter file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(),
                                                  source })?;
        let params: ParamsFile = toml::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(),
                                                   source })?;
        params.validate()?;
        Ok(params)
    }

    /// TOML allows `inf` and `nan`; reject them, and records asking
    /// for more than [`MAX_POINTS`] points.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(&self.sine)?;
        check(&self.lissajous)?;
        check(&self.trefoil)?;
        check(&self.hyperboloid)?;
        check(&self.spiral)
    }

    /// The file content with all values explicit.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sections() {
        let p: ParamsFile = toml::from_str(
            "[spiral]\nradius = 2.5\nturns = 10\n\n\
             [hyperboloid]\nu_steps = 20\n").unwrap();
        assert_eq!(p.spiral, Spiral { radius: 2.5, turns: 10,
                                      ..Default::default() });
        assert_eq!(p.hyperboloid.u_steps, 20);
        assert_eq!(p.hyperboloid.v_steps, 50);
        assert_eq!(p.sine, SineWave::default());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn empty_file() {
        let p: ParamsFile = toml::from_str("").unwrap();
        assert_eq!(p, ParamsFile::default());
    }

    #[test]
    fn unknown_field() {
        assert!(toml::from_str::<ParamsFile>("[trefoil]\nstart = 1.0\n")
                .is_err());
        assert!(toml::from_str::<ParamsFile>("[torus]\nr = 1.0\n").is_err());
    }

    #[test]
    fn non_finite() {
        let p: ParamsFile = toml::from_str("[trefoil]\nt_end = inf\n")
            .unwrap();
        match p.validate() {
            Err(ConfigError::NonFinite { section, field }) => {
                assert_eq!((section, field), ("trefoil", "t_end"));
            }
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn too_many_points() {
        let p: ParamsFile = toml::from_str(
            "[spiral]\nturns = 1000000\npoints_per_turn = 1000000\n")
            .unwrap();
        match p.validate() {
            Err(ConfigError::TooManyPoints { section, max }) => {
                assert_eq!((section, max), ("spiral", MAX_POINTS));
            }
            r => panic!("unexpected {:?}", r),
        }
        let p: ParamsFile = toml::from_str("[sine]\nn = 10000000\n").unwrap();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn round_trip_defaults() {
        let text = ParamsFile::default().to_toml().unwrap();
        let p: ParamsFile = toml::from_str(&text).unwrap();
        assert_eq!(p, ParamsFile::default());
    }

    #[test]
    fn missing_file() {
        let r = ParamsFile::load(Path::new("/nonexistent/params.toml"));
        assert!(matches!(r, Err(ConfigError::Read { .. })));
    }
}
