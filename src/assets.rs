//! Text sprites loaded from the resource directory.
//!
//! A sprite file is plain text; each line is one row.  Its bounding box is
//! the longest line by the number of lines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::Size;
use crate::error::AssetError;

/// Resource directory shipped with the crate.
pub fn default_resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("res")
}

/// Path of the sprite `name` under `dir`.
pub fn sprite_path(dir: &Path, name: &str) -> PathBuf {
    dir.join("images").join(format!("{name}.txt"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteArt {
    pub rows: Vec<String>,
}

impl SpriteArt {
    pub fn load(dir: &Path, name: &str) -> Result<SpriteArt, AssetError> {
        let path = sprite_path(dir, name);
        let text = fs::read_to_string(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let art = SpriteArt::parse(&text);
        if art.width() == 0 {
            return Err(AssetError::Empty { path });
        }
        Ok(art)
    }

    /// Trailing blank lines are ignored.
    pub fn parse(text: &str) -> SpriteArt {
        let mut rows: Vec<String> = text.lines().map(|line| line.trim_end().to_string()).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        SpriteArt { rows }
    }

    pub fn width(&self) -> i32 {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn size(&self) -> Size {
        (self.width(), self.height())
    }
}
