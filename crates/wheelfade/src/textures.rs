use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fadeconfig::TextureEntry;
use image::GenericImageView;

/// Decoded image resource bound to a ring slot name. The pixel data itself
/// stays with the rendering collaborator; the controllers only ever see slot
/// names.
#[derive(Debug, Clone)]
pub struct LoadedTexture {
    pub name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct TextureSet {
    textures: HashMap<String, LoadedTexture>,
}

impl TextureSet {
    pub fn get(&self, name: &str) -> Option<&LoadedTexture> {
        self.textures.get(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Eagerly decodes every texture in ring order. Any failure aborts startup
/// before the controllers begin operating; there is no placeholder fallback
/// because the working set is small and fixed for the session.
pub fn load_textures(base: &Path, entries: &[TextureEntry]) -> Result<TextureSet> {
    let mut textures = HashMap::new();
    for entry in entries {
        let path = resolve(base, &entry.path);
        let decoded = image::open(&path).with_context(|| {
            format!(
                "failed to load texture '{}' from {}",
                entry.name,
                path.display()
            )
        })?;
        let (width, height) = decoded.dimensions();
        tracing::debug!(
            name = %entry.name,
            path = %path.display(),
            width,
            height,
            "decoded texture"
        );
        textures.insert(
            entry.name.clone(),
            LoadedTexture {
                name: entry.name.clone(),
                path,
                width,
                height,
            },
        );
    }
    Ok(TextureSet { textures })
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
