use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const IMAGE_EXTS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Base-name index over a local image tree. Built once per run; lookups are
/// by file name, so CSV "saved to" paths from another machine still resolve.
#[derive(Debug, Default)]
pub struct ImageIndex {
    entries: HashMap<String, String>,
}

impl ImageIndex {
    /// Walk `images_root` recursively and index every recognized image file
    /// by base-name. The first file seen for a name wins; later files with
    /// the same name in other subdirectories are ignored. Directory entries
    /// are visited in sorted order so the collision policy is deterministic.
    /// A missing root yields an empty index, not an error.
    ///
    /// Indexed paths are project-relative: a relative root keeps the walked
    /// path as-is, an absolute root is relativized against its parent so the
    /// emitted catalog carries `<root-dir>/...` paths, not machine-specific
    /// prefixes.
    pub fn build(images_root: &Path) -> Self {
        let mut entries = HashMap::new();
        if images_root.is_dir() {
            let base = if images_root.is_absolute() {
                images_root
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
            } else {
                None
            };
            visit(images_root, base, &mut entries);
        } else {
            warn!(
                "Image directory {} not found; products will fall back to raw URLs",
                images_root.display()
            );
        }
        ImageIndex { entries }
    }

    pub fn lookup(&self, file_name: &str) -> Option<&str> {
        self.entries.get(file_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn visit(dir: &Path, base: Option<&Path>, entries: &mut HashMap<String, String>) {
    let mut paths = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect::<Vec<_>>(),
        Err(e) => {
            debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };
    paths.sort();

    for path in paths {
        if path.is_dir() {
            visit(&path, base, entries);
        } else if is_image(&path) {
            if let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) {
                let rel = base
                    .and_then(|base| path.strip_prefix(base).ok())
                    .unwrap_or(&path);
                let rel = rel.to_string_lossy().replace('\\', "/");
                entries.entry(name).or_insert(rel);
            }
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTS.contains(&ext.as_str()))
}
