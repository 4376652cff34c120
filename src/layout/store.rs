use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

/// Durable key-value backing for the column layout.
///
/// Two logical keys: the column order (ordered list) and the
/// visible-column set (list, order insignificant). A read that fails to
/// parse degrades to None so the manager can fall back to defaults.
pub trait LayoutStore {
    fn read_order(&self) -> Option<Vec<String>>;
    fn read_visible(&self) -> Option<Vec<String>>;
    fn write_order(&mut self, order: &[String]) -> Result<()>;
    fn write_visible(&mut self, visible: &[String]) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

const ORDER_FILE: &str = "column_order.json";
const VISIBLE_FILE: &str = "visible_columns.json";

/// Layout store backed by two JSON files in the user's config directory.
pub struct FileLayoutStore {
    dir: PathBuf,
}

impl FileLayoutStore {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(Self {
            dir: config_dir.join("strat-scanner"),
        })
    }

    /// Store rooted at an explicit directory, used by tests.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_key(&self, file: &str) -> Option<Vec<String>> {
        let path = self.dir.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(target: "layout", "failed to read {:?}: {}", path, e);
                return None;
            }
        };
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(keys) => Some(keys),
            Err(e) => {
                warn!(target: "layout", "malformed layout state in {:?}: {}", path, e);
                None
            }
        }
    }

    fn write_key(&self, file: &str, keys: &[String]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string(keys)?;
        fs::write(self.dir.join(file), contents)?;
        Ok(())
    }

    fn remove_key(&self, file: &str) -> Result<()> {
        match fs::remove_file(self.dir.join(file)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl LayoutStore for FileLayoutStore {
    fn read_order(&self) -> Option<Vec<String>> {
        self.read_key(ORDER_FILE)
    }

    fn read_visible(&self) -> Option<Vec<String>> {
        self.read_key(VISIBLE_FILE)
    }

    fn write_order(&mut self, order: &[String]) -> Result<()> {
        self.write_key(ORDER_FILE, order)
    }

    fn write_visible(&mut self, visible: &[String]) -> Result<()> {
        self.write_key(VISIBLE_FILE, visible)
    }

    fn clear(&mut self) -> Result<()> {
        self.remove_key(ORDER_FILE)?;
        self.remove_key(VISIBLE_FILE)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    pub order: Option<Vec<String>>,
    pub visible: Option<Vec<String>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn read_order(&self) -> Option<Vec<String>> {
        self.order.clone()
    }

    fn read_visible(&self) -> Option<Vec<String>> {
        self.visible.clone()
    }

    fn write_order(&mut self, order: &[String]) -> Result<()> {
        self.order = Some(order.to_vec());
        Ok(())
    }

    fn write_visible(&mut self, visible: &[String]) -> Result<()> {
        self.visible = Some(visible.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.order = None;
        self.visible = None;
        Ok(())
    }
}
