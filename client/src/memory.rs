use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

/// Remembers the last username that logged in, so the login prompt can be
/// prefilled next time.
pub trait UsernameMemory: Send {
    fn load(&self) -> Option<String>;
    fn save(&mut self, username: &str);
}

#[derive(Debug, Default)]
pub struct InMemoryUsername {
    username: Option<String>,
}

impl InMemoryUsername {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsernameMemory for InMemoryUsername {
    fn load(&self) -> Option<String> {
        self.username.clone()
    }

    fn save(&mut self, username: &str) {
        self.username = Some(username.to_string());
    }
}

/// Username kept in a small text file. I/O problems are logged and
/// otherwise ignored; forgetting the name is harmless.
#[derive(Debug)]
pub struct FileUsername {
    path: PathBuf,
}

impl FileUsername {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UsernameMemory for FileUsername {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let username = contents.trim();
                (!username.is_empty()).then(|| username.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read saved username");
                None
            }
        }
    }

    fn save(&mut self, username: &str) {
        if let Err(e) = fs::write(&self.path, username) {
            warn!(path = %self.path.display(), error = %e, "Failed to save username");
        }
    }
}
