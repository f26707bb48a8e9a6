/// Folder browser model behind the picker widget.
///
/// Keeps the directory currently shown, its subfolders, and the text of the
/// path field. All filesystem access happens here so the widget stays a pure
/// view and the navigation can be tested without a window.
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FolderBrowser {
    /// Directory being shown; this is what a sweep would run on.
    pub current: PathBuf,
    /// Immediate subfolders of `current`, sorted case-insensitively.
    pub subfolders: Vec<PathBuf>,
    /// Editable path field.
    pub path_input: String,
    /// Last navigation problem, shown under the path field.
    pub error: Option<String>,
}

impl FolderBrowser {
    /// Open the browser at `start`, or at the first root if `start` is not
    /// a readable folder.
    pub fn new(start: PathBuf) -> Self {
        let mut browser = Self {
            current: PathBuf::new(),
            subfolders: Vec::new(),
            path_input: String::new(),
            error: None,
        };
        if !browser.navigate_to(start) {
            let fallback = filesystem_roots()
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from("/"));
            browser.navigate_to(fallback);
        }
        browser
    }

    /// Show `path`. Returns `false` (and sets `error`) if it is not a folder.
    pub fn navigate_to(&mut self, path: PathBuf) -> bool {
        if !path.is_dir() {
            self.error = Some(format!("Not a folder: {}", path.display()));
            return false;
        }
        self.path_input = path.to_string_lossy().into_owned();
        self.current = path;
        self.error = None;
        self.refresh();
        true
    }

    /// Navigate to whatever was typed into the path field.
    pub fn apply_input(&mut self) -> bool {
        let typed = PathBuf::from(self.path_input.trim());
        self.navigate_to(typed)
    }

    /// Go to the parent folder. No-op at a filesystem root.
    pub fn go_up(&mut self) -> bool {
        match self.current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                let parent = parent.to_path_buf();
                self.navigate_to(parent)
            }
            _ => false,
        }
    }

    /// Re-read the subfolders of `current`. Unreadable entries are left out.
    pub fn refresh(&mut self) {
        self.subfolders = list_subfolders(&self.current);
        debug!(
            "{} subfolders in {}",
            self.subfolders.len(),
            self.current.display()
        );
    }

    pub fn selection(&self) -> &Path {
        &self.current
    }
}

fn list_subfolders(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut folders: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    folders.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    folders
}

/// Starting folder: the user's home directory, else the working directory.
pub fn default_start_dir() -> PathBuf {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
        .filter(|p| p.is_dir())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Filesystem roots offered as shortcuts: drive letters on Windows, `/`
/// elsewhere.
pub fn filesystem_roots() -> Vec<PathBuf> {
    if cfg!(windows) {
        (b'A'..=b'Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
            .filter(|p| p.is_dir())
            .collect()
    } else {
        vec![PathBuf::from("/")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_sorted_subfolders_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::create_dir(tmp.path().join("Alpha")).unwrap();
        fs::write(tmp.path().join("file.pdf"), b"x").unwrap();

        let browser = FolderBrowser::new(tmp.path().to_path_buf());
        let names: Vec<String> = browser
            .subfolders
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
        assert_eq!(browser.selection(), tmp.path());
    }

    #[test]
    fn navigate_down_and_up() {
        let tmp = TempDir::new().unwrap();
        let child = tmp.path().join("child");
        fs::create_dir(&child).unwrap();

        let mut browser = FolderBrowser::new(tmp.path().to_path_buf());
        assert!(browser.navigate_to(child.clone()));
        assert_eq!(browser.current, child);
        assert_eq!(browser.path_input, child.to_string_lossy());

        assert!(browser.go_up());
        assert_eq!(browser.current, tmp.path());
    }

    /// Typing a file path keeps the current folder and reports the problem.
    #[test]
    fn invalid_input_sets_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        let mut browser = FolderBrowser::new(tmp.path().to_path_buf());
        browser.path_input = file.to_string_lossy().into_owned();
        assert!(!browser.apply_input());
        assert_eq!(browser.current, tmp.path());
        assert!(browser.error.as_deref().unwrap().starts_with("Not a folder"));

        browser.path_input = format!("  {}  ", tmp.path().display());
        assert!(browser.apply_input());
        assert!(browser.error.is_none());
    }

    #[test]
    fn missing_start_falls_back_to_a_root() {
        let tmp = TempDir::new().unwrap();
        let browser = FolderBrowser::new(tmp.path().join("missing"));
        assert!(browser.current.is_dir());
    }
}
