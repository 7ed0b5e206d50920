use crate::context::CONFIG_RELATIVE_PATH;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A temporary search root holding `acs_tests/config/acs_run_config.ini`.
pub(crate) fn create_config_tree(contents: &str) -> TempDir {
    create_config_tree_bytes(contents.as_bytes())
}

pub(crate) fn create_config_tree_bytes(contents: &[u8]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(CONFIG_RELATIVE_PATH);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    temp_dir
}

/// A config covering every domain.
pub(crate) const FULL_CONFIG: &str = "\
[AUTOMATION]
config_enabled_for_automation_run = true

[BSA]
automation_bsa_run = true
bsa_modules = pcie
bsa_tests = 1,2,3

[SBSA]
automation_sbsa_run = false
sbsa_level = 4

[SCT]
automation_sct_run = true
sct_ui_mode = false
sct_sequence_file = SR.seq

[BBSR_SCT]
automation_bbsr_sct_run = true
bbsr_sct_sequence_file = BBSR.seq

[SCRT]
automation_scrt_run = false
";
