use crate::Platform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Executables probed inside macOS `.app` bundles, in preference order.
const MAC_BUNDLE_NAMES: [&str; 3] = ["Google Chrome for Testing", "Chromium", "Google Chrome"];

/// Recursively collect every path in `dir` that looks like a Chrome or
/// Chromium executable for `platform`, in scan order. Unreadable
/// directories are skipped.
pub fn collect_candidates(dir: &Path, platform: Platform) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    walk(dir, platform, &mut candidates);
    candidates
}

fn walk(dir: &Path, platform: Platform, candidates: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if platform == Platform::MacOs && path.extension().is_some_and(|e| e == "app") {
                for name in MAC_BUNDLE_NAMES {
                    let exec = path.join("Contents").join("MacOS").join(name);
                    if exec.exists() {
                        trace!(path = %exec.display(), "found bundle executable");
                        candidates.push(exec);
                    }
                }
            }
            walk(&path, platform, candidates);
        } else if matches_name(&entry.file_name().to_string_lossy(), platform) {
            trace!(path = %path.display(), "found candidate executable");
            candidates.push(path);
        }
    }
}

fn matches_name(name: &str, platform: Platform) -> bool {
    match platform {
        Platform::Windows => name == "chrome.exe" || name == "chromium.exe",
        Platform::MacOs | Platform::Linux => name == "chrome" || name == "chromium",
    }
}

/// Preference score: Chrome for Testing beats a plain `chrome` binary,
/// which beats anything else (Chromium).
fn score(path: &Path) -> u8 {
    if path.to_string_lossy().contains("Google Chrome for Testing") {
        3
    } else if path
        .file_name()
        .is_some_and(|n| n == "chrome" || n == "chrome.exe")
    {
        2
    } else {
        1
    }
}

/// Sort candidates by descending preference, keeping scan order among ties.
pub fn rank(mut candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    candidates.sort_by(|a, b| score(b).cmp(&score(a)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    #[test]
    fn test_collects_plain_binaries_recursively() {
        let temp = tempfile::tempdir().unwrap();
        let chrome = temp.path().join("chrome/linux-120/chrome-linux64/chrome");
        let chromium = temp.path().join("chromium/chromium");
        touch(&chrome);
        touch(&chromium);
        touch(&temp.path().join("chrome/linux-120/libEGL.so"));

        let mut found = collect_candidates(temp.path(), Platform::Linux);
        found.sort();

        assert_eq!(found, {
            let mut expected = vec![chrome, chromium];
            expected.sort();
            expected
        });
    }

    #[test]
    fn test_windows_matches_exe_names_only() {
        let temp = tempfile::tempdir().unwrap();
        touch(&temp.path().join("win64/chrome.exe"));
        touch(&temp.path().join("win64/chrome"));
        touch(&temp.path().join("win64/chromium.exe"));

        let found = collect_candidates(temp.path(), Platform::Windows);

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.extension().is_some_and(|e| e == "exe")));
    }

    #[test]
    fn test_macos_probes_app_bundles_in_preference_order() {
        let temp = tempfile::tempdir().unwrap();
        let bundle = temp.path().join("Google Chrome for Testing.app");
        let testing = bundle.join("Contents/MacOS/Google Chrome for Testing");
        let chromium = bundle.join("Contents/MacOS/Chromium");
        touch(&chromium);
        touch(&testing);

        let found = collect_candidates(temp.path(), Platform::MacOs);

        assert_eq!(found[0], testing);
        assert!(found.contains(&chromium));
    }

    #[test]
    fn test_rank_prefers_chrome_for_testing() {
        let chromium = PathBuf::from("/cache/Chromium/chromium");
        let testing = PathBuf::from("/cache/Google Chrome for Testing/chrome");
        let plain = PathBuf::from("/cache/chrome-linux64/chrome");

        let ranked = rank(vec![chromium.clone(), plain.clone(), testing.clone()]);

        assert_eq!(ranked, vec![testing, plain, chromium]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let a = PathBuf::from("/cache/a/chromium");
        let b = PathBuf::from("/cache/b/chromium");

        let ranked = rank(vec![a.clone(), b.clone()]);

        assert_eq!(ranked, vec![a, b]);
    }

    #[test]
    fn test_missing_directory_yields_no_candidates() {
        let found = collect_candidates(Path::new("/nonexistent/cache"), Platform::Linux);
        assert!(found.is_empty());
    }
}
