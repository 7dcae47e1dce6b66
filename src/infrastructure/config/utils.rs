//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::{Path, PathBuf};

/// 실행할 프로그램의 실제 경로를 찾는다.
/// 경로 구분자가 포함되면 파일 존재만 검사하고, 아니면 `PATH`를 순회한다.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.trim().is_empty() {
        return None;
    }

    let program_path = Path::new(program);
    if program_path.components().count() > 1 {
        return program_path.is_file().then(|| program_path.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;

    #[cfg(windows)]
    {
        // Windows는 확장자를 생략할 수 있으므로 PATHEXT를 고려한다.
        let has_ext = program_path.extension().is_some();
        let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
        let exts: Vec<String> = pathext
            .to_string_lossy()
            .split(';')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        for dir in env::split_paths(&path_var) {
            let candidate = dir.join(program);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !has_ext {
                for ext in &exts {
                    let candidate = dir.join(format!("{program}{ext}"));
                    if candidate.is_file() {
                        return Some(candidate);
                    }
                }
            }
        }
        return None;
    }

    #[cfg(not(windows))]
    {
        env::split_paths(&path_var)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_program_is_never_found() {
        assert!(find_program("").is_none());
        assert!(find_program("   ").is_none());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("frontdesk");
        std::fs::write(&script, "").unwrap();

        assert_eq!(find_program(script.to_str().unwrap()), Some(script.clone()));
        assert!(find_program(dir.path().join("nope").to_str().unwrap()).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn finds_shell_on_path() {
        assert!(find_program("sh").is_some());
    }
}
