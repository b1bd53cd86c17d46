//! 폴더 탐색 모듈
//!
//! 대상 폴더 아래의 변환 후보 파일을 지연(lazy) 방식으로 나열합니다.
//! 루트 폴더를 읽을 수 없는 경우에만 실패하며, 하위 항목의 에러는
//! 경고를 남기고 건너뜁니다.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Result, SjconvError};
use crate::filter::FileFilter;

/// 변환 후보 파일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 파일 경로
    pub path: PathBuf,
    /// 루트로부터 파일이 들어 있는 폴더까지의 깊이 (루트 바로 아래는 0)
    pub depth: usize,
}

impl Candidate {
    /// 파일 확장자 (점 제외)
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|s| s.to_str())
    }

    /// 루트 기준 상대 경로 (출력용)
    pub fn relative_to<'a>(&'a self, root: &Path) -> &'a Path {
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}

/// 후보 파일 이터레이터
pub struct CandidateFiles<'a> {
    walker: walkdir::IntoIter,
    filter: &'a FileFilter,
    warnings: usize,
}

/// 후보 파일 탐색 시작
///
/// # Arguments
/// * `root` - 대상 폴더
/// * `max_depth` - 최대 하위 폴더 깊이 (0이면 루트 바로 아래 파일만)
/// * `filter` - 파일 이름 필터
///
/// # Returns
/// 후보 파일 이터레이터 또는 루트 폴더 에러
pub fn candidates<'a>(
    root: &Path,
    max_depth: usize,
    filter: &'a FileFilter,
) -> Result<CandidateFiles<'a>> {
    let metadata = fs::metadata(root).map_err(|e| SjconvError::RootUnreadable {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(SjconvError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    // 목록 권한은 metadata로 알 수 없으므로 직접 열어 본다
    fs::read_dir(root).map_err(|e| SjconvError::RootUnreadable {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    // walkdir 깊이: 루트 자신이 0, 루트 바로 아래 항목이 1
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .sort_by_file_name()
        .into_iter();

    Ok(CandidateFiles {
        walker,
        filter,
        warnings: 0,
    })
}

impl CandidateFiles<'_> {
    /// 지금까지 발생한 탐색 경고 수
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    fn warn_entry(&mut self, path: Option<&Path>, reason: &dyn std::fmt::Display) {
        self.warnings += 1;
        match path {
            Some(p) => warn!("항목에 접근할 수 없어 건너뜁니다 ({}): {}", p.display(), reason),
            None => warn!("항목에 접근할 수 없어 건너뜁니다: {}", reason),
        }
    }
}

impl Iterator for CandidateFiles<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf);
                    self.warn_entry(path.as_deref(), &err);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }

            if !self.filter.matches(entry.file_name()) {
                continue;
            }

            if file_type.is_symlink() {
                // 파일을 가리키는 심볼릭 링크만 후보로 인정
                match fs::metadata(entry.path()) {
                    Ok(target) if target.is_file() => {}
                    Ok(_) => continue,
                    Err(e) => {
                        self.warn_entry(Some(entry.path()), &e);
                        continue;
                    }
                }
            } else if !file_type.is_file() {
                continue;
            }

            return Some(Candidate {
                depth: entry.depth() - 1,
                path: entry.into_path(),
            });
        }
    }
}
