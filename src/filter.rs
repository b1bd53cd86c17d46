//! 파일 필터 모듈
//!
//! 확장자 집합과 glob 패턴을 사용한 파일 이름 필터링을 담당합니다.

use glob::Pattern;
use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Result, SjconvError};

/// 기본 변환 대상 확장자
pub const DEFAULT_EXTENSIONS: &[&str] = &["csv", "txt"];

/// 변환 대상 파일 필터
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    pattern: Option<Pattern>,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            pattern: None,
        }
    }
}

impl FileFilter {
    /// 새 필터 생성
    ///
    /// # Arguments
    /// * `extensions` - 허용할 확장자 목록 (앞의 점은 있어도 없어도 됨, 대소문자 구분)
    /// * `pattern` - 글로브 패턴 문자열 (None이면 확장자만 검사)
    ///
    /// # Examples
    /// ```
    /// use sjconv::filter::FileFilter;
    ///
    /// let filter = FileFilter::new(vec![".csv".to_string()], Some("sales_*".to_string())).unwrap();
    /// assert!(filter.matches("sales_2024.csv"));
    /// assert!(!filter.matches("sales_2024.txt"));
    /// assert!(!filter.matches("stock.csv"));
    /// ```
    pub fn new(extensions: Vec<String>, pattern: Option<String>) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();

        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p).map_err(|_| SjconvError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self {
            extensions,
            pattern: compiled,
        })
    }

    /// 파일 이름이 확장자와 패턴 조건을 모두 만족하는지 확인
    ///
    /// 이름이 UTF-8이 아니어도(예: Shift-JIS 파일명) 확장자는 `OsStr`로 비교하고,
    /// 패턴은 손실 변환한 이름에 적용합니다.
    pub fn matches(&self, file_name: impl AsRef<Path>) -> bool {
        let file_name = file_name.as_ref();
        self.matches_extension(file_name)
            && match &self.pattern {
                Some(p) => p.matches(&file_name.to_string_lossy()),
                None => true,
            }
    }

    /// 확장자만 검사 (대소문자 구분)
    pub fn matches_extension(&self, file_name: impl AsRef<Path>) -> bool {
        file_name
            .as_ref()
            .extension()
            .map(|ext| self.extensions.iter().any(|e| OsStr::new(e) == ext))
            .unwrap_or(false)
    }

    /// 허용 확장자 목록
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// 패턴이 설정되어 있는지 확인
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}
