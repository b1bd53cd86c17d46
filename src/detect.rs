//! UTF-8 판별 모듈
//!
//! 파일 앞부분(기본 4096바이트)이 구조적으로 올바른 UTF-8인지 검사합니다.
//! 표본만 보는 휴리스틱이므로, 앞부분이 우연히 UTF-8로 해석되는
//! Shift-JIS 파일은 이미 UTF-8로 판정될 수 있습니다. 전체 검사가
//! 필요하면 [`is_utf8_file_full`]을 사용합니다.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SjconvError};

/// 기본 표본 크기 (바이트)
pub const SAMPLE_SIZE: usize = 4096;

/// 바이트 표본이 올바른 UTF-8인지 확인
///
/// `truncated`가 true이면 표본이 파일 중간에서 잘린 것이므로
/// 끝에 걸린 미완성 멀티바이트 시퀀스는 무효로 보지 않습니다.
///
/// # Examples
/// ```
/// use sjconv::detect::is_valid_utf8_sample;
///
/// let bytes = "日本".as_bytes();
/// assert!(is_valid_utf8_sample(&bytes[..4], true));
/// assert!(!is_valid_utf8_sample(&bytes[..4], false));
/// ```
pub fn is_valid_utf8_sample(bytes: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        // error_len()이 None이면 입력 끝에서 시퀀스가 끊긴 경우
        Err(e) => truncated && e.error_len().is_none(),
    }
}

/// 파일 앞부분이 UTF-8인지 검사
///
/// # Arguments
/// * `path` - 검사할 파일 경로
/// * `sample_size` - 읽을 최대 바이트 수
///
/// # Returns
/// UTF-8 여부 또는 I/O 에러
pub fn is_utf8_file(path: &Path, sample_size: usize) -> Result<bool> {
    let file = open(path)?;

    // 한 바이트 더 읽어서 표본이 잘렸는지 판단
    let mut buf = Vec::with_capacity(sample_size + 1);
    file.take(sample_size as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| read_error(path, e))?;

    let truncated = buf.len() > sample_size;
    buf.truncate(sample_size);

    Ok(is_valid_utf8_sample(&buf, truncated))
}

/// 파일 전체가 UTF-8인지 검사
pub fn is_utf8_file_full(path: &Path) -> Result<bool> {
    let mut file = open(path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| read_error(path, e))?;

    Ok(is_valid_utf8_sample(&buf, false))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SjconvError::Open {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_error(path: &Path, e: std::io::Error) -> SjconvError {
    SjconvError::Read {
        file: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::SHIFT_JIS;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ascii_and_utf8_are_valid() {
        assert!(is_valid_utf8_sample(b"id,name\n1,abc\n", false));
        assert!(is_valid_utf8_sample("品番,数量\n".as_bytes(), false));
        assert!(is_valid_utf8_sample(b"", false));
    }

    #[test]
    fn test_shift_jis_is_invalid() {
        let (sjis, _, _) = SHIFT_JIS.encode("日本語,テスト");
        assert!(!is_valid_utf8_sample(&sjis, false));
        assert!(!is_valid_utf8_sample(&sjis, true));
    }

    #[test]
    fn test_truncated_sequence_at_boundary() {
        let mut content = vec![b'a'; SAMPLE_SIZE - 1];
        content.extend_from_slice("日".as_bytes());

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boundary.csv");
        fs::write(&path, &content).unwrap();

        assert!(is_utf8_file(&path, SAMPLE_SIZE).unwrap());
    }

    #[test]
    fn test_incomplete_sequence_at_end_of_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("short.csv");
        let bytes = "日".as_bytes();
        fs::write(&path, &bytes[..2]).unwrap();

        assert!(!is_utf8_file(&path, SAMPLE_SIZE).unwrap());
    }

    #[test]
    fn test_file_exactly_sample_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exact.csv");
        let mut content = vec![b'a'; SAMPLE_SIZE - 2];
        content.extend_from_slice(&"日".as_bytes()[..2]);
        fs::write(&path, &content).unwrap();

        // 파일이 표본 크기와 같으면 잘린 것이 아니다
        assert!(!is_utf8_file(&path, SAMPLE_SIZE).unwrap());
    }

    #[test]
    fn test_prefix_heuristic_vs_full_check() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("late.csv");
        let mut content = vec![b'a'; SAMPLE_SIZE * 2];
        let (sjis, _, _) = SHIFT_JIS.encode("売上");
        content.extend_from_slice(&sjis);
        fs::write(&path, &content).unwrap();

        assert!(is_utf8_file(&path, SAMPLE_SIZE).unwrap());
        assert!(!is_utf8_file_full(&path).unwrap());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = is_utf8_file(&temp_dir.path().join("none.csv"), SAMPLE_SIZE);
        assert!(matches!(result, Err(SjconvError::Open { .. })));
    }
}
