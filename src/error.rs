//! 에러 타입 정의 모듈
//!
//! sjconv에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 루트 폴더 관련 에러는 실행 전체를 중단시키고, 파일 단위 에러는
//! 해당 파일만 건너뜁니다.

use std::path::PathBuf;
use thiserror::Error;

/// sjconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum SjconvError {
    /// 대상 폴더를 열거나 목록을 읽을 수 없음
    #[error("대상 폴더를 읽을 수 없습니다 ({path}): {reason}")]
    RootUnreadable { path: PathBuf, reason: String },

    /// 대상 경로가 폴더가 아님
    #[error("대상 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    Open { file: PathBuf, reason: String },

    /// 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {reason}")]
    Read { file: PathBuf, reason: String },

    /// Shift-JIS로 해석할 수 없는 바이트 시퀀스
    #[error("Shift-JIS 디코딩 실패 ({file}): 오프셋 {offset}의 바이트 0x{byte:02X}")]
    Decode {
        file: PathBuf,
        offset: usize,
        byte: u8,
    },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    Write { file: PathBuf, reason: String },
}

impl SjconvError {
    /// 실행 전체를 중단해야 하는 에러인지 확인
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SjconvError::RootUnreadable { .. }
                | SjconvError::NotADirectory { .. }
                | SjconvError::InvalidPattern { .. }
        )
    }
}

/// sjconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, SjconvError>;
