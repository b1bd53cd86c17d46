//! sjconv - SHIFT-JIS TO UTF-8 CONVERTER
//!
//! 폴더 내 레거시 Shift-JIS CSV/TXT 파일을 찾아 UTF-8로 덮어쓰는 일괄 변환 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **UTF-8 판별**: 파일 앞 4096바이트로 이미 UTF-8인 파일은 건너뜀
//! - 🔤 **엄격한 디코딩**: 대응 문자가 없는 바이트가 있으면 대체 문자 없이 실패
//! - 📏 **깊이 제한 탐색**: `-r <깊이>`로 하위 폴더 탐색 범위 지정
//! - 🎯 **필터링**: 확장자(기본 csv, txt)와 glob 패턴으로 대상 선택
//! - 🧪 **드라이런 모드**: 실제 변환 없이 변환 대상 파일 확인
//! - 📊 **처리 통계**: 변환/건너뜀/실패 수와 처리 용량 표시
//!
//! 파일은 한 번에 하나씩 순차 처리되며, 한 파일의 실패는 다른 파일에
//! 영향을 주지 않습니다. 원본은 백업 없이 제자리에서 덮어씁니다.
//!
//! # 예제
//!
//! ```bash
//! # 대상 폴더 바로 아래 파일만
//! sjconv ./exports
//!
//! # 2단계 하위 폴더까지
//! sjconv ./exports -r 2
//!
//! # 변환 대상만 확인
//! sjconv ./exports --dry-run
//! ```

pub mod cli;
pub mod detect;
pub mod error;
pub mod filter;
pub mod runner;
pub mod scan;
pub mod stats;
pub mod transcode;

// Re-exports for convenient access
pub use cli::Args;
pub use detect::{is_utf8_file, SAMPLE_SIZE};
pub use error::{Result, SjconvError};
pub use filter::FileFilter;
pub use runner::{run, RunOptions};
pub use scan::{candidates, Candidate};
pub use stats::{format_bytes, Statistics};
pub use transcode::{process_file, transcode_file, ConvertOptions, Outcome};
