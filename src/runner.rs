//! 일괄 변환 실행 모듈
//!
//! 폴더 탐색과 파일 변환을 순차적으로 연결하고 결과를 출력합니다.

use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::filter::FileFilter;
use crate::scan::{self, Candidate};
use crate::stats::{format_bytes, Statistics};
use crate::transcode::{process_file, ConvertOptions, Outcome};

/// 실행 옵션
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// 대상 폴더
    pub root: PathBuf,
    /// 최대 하위 폴더 깊이
    pub depth: usize,
    /// 파일 필터
    pub filter: FileFilter,
    /// 변환 옵션
    pub convert: ConvertOptions,
    /// 상세 출력
    pub verbose: bool,
}

impl RunOptions {
    /// 기본 옵션 생성 (재귀 없음, csv/txt)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            depth: 0,
            filter: FileFilter::default(),
            convert: ConvertOptions::new(),
            verbose: false,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_convert(mut self, convert: ConvertOptions) -> Self {
        self.convert = convert;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// 대상 폴더의 후보 파일을 하나씩 처리
///
/// 루트 폴더를 읽을 수 없을 때만 에러를 돌려주며, 파일 단위 실패는
/// 통계에 기록하고 다음 파일로 넘어갑니다.
pub fn run(options: &RunOptions) -> Result<Statistics> {
    let mut files = scan::candidates(&options.root, options.depth, &options.filter)?;
    let mut stats = Statistics::new();

    for candidate in files.by_ref() {
        debug!(
            path = %candidate.path.display(),
            depth = candidate.depth,
            ext = candidate.extension().unwrap_or_default(),
            "파일 처리"
        );
        let outcome = process_file(&candidate.path, &options.convert);
        report(options, &candidate, &outcome);
        stats.record(candidate.path, &outcome);
    }

    stats.scan_warnings = files.warnings();
    Ok(stats)
}

/// 파일별 결과 한 줄 출력
fn report(options: &RunOptions, candidate: &Candidate, outcome: &Outcome) {
    let name = candidate.relative_to(&options.root).display();

    match outcome {
        Outcome::AlreadyUtf8 => {
            println!("  {} 이미 UTF-8: {}", "⏭️".bright_white(), name);
        }
        Outcome::NeedsConversion => {
            println!("  {} 변환 필요: {}", "🔄".bright_yellow(), name);
        }
        Outcome::Converted {
            bytes_read,
            bytes_written,
        } => {
            if options.verbose {
                println!(
                    "  {} 변환 성공: {} {}",
                    "✅".bright_green(),
                    name,
                    format!(
                        "({} → {})",
                        format_bytes(*bytes_read),
                        format_bytes(*bytes_written)
                    )
                    .dimmed()
                );
            } else {
                println!("  {} 변환 성공: {}", "✅".bright_green(), name);
            }
        }
        Outcome::Failed(e) => {
            eprintln!("  {} 변환 실패: {} - {}", "❌".bright_red(), name, e.to_string().red());
        }
    }
}
