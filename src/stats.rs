//! 통계 및 유틸리티 모듈
//!
//! 한 번의 실행 동안의 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::transcode::Outcome;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 처리한 후보 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub converted: usize,
    /// 이미 UTF-8이라 건너뛴 수
    pub already_utf8: usize,
    /// 변환이 필요한 파일 수 (드라이런)
    pub needs_conversion: usize,
    /// 실패 수
    pub failed: usize,
    /// 탐색 중 경고 수
    pub scan_warnings: usize,
    /// 변환 대상에서 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 변환 후 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 실패한 파일과 사유
    pub errors: Vec<(PathBuf, String)>,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 하나의 처리 결과 반영
    pub fn record(&mut self, path: PathBuf, outcome: &Outcome) {
        self.total_files += 1;
        match outcome {
            Outcome::AlreadyUtf8 => self.already_utf8 += 1,
            Outcome::NeedsConversion => self.needs_conversion += 1,
            Outcome::Converted {
                bytes_read,
                bytes_written,
            } => {
                self.converted += 1;
                self.total_bytes_read += bytes_read;
                self.total_bytes_written += bytes_written;
            }
            Outcome::Failed(e) => {
                self.failed += 1;
                self.errors.push((path, e.to_string()));
            }
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self, dry_run: bool) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 대상 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );

        if dry_run {
            println!(
                "  {} 변환 필요:    {}",
                "🔄".bright_yellow(),
                self.needs_conversion.to_string().yellow()
            );
        } else {
            println!(
                "  {} 변환:         {}",
                "✅".bright_green(),
                self.converted.to_string().green()
            );
        }

        println!(
            "  {} 이미 UTF-8:   {}",
            "⏭️".bright_white(),
            self.already_utf8
        );

        if self.failed > 0 {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                self.failed.to_string().red()
            );
        } else {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        }

        if self.scan_warnings > 0 {
            println!(
                "  {} 탐색 경고:    {}",
                "⚠️".bright_yellow(),
                self.scan_warnings.to_string().yellow()
            );
        }

        if !dry_run {
            println!(
                "  {} 입력 용량:    {}",
                "📥".bright_yellow(),
                format_bytes(self.total_bytes_read)
            );
            println!(
                "  {} 출력 용량:    {}",
                "📤".bright_magenta(),
                format_bytes(self.total_bytes_written)
            );
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
        println!("{}", self.summary_line(dry_run));
    }

    /// 최종 요약 한 줄
    pub fn summary_line(&self, dry_run: bool) -> String {
        if dry_run {
            format!(
                "✨ 드라이런 완료! {}개의 파일이 변환 대상입니다.",
                self.needs_conversion
            )
        } else {
            format!(
                "✨ 처리 완료! {}개의 파일을 UTF-8로 변환했습니다.",
                self.converted
            )
        }
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use sjconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
