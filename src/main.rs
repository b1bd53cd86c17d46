//! sjconv - SHIFT-JIS TO UTF-8 CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use sjconv::{cli::Args, runner, runner::RunOptions, stats::Statistics};

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    if args.help {
        print_usage();
        return Ok(());
    }

    // 옵션 생성 (패턴 오류는 치명적)
    let Some(options) = args.to_run_options()? else {
        eprintln!(
            "{}",
            "⚠️ 변환할 폴더 경로를 지정해 주세요.".yellow()
        );
        print_usage();
        return Ok(());
    };

    // 헤더 출력
    print_header(&options);

    // 일괄 변환 (루트 폴더 오류만 치명적)
    let stats = runner::run(&options)
        .with_context(|| format!("폴더 처리 실패: {:?}", options.root))?;

    // 에러 출력
    print_errors(&stats, options.verbose);

    // 통계 출력
    stats.print_summary(options.convert.dry_run);

    // 로그 파일 작성 (실패해도 종료 코드는 바꾸지 않음)
    if let Some(ref log_path) = args.log {
        if let Err(e) = write_error_log(log_path, &stats) {
            eprintln!("{} {:#}", "⚠️ 에러 로그 저장 실패:".yellow(), e);
        }
    }

    Ok(())
}

/// 로깅 초기화 (RUST_LOG가 있으면 우선)
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// 사용법을 표준 에러로 출력
fn print_usage() {
    eprintln!("{}", Args::command().render_help());
}

/// 헤더 출력
fn print_header(options: &RunOptions) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🔤 SHIFT-JIS TO UTF-8 CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 대상 폴더: {:?}", "📂".bright_cyan(), options.root);
    println!(
        "  {} 확장자: {}",
        "📄".bright_green(),
        options.filter.extensions().join(", ")
    );

    if options.depth > 0 {
        println!("  {} 탐색 깊이: {}", "📏".bright_white(), options.depth);
    }

    if options.filter.has_pattern() {
        println!("  {} 패턴 필터 사용", "🔍".bright_magenta());
    }

    if options.convert.full_check {
        println!("  {} {}", "🔎".bright_cyan(), "전체 UTF-8 검사".cyan());
    }

    if options.convert.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 에러 목록 출력
fn print_errors(stats: &Statistics, verbose: bool) {
    if stats.errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, error) in &stats.errors {
        println!("  {} {:?}", "•".red(), path.file_name().unwrap_or_default());
        if verbose {
            println!("    {}", error.dimmed());
        }
    }
}

/// 에러 로그 파일 작성
fn write_error_log(log_path: &Path, stats: &Statistics) -> Result<()> {
    let mut log_file = File::create(log_path)
        .with_context(|| format!("로그 파일을 만들 수 없습니다: {:?}", log_path))?;

    writeln!(log_file, "sjconv 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", unix_now())?;
    writeln!(log_file, "총 에러 수: {}", stats.errors.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, error) in &stats.errors {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "에러: {}", error)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn unix_now() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
