//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::error::Result;
use crate::filter::{FileFilter, DEFAULT_EXTENSIONS};
use crate::runner::RunOptions;
use crate::transcode::ConvertOptions;

/// sjconv CLI 인자 구조체
///
/// 도움말은 표준 에러로 출력하기 위해 clap 기본 help 플래그를 끄고 직접 처리합니다.
#[derive(Parser, Debug)]
#[command(
    name = "sjconv",
    author = "YourName <your@email.com>",
    version,
    disable_help_flag = true,
    about = "SHIFT-JIS TO UTF-8 CONVERTER - 폴더 내 Shift-JIS CSV/TXT 파일들을 UTF-8로 일괄 변환하는 CLI 도구",
    long_about = r#"
SHIFT-JIS TO UTF-8 CONVERTER
============================

지정된 폴더의 CSV/TXT 파일을 검사하여 UTF-8이 아닌 파일을
Shift-JIS로 간주하고 UTF-8로 덮어씁니다.

주의:
  • 원본은 백업 없이 덮어씁니다
  • UTF-8 판별은 파일 앞 4096바이트만 검사합니다 (--full-check로 전체 검사)

예제:
  sjconv ./exports
  sjconv ./exports -r 2
  sjconv ./exports -r 1 --dry-run
  sjconv ./exports --ext csv --pattern "sales_*"
"#
)]
pub struct Args {
    /// 변환할 파일들이 있는 폴더 경로
    pub dir: Option<PathBuf>,

    /// 하위 폴더 탐색 깊이 (0이면 하위 폴더 탐색 안 함)
    #[arg(short = 'r', long = "recursive", value_name = "DEPTH", default_value_t = 0)]
    pub depth: usize,

    /// 변환 대상 확장자 (쉼표로 구분, 대소문자 구분)
    #[arg(
        short,
        long = "ext",
        value_name = "EXT",
        value_delimiter = ',',
        default_values_t = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    )]
    pub extensions: Vec<String>,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "sales_*", "data?.csv")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 앞부분 표본 대신 파일 전체로 UTF-8 여부 판별
    #[arg(long)]
    pub full_check: bool,

    /// 실제 변환 없이 변환될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 도움말 출력
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Args {
    /// 실행 옵션으로 변환 (대상 폴더가 없으면 None)
    pub fn to_run_options(&self) -> Result<Option<RunOptions>> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };

        let filter = FileFilter::new(self.extensions.clone(), self.pattern.clone())?;
        let convert = ConvertOptions::new()
            .with_full_check(self.full_check)
            .with_dry_run(self.dry_run);

        Ok(Some(
            RunOptions::new(dir)
                .with_depth(self.depth)
                .with_filter(filter)
                .with_convert(convert)
                .with_verbose(self.verbose),
        ))
    }
}
