//! 파일 변환 모듈
//!
//! 개별 파일의 UTF-8 판별, Shift-JIS 디코딩, UTF-8 덮어쓰기를 담당합니다.

use encoding_rs::{DecoderResult, SHIFT_JIS};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::detect::{self, SAMPLE_SIZE};
use crate::error::{Result, SjconvError};

/// 파일 처리 결과
#[derive(Debug)]
pub enum Outcome {
    /// 이미 UTF-8이라 건너뜀
    AlreadyUtf8,
    /// 변환 필요 (드라이런에서만 사용)
    NeedsConversion,
    /// 변환 성공
    Converted { bytes_read: u64, bytes_written: u64 },
    /// 변환 실패
    Failed(SjconvError),
}

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// UTF-8 판별에 사용할 표본 크기
    pub sample_size: usize,
    /// 표본 대신 파일 전체로 UTF-8 판별
    pub full_check: bool,
    /// 실제로 쓰지 않고 판별만 수행
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
            full_check: false,
            dry_run: false,
        }
    }

    /// 표본 크기 설정
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// 전체 검사 설정
    pub fn with_full_check(mut self, full_check: bool) -> Self {
        self.full_check = full_check;
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 단일 파일 처리
///
/// UTF-8 판별 후 필요하면 Shift-JIS에서 UTF-8로 변환합니다.
/// 모든 에러는 `Outcome::Failed`로 돌려줍니다.
pub fn process_file(path: &Path, options: &ConvertOptions) -> Outcome {
    let is_utf8 = if options.full_check {
        detect::is_utf8_file_full(path)
    } else {
        detect::is_utf8_file(path, options.sample_size)
    };

    match is_utf8 {
        Ok(true) => return Outcome::AlreadyUtf8,
        Ok(false) => {}
        Err(e) => return Outcome::Failed(e),
    }

    if options.dry_run {
        return Outcome::NeedsConversion;
    }

    match transcode_file(path) {
        Ok((bytes_read, bytes_written)) => Outcome::Converted {
            bytes_read,
            bytes_written,
        },
        Err(e) => Outcome::Failed(e),
    }
}

/// 파일 전체를 Shift-JIS로 디코딩하여 UTF-8로 덮어쓰기
///
/// 디코딩이 끝나기 전에는 파일을 건드리지 않으므로, 디코딩 실패 시
/// 원본은 그대로 남습니다. 쓰기 도중 실패하면 파일이 잘릴 수 있습니다.
///
/// # Returns
/// (읽은 바이트 수, 쓴 바이트 수)
pub fn transcode_file(path: &Path) -> Result<(u64, u64)> {
    let bytes = read_all(path)?;

    let text = decode_shift_jis(&bytes).map_err(|m| SjconvError::Decode {
        file: path.to_path_buf(),
        offset: m.offset,
        byte: m.byte,
    })?;

    write_utf8(path, text.as_bytes())?;
    debug!(
        path = %path.display(),
        bytes_read = bytes.len(),
        bytes_written = text.len(),
        "Shift-JIS -> UTF-8 변환"
    );

    Ok((bytes.len() as u64, text.len() as u64))
}

/// 디코딩할 수 없는 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed {
    /// 문제 시퀀스의 시작 오프셋
    pub offset: usize,
    /// 시작 바이트
    pub byte: u8,
}

/// Shift-JIS 바이트열을 문자열로 디코딩 (대체 문자 없이 실패)
///
/// # Examples
/// ```
/// use sjconv::transcode::decode_shift_jis;
///
/// assert_eq!(decode_shift_jis(&[0x93, 0xFA, 0x96, 0x7B]).unwrap(), "日本");
/// assert_eq!(decode_shift_jis(&[b'a', 0xFF]).unwrap_err().offset, 1);
/// ```
pub fn decode_shift_jis(bytes: &[u8]) -> std::result::Result<String, Malformed> {
    if let Some(offset) = find_bare_0x80(bytes) {
        return Err(Malformed { offset, byte: 0x80 });
    }

    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len());
    let mut text = String::with_capacity(capacity);

    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut text, true);
    match result {
        DecoderResult::InputEmpty => Ok(text),
        DecoderResult::Malformed(bad_len, consumed_after) => {
            let offset = read
                .saturating_sub(consumed_after as usize)
                .saturating_sub(bad_len as usize);
            Err(Malformed {
                offset,
                byte: bytes.get(offset).copied().unwrap_or_default(),
            })
        }
        DecoderResult::OutputFull => Err(Malformed {
            offset: read,
            byte: bytes.get(read).copied().unwrap_or_default(),
        }),
    }
}

/// 선행 바이트 위치의 0x80 찾기
///
/// WHATWG Shift_JIS 표는 단독 0x80을 U+0080으로 통과시키지만,
/// JIS X 0208 기반 Shift-JIS에는 해당 문자가 없다.
fn find_bare_0x80(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x80 => return Some(i),
            0x81..=0x9F | 0xE0..=0xFC => i += 2,
            _ => i += 1,
        }
    }
    None
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| SjconvError::Open {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| SjconvError::Read {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(bytes)
}

/// UTF-8 내용으로 파일 덮어쓰기 (권한 0644)
pub fn write_utf8(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |e: std::io::Error| SjconvError::Write {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    // 기존 파일에는 mode()가 적용되지 않으므로 명시적으로 설정
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }

    Ok(())
}
