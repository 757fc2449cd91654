//! # 剪贴板
//!
//! 优先使用系统剪贴板 (`arboard`)，不可用时退回 OSC 52 终端转义序列。
//! 两者都失败只记录日志，不向用户报错。成功后返回一个短时有效的
//! 确认标记，过期后界面上的“已复制”提示自动消失。
//!
//! ## 依赖关系
//! - 被 `commands/session.rs`, `commands/swatch.rs` 使用
//! - 使用 `arboard`, `base64`, `console`

use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// 复制确认的显示时长
pub const ACK_DURATION: Duration = Duration::from_millis(1500);

/// 实际生效的复制方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// 系统剪贴板
    Native,
    /// OSC 52 终端转义
    Terminal,
}

impl std::fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyMethod::Native => write!(f, "clipboard"),
            CopyMethod::Terminal => write!(f, "terminal clipboard"),
        }
    }
}

/// 复制成功的确认，过期后不再显示
#[derive(Debug, Clone)]
pub struct CopyAck {
    pub text: String,
    pub method: CopyMethod,
    expires_at: Instant,
}

impl CopyAck {
    pub fn new(text: impl Into<String>, method: CopyMethod, duration: Duration) -> Self {
        Self {
            text: text.into(),
            method,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 剪贴板句柄；系统剪贴板在整个会话中保持打开
pub struct Copier {
    native: Option<Clipboard>,
}

impl Default for Copier {
    fn default() -> Self {
        Self::new()
    }
}

impl Copier {
    pub fn new() -> Self {
        let native = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                debug!("system clipboard unavailable: {}", e);
                None
            }
        };
        Self { native }
    }

    /// 尽力复制；全部失败时返回 `None`
    pub fn copy(&mut self, text: &str) -> Option<CopyAck> {
        if let Some(ref mut clipboard) = self.native {
            match clipboard.set_text(text.to_string()) {
                Ok(()) => return Some(CopyAck::new(text, CopyMethod::Native, ACK_DURATION)),
                Err(e) => debug!("system clipboard copy failed: {}", e),
            }
        }

        let result = if console::Term::stdout().is_term() {
            write_osc52(&mut io::stdout(), text)
        } else {
            Err(io::Error::other("stdout is not a terminal"))
        };

        match result {
            Ok(()) => Some(CopyAck::new(text, CopyMethod::Terminal, ACK_DURATION)),
            Err(e) => {
                warn!("copy to clipboard failed: {}", e);
                None
            }
        }
    }
}

/// 写出 OSC 52 “设置剪贴板”序列
pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    out.flush()
}
