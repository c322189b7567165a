// ============================================================================
// Agent Loop - 语言代码模型
// ============================================================================
//
// 文件: src/models/language.rs
// 职责: 支持的模板语言定义和解析
// 边界:
//   - ✅ 语言代码枚举定义
//   - ✅ 语言代码严格解析
//   - ✅ 语言显示名称
//   - ❌ 不应包含系统语言检测
//   - ❌ 不应包含翻译内容
//   - ❌ 不应包含用户交互
//
// ============================================================================

use std::fmt;
use std::str::FromStr;

use crate::models::error::InitError;

/// 模板语言代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// 中文
    Zh,
    /// 英文
    En,
}

impl Language {
    /// 获取语言代码字符串（同时也是模板目录名）
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// 语言的本地名称，用于语言选择列表
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }

    /// 获取所有支持的语言，顺序即选择列表顺序
    pub fn all() -> &'static [Language] {
        &[Language::Zh, Language::En]
    }
}

impl FromStr for Language {
    type Err = InitError;

    /// 严格解析：只接受 `zh` 或 `en`，不做大小写或空白修正
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            _ => Err(InitError::InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
