// ============================================================================
// Agent Loop - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和加载
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置反序列化和默认值
//   - ✅ 运行时参数合并
//   - ✅ 模板根目录解析
//   - ❌ 不应包含安装逻辑
//   - ❌ 不应包含 CLI 参数定义
//   - ❌ 不应包含用户交互
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::error::InitError;
use crate::utils::constants::{BUNDLED_TEMPLATES_DIR, CONFIG_FILE_NAME, TEMPLATES_ENV_VAR};

/// Agent Loop 配置文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 模板配置
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
    /// 是否输出调试日志
    #[serde(default)]
    pub verbose: bool,
}

/// 模板配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// 模板根目录（包含 zh/ 与 en/ 子目录）
    #[serde(default)]
    pub dir: Option<String>,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub templates_dir: Option<String>,
}

/// 配置默认值 trait - 不依赖配置文件
pub trait ConfigDefaults {
    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 随程序一起编译的模板目录
    fn default_bundled_templates() -> PathBuf {
        PathBuf::from(BUNDLED_TEMPLATES_DIR)
    }
}

impl ConfigDefaults for Config {}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            colored: Config::default_colored(),
            verbose: Config::default_verbose(),
        }
    }
}

impl Config {
    /// 从当前目录加载配置文件，不存在时使用默认配置
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// 从指定路径加载配置文件
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(dir) = args.templates_dir {
            self.templates.dir = Some(dir);
        }
    }

    /// 解析模板根目录
    ///
    /// 显式指定的目录（CLI 或配置文件）必须存在，否则直接报错；
    /// 未指定时依次尝试环境变量、可执行文件旁的 templates/、编译时内置目录。
    pub fn resolve_templates_root(&self) -> Result<PathBuf, InitError> {
        if let Some(dir) = &self.templates.dir {
            let path = PathBuf::from(dir);
            return if path.is_dir() {
                Ok(path)
            } else {
                Err(InitError::TemplatesNotFound(path))
            };
        }

        let env_dir = std::env::var_os(TEMPLATES_ENV_VAR).map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));

        let candidates = [env_dir, exe_dir, Some(Self::default_bundled_templates())];
        candidates
            .into_iter()
            .flatten()
            .find(|path| path.is_dir())
            .ok_or_else(|| InitError::TemplatesNotFound(Self::default_bundled_templates()))
    }
}
