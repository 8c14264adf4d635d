//! src/config.rs
//!
//! 负责加载和解析配置文件。
//! 把用户提供的、人类可读的配置 (UserConfigRaw) 与命令行参数合并，
//! 转换为程序内部使用的配置 (AppConfig)。

use crate::error::Result;
use crate::messages::Messages;
use crate::models::{AppConfig, Language, OutputFormat, UserConfigRaw};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// 命令行上可覆盖配置文件的部分
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub language: Option<String>,
    pub json: bool,
}

/// 显式给出的路径必须存在；未给出时尝试当前目录下的 config.json，不存在则使用默认值。
pub fn load_and_build_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let raw_config = match config_path {
        Some(path) => read_user_config(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_user_config(&default_path)?
            } else {
                debug!("未找到 {}，使用默认配置", DEFAULT_CONFIG_FILE);
                UserConfigRaw::default()
            }
        }
    };

    build_app_config(&raw_config, overrides)
}

fn read_user_config(path: &Path) -> Result<UserConfigRaw> {
    info!(path = %path.display(), "加载配置文件");
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn build_app_config(raw_config: &UserConfigRaw, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let language = match overrides.language.as_deref().or(raw_config.language.as_deref()) {
        Some(lang) => lang.parse()?,
        None => Language::default(),
    };

    let output = if overrides.json {
        OutputFormat::Json
    } else {
        match raw_config.output.as_deref() {
            Some(out) => out.parse()?,
            None => OutputFormat::default(),
        }
    };

    let messages = match &raw_config.messages_path {
        Some(path) => Messages::from_path(path)?,
        None => Messages::for_language(language)?,
    };

    Ok(AppConfig {
        language,
        output,
        messages,
    })
}
