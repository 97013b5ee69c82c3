//! 変換処理の入出力設定。
//!
//! 実行ファイルは常に `ConversionConfig::default()` を使い、
//! `Assets/icon.png` から `Assets/icon.ico` を生成します。

use crate::domain::icon_size::{IconSize, TARGET_SIZES};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 既定の変換元画像のパス。
pub const DEFAULT_SOURCE_PATH: &str = "Assets/icon.png";
/// 既定の出力先ICOのパス。
pub const DEFAULT_OUTPUT_PATH: &str = "Assets/icon.ico";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("出力するアイコンサイズが1つも指定されていません")]
    EmptyTargetSizes,
}

/// 1回の変換に必要な設定一式。
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    /// 生成するサイズ（ICO内の格納順）。
    pub target_sizes: Vec<IconSize>,
}

impl ConversionConfig {
    /// 既定のサイズ一覧で、入出力パスだけを差し替えた設定を作ります。
    pub fn new<S: AsRef<Path>, O: AsRef<Path>>(source_path: S, output_path: O) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            target_sizes: TARGET_SIZES.to_vec(),
        }
    }

    pub fn with_target_sizes(mut self, target_sizes: Vec<IconSize>) -> Self {
        self.target_sizes = target_sizes;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_sizes.is_empty() {
            return Err(ConfigError::EmptyTargetSizes);
        }
        Ok(())
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_OUTPUT_PATH)
    }
}
