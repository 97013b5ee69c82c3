//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! 変換元画像の読み込み → 各サイズへのリサイズ → ICOへの書き出し、
//! という一方向の処理を順に実行します。

use crate::config::ConversionConfig;
use crate::domain::icon_file::IconFile;
use crate::domain::icon_size::IconSize;
use crate::domain::resized_image_set::ResizedImageSet;
use crate::domain::source_image::SourceImage;
use crate::error::AppError;
use std::path::PathBuf;
use tracing::debug;

/// 成功時に標準出力へ表示するメッセージ。
pub const SUCCESS_MESSAGE: &str = "Icon created successfully!";

/// 1回の変換結果。
#[derive(Debug, Clone, PartialEq)]
pub struct IconReport {
    pub output_path: PathBuf,
    /// ICOに格納したサイズ（格納順）。
    pub sizes: Vec<IconSize>,
    pub byte_len: usize,
}

/// 設定に従って変換を1回実行します。
///
/// # 戻り値
/// * `Ok(IconReport)`: ICOファイルの書き出しまで完了した場合。
/// * `Err(AppError)`: 読み込み・リサイズ・書き出しのいずれかで失敗した場合。
///   変換元の読み込みに失敗した場合、出力ファイルには一切触れません。
pub fn run(config: &ConversionConfig) -> Result<IconReport, AppError> {
    // 1. 設定の検証
    config.validate()?;

    // 2. 変換元画像の読み込み
    let source = SourceImage::open(&config.source_path)?;

    // 3. 各サイズへのリサイズ
    let resized = ResizedImageSet::resample(&source, &config.target_sizes)?;
    debug!("{} 種類のサイズを生成しました", resized.len());

    // 4. ICOの生成と保存
    let icon = IconFile::encode(&resized)?;
    icon.save_to_path(&config.output_path)?;

    Ok(IconReport {
        output_path: config.output_path.clone(),
        sizes: resized.sizes(),
        byte_len: icon.len(),
    })
}
