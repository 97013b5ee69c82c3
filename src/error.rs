use crate::config::ConfigError;
use crate::domain::icon_file::IconFileError;
use crate::domain::resized_image_set::ResampleError;
use crate::domain::source_image::SourceImageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("設定エラー")]
    Config(#[from] ConfigError),

    #[error("変換元画像の読み込みエラー")]
    SourceImage(#[from] SourceImageError),

    #[error("リサイズエラー")]
    Resample(#[from] ResampleError),

    #[error("ICOファイルの生成エラー")]
    IconFile(#[from] IconFileError),
}
