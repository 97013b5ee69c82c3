use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::icon_size::MAX_ICON_EDGE;

/// 変換元となる、デコード済みの画像。
///
/// 生成後は変更されず、`ResizedImageSet` の材料としてのみ利用されます。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    origin: String,
}

/// 変換元画像の読み込みで発生するエラー。
#[derive(Debug, Error)]
pub enum SourceImageError {
    #[error("変換元の画像が見つかりません: {}", .0.display())]
    NotFound(PathBuf),

    #[error("変換元の画像を読み込めませんでした: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{origin}' を画像としてデコードできませんでした")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },
}

impl SourceImage {
    /// 指定されたパスの画像ファイルを読み込み、デコードします。
    ///
    /// フォーマットは拡張子ではなくファイルの中身から判定します。
    ///
    /// # 戻り値
    /// * `Ok(SourceImage)`: デコードに成功した場合。
    /// * `Err(SourceImageError)`: ファイルが存在しない、読み込めない、または画像として無効な場合。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceImageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceImageError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| SourceImageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_bytes(&bytes, path.display().to_string())
    }

    /// メモリ上のバイト列から画像をデコードします。
    /// `origin` はログやエラーメッセージで画像を識別するための名前です。
    pub fn from_bytes(bytes: &[u8], origin: impl Into<String>) -> Result<Self, SourceImageError> {
        let origin = origin.into();
        let image = image::load_from_memory(bytes).map_err(|source| SourceImageError::Decode {
            origin: origin.clone(),
            source,
        })?;

        let (width, height) = image.dimensions();
        debug!("変換元画像を読み込みました: {} ({}x{})", origin, width, height);

        let source_image = Self { image, origin };
        source_image.warn_on_quality_hazards();
        Ok(source_image)
    }

    // 正方形でない画像は引き伸ばされ、小さい画像は拡大される。どちらも変換自体は続行する。
    fn warn_on_quality_hazards(&self) {
        let (width, height) = self.dimensions();
        if !self.is_square() {
            warn!(
                "変換元画像 '{}' が正方形ではありません ({}x{})。各サイズへ引き伸ばされます。",
                self.origin, width, height
            );
        }
        if width < MAX_ICON_EDGE || height < MAX_ICON_EDGE {
            warn!(
                "変換元画像 '{}' ({}x{}) は {}x{} より小さいため、拡大処理が発生します。",
                self.origin, width, height, MAX_ICON_EDGE, MAX_ICON_EDGE
            );
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}
