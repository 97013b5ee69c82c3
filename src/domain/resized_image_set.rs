use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;
use tracing::debug;

use super::icon_size::IconSize;
use super::source_image::SourceImage;

/// リサンプリングに使用するフィルタ。小さいサイズでのエイリアシングを避けるため Lanczos を使う。
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// リサイズ済み画像1枚と、その要求サイズの組。
#[derive(Debug)]
pub struct ResizedImage {
    size: IconSize,
    image: DynamicImage,
}

impl ResizedImage {
    pub fn size(&self) -> IconSize {
        self.size
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// リサイズ後の画像自身が報告する (幅, 高さ)。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// 1枚の変換元画像から生成された、サイズ違いの画像の列。
///
/// `resample` を通じてのみ生成でき、以下が保証されます。
/// - 要求されたサイズ1つにつき1枚、同じ順序で並んでいること
/// - 各画像の実寸が要求サイズと完全に一致していること
#[derive(Debug)]
pub struct ResizedImageSet {
    images: Vec<ResizedImage>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ResampleError {
    #[error("リサイズ先のサイズが1つも指定されていません")]
    EmptySizeList,

    #[error("{requested} へのリサイズ結果が {actual_width}x{actual_height} になりました")]
    DimensionMismatch {
        requested: IconSize,
        actual_width: u32,
        actual_height: u32,
    },
}

impl ResizedImageSet {
    /// 変換元画像を各サイズへリサイズします。
    ///
    /// アスペクト比は維持せず、縦横それぞれ独立に拡縮します（切り抜きは行いません）。
    pub fn resample(source: &SourceImage, sizes: &[IconSize]) -> Result<Self, ResampleError> {
        if sizes.is_empty() {
            return Err(ResampleError::EmptySizeList);
        }

        let mut images = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let (width, height) = size.dimensions();
            let image = source.image().resize_exact(width, height, RESAMPLE_FILTER);

            // ICOのディレクトリは画像自身の寸法から作られるため、ここで要求サイズとの一致を確かめる
            let (actual_width, actual_height) = image.dimensions();
            if (actual_width, actual_height) != (width, height) {
                return Err(ResampleError::DimensionMismatch {
                    requested: size,
                    actual_width,
                    actual_height,
                });
            }

            debug!("{} を {} にリサイズしました", source.origin(), size);
            images.push(ResizedImage { size, image });
        }

        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResizedImage> {
        self.images.iter()
    }

    /// 各画像の実寸から作ったサイズ一覧。
    pub fn size_directory(&self) -> Vec<(u32, u32)> {
        self.images.iter().map(ResizedImage::dimensions).collect()
    }

    pub fn sizes(&self) -> Vec<IconSize> {
        self.images.iter().map(ResizedImage::size).collect()
    }
}
