// ICOコンテナの組み立てには image クレートの ICO エンコーダを使う。
// 各フレームは RGBA8 に変換した上で PNG 圧縮して格納する。
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::ExtendedColorType;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::resized_image_set::ResizedImageSet;

/// ICOの生成や保存で発生するエラー。
#[derive(Debug, Error)]
pub enum IconFileError {
    /// フレームの PNG 化や ICO ディレクトリの書き出しに失敗した場合。
    #[error("{width}x{height} のフレームをICOにエンコードできませんでした")]
    Encode {
        width: u32,
        height: u32,
        #[source]
        source: image::ImageError,
    },

    /// 出力先に書き込めなかった場合（親ディレクトリが無い、権限が無いなど）。
    #[error("ICOファイルを保存できませんでした: {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// メモリ上に生成された、複数解像度を含むICOファイル。
///
/// ディスクへの書き込みは `save_to_path` で一度に行うため、
/// エンコードに失敗した場合に出力先が中途半端な状態で残ることはありません。
#[derive(Debug)]
pub struct IconFile {
    /// ICOディレクトリに記録された各画像の (幅, 高さ)。格納順と同じ。
    size_directory: Vec<(u32, u32)>,
    ico_data: Vec<u8>,
}

impl IconFile {
    /// `ResizedImageSet` の全画像を、並び順のまま1つのICOにまとめます。
    ///
    /// ディレクトリのサイズ情報はリサイズ後の画像自身の寸法から作ります。
    pub fn encode(images: &ResizedImageSet) -> Result<Self, IconFileError> {
        let mut frames = Vec::with_capacity(images.len());
        for resized in images.iter() {
            let (width, height) = resized.dimensions();
            let rgba = resized.image().to_rgba8();
            let frame = IcoFrame::as_png(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|source| IconFileError::Encode {
                    width,
                    height,
                    source,
                })?;
            frames.push(frame);
        }

        let size_directory = images.size_directory();
        let mut ico_data: Vec<u8> = Vec::new();
        IcoEncoder::new(&mut ico_data)
            .encode_images(&frames)
            .map_err(|source| {
                let (width, height) = size_directory.first().copied().unwrap_or((0, 0));
                IconFileError::Encode {
                    width,
                    height,
                    source,
                }
            })?;

        debug!(
            "{} 枚の画像をICOにエンコードしました ({} バイト)",
            frames.len(),
            ico_data.len()
        );

        Ok(Self {
            size_directory,
            ico_data,
        })
    }

    /// ICOのバイト列を指定されたパスに保存します。既存のファイルは上書きされます。
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), IconFileError> {
        let path = path.as_ref();
        fs::write(path, &self.ico_data).map_err(|source| IconFileError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "ICOファイルを書き出しました: {} ({} バイト)",
            path.display(),
            self.ico_data.len()
        );
        Ok(())
    }

    pub fn size_directory(&self) -> &[(u32, u32)] {
        &self.size_directory
    }

    pub fn data(&self) -> &[u8] {
        &self.ico_data
    }

    pub fn len(&self) -> usize {
        self.ico_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ico_data.is_empty()
    }
}
