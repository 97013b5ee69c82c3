use std::fmt;

/// ICOコンテナに格納できる一辺の最大ピクセル数。
pub const MAX_ICON_EDGE: u32 = 256;

/// 変換で生成するアイコンサイズの一覧（大きい順）。
pub const TARGET_SIZES: [IconSize; 6] = [
    IconSize(256),
    IconSize(128),
    IconSize(64),
    IconSize(48),
    IconSize(32),
    IconSize(16),
];

/// 正方形アイコンの一辺の長さ（ピクセル）。
///
/// `new` コンストラクタを通じて生成した場合、値が `1..=256` の範囲に
/// 収まっていることが保証されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize(u32);

/// `IconSize` の生成時に発生する検証エラー。
#[derive(Debug, PartialEq)]
pub enum IconSizeError {
    /// 一辺が 0 ピクセルの場合。
    Zero,
    /// ICOの上限 (256) を超えている場合。
    TooLarge(u32),
}

impl IconSize {
    pub fn new(edge: u32) -> Result<Self, IconSizeError> {
        match edge {
            0 => Err(IconSizeError::Zero),
            e if e > MAX_ICON_EDGE => Err(IconSizeError::TooLarge(e)),
            e => Ok(Self(e)),
        }
    }

    /// 一辺のピクセル数。
    pub fn edge(&self) -> u32 {
        self.0
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        (self.0, self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

impl fmt::Display for IconSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSizeError::Zero => write!(f, "アイコンサイズに 0 は指定できません。"),
            IconSizeError::TooLarge(edge) => write!(
                f,
                "アイコンサイズ {} は上限 {} を超えています。",
                edge, MAX_ICON_EDGE
            ),
        }
    }
}

impl std::error::Error for IconSizeError {}
