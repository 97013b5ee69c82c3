//! 1枚のPNG画像から、複数解像度を含むICOファイルを生成するライブラリ。

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod workflow;
