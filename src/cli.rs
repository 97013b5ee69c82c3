use clap::Parser;

/// Assets/icon.png から複数解像度の Assets/icon.ico を生成するツール
///
/// 引数は受け付けません。実行すると固定のパスで変換を行います。
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
