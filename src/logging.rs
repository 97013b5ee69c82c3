use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が未設定のときに使うフィルタ。
const DEFAULT_FILTER: &str = "warn";

/// ログ出力を初期化します。
///
/// 標準出力は完了メッセージ専用のため、ログはすべて標準エラー出力に書き出します。
/// 既に初期化済みの場合は何もしません。
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
