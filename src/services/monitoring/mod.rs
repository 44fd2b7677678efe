// 実行状況の報告
// 開始通知、サマリー出力、完了・失敗通知

pub mod implementations;

// 公開API
pub use implementations::{render_summary, ConsoleReporter, NoOpReporter, SummaryFormat};
