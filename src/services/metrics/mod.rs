// メトリクス記録
// 生成側の合計・件数とワーカー別の寄与件数

pub mod recorder;

// 公開API
pub use recorder::PipelineMetrics;
