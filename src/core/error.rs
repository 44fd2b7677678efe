// パイプライン専用のカスタムエラー型定義

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("件数不一致: 記録={recorded} 観測={observed}")]
    CountMismatch { recorded: i64, observed: i64 },

    #[error("合計不一致: 記録={recorded} 観測={observed}")]
    SumMismatch { recorded: i64, observed: i64 },

    #[error("ワーカー別の内訳が不正: 記録件数={recorded} 内訳合計={attributed}")]
    PartitionMismatch { recorded: i64, attributed: i64 },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 整合性チェックで検出される不変条件違反かどうか
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::CountMismatch { .. } | Self::SumMismatch { .. } | Self::PartitionMismatch { .. }
        )
    }

    /// エラーの種類を表す短い識別子
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CountMismatch { .. } => "count_mismatch",
            Self::SumMismatch { .. } => "sum_mismatch",
            Self::PartitionMismatch { .. } => "partition_mismatch",
            Self::ConfigurationError { .. } => "configuration",
            Self::TaskError { .. } => "task",
        }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::task(source)
    }
}

/// パイプライン処理の結果型
pub type PipelineResult<T> = Result<T, PipelineError>;
