// 整合性チェック
// 結合キューの排出と、記録値との照合

pub mod consistency;

// 公開API
pub use consistency::{drain_combined, verify};
