// ==========================================
// 煤炭质量可行性评估 - API 层
// ==========================================
// 职责: 对外业务接口（校验 + 编排 + 报告）
// ==========================================

pub mod error;
pub mod evaluation_api;
pub mod validator;

// 重导出
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use evaluation_api::{EvaluationApi, EvaluationReport};
pub use validator::{FieldBounds, SampleValidator};
