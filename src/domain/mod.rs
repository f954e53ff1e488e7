// ==========================================
// 煤炭质量可行性评估 - 领域模型层
// ==========================================
// 职责: 定义样品、判定标准、附加成本表、评估结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod criteria;
pub mod evaluation;
pub mod sample;
pub mod surcharge;
pub mod types;

// 重导出核心类型
pub use criteria::{CriteriaSet, Criterion};
pub use evaluation::{EvaluationResult, Reason, ReasonKind};
pub use sample::Sample;
pub use surcharge::{SurchargeTable, DEFAULT_SURCHARGE_ENTRIES};
pub use types::{Band, Direction, Parameter, Verdict};
