// ==========================================
// 煤炭质量可行性评估 - 引擎层
// ==========================================
// 职责: 实现判定规则,不做 I/O
// 红线: 所有规则必须输出 reason
// ==========================================

pub mod classifier;
pub mod classifier_core;
pub mod surcharge;

// 重导出核心引擎
pub use classifier::ThresholdClassifier;
pub use classifier_core::ClassifierCore;
pub use surcharge::SurchargeLookup;
