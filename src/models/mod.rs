pub mod kind;
pub mod result;

pub use kind::ResultKind;
pub use result::{Framework, Renderable, ResultBuilder, TestResult};
