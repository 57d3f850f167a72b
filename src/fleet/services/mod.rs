//! Application services for fleet orchestration.

mod dispatch;

pub use dispatch::{
    DispatchError, DispatchOutcome, DispatchRequest, DispatchResult, DispatchService,
};
