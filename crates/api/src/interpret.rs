//! Classification of remote responses.
//!
//! Every component that receives an [`ApiResponse`] goes through this module
//! before deciding control flow; nothing else inspects return codes or
//! result sets directly.

use serde_json::{Map, Value};

use crate::response::ApiResponse;

/// Return code the remote uses for a successful operation.
pub const RET_CODE_SUCCESS: i64 = 0;

/// Return code the remote uses when the named resource does not exist.
pub const RET_CODE_RESOURCE_NOT_FOUND: i64 = 2100;

/// The classified outcome of a completed remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<T> {
    /// The remote accepted the operation; `T` is the relevant payload.
    Success(T),
    /// The remote completed the call but declined the operation.
    Rejected {
        /// Application return code.
        code: i64,
        /// Message accompanying the rejection, when the remote sent one.
        message: Option<String>,
    },
    /// The resource the call named does not exist remotely.
    NotFound,
}

impl<T> Verdict<T> {
    /// Check whether this is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check whether this is a not-found classification.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Classify a mutating or lookup response by its return code.
pub fn interpret(response: &ApiResponse) -> Verdict<&Map<String, Value>> {
    match response.ret_code {
        RET_CODE_SUCCESS => Verdict::Success(&response.body),
        RET_CODE_RESOURCE_NOT_FOUND => Verdict::NotFound,
        code => Verdict::Rejected {
            code,
            message: response.message.clone(),
        },
    }
}

/// Classify a describe response, resolving its result set.
///
/// A zero-length, absent, or malformed result set classifies as
/// [`Verdict::NotFound`]: the remote omits empty collections, and a describe
/// filtered to one identity that matches nothing means the identity is
/// stale.
pub fn interpret_describe<'a>(
    response: &'a ApiResponse,
    result_set: &str,
) -> Verdict<Vec<&'a Value>> {
    match interpret(response) {
        Verdict::Success(body) => {
            let objects: Vec<&Value> = body
                .get(result_set)
                .and_then(Value::as_array)
                .map(|set| set.iter().collect())
                .unwrap_or_default();
            if objects.is_empty() {
                Verdict::NotFound
            } else {
                Verdict::Success(objects)
            }
        }
        Verdict::Rejected { code, message } => Verdict::Rejected { code, message },
        Verdict::NotFound => Verdict::NotFound,
    }
}
