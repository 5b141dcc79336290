/// Read-only category operations implemented on the client
pub mod explorer_service;
/// Project management operations implemented on the client
pub mod management_service;

use crate::model::requests::{Params, merge_params};
use serde_json::Value;

pub use crate::application::interfaces::explorer::ExplorerService;
pub use crate::application::interfaces::management::ManagementService;

/// Named parameters with `extra` merged over them
pub(crate) fn with_params<const N: usize>(named: [(&str, Value); N], extra: Params) -> Params {
    let base = named
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect::<Params>();
    merge_params(base, extra)
}
