use crate::types::{Endpoint, Specification};

/// Finds the endpoint selected by `identifier`.
///
/// An exact `operationId` match anywhere in the specification wins over a match on the
/// synthesized `"{METHOD}_{path}"` key. Within each pass the first endpoint in declaration
/// order is returned, so duplicated `operationId`s resolve to the earliest one.
pub fn resolve<'a>(spec: &'a Specification, identifier: &str) -> Option<&'a Endpoint> {
    spec.endpoints
        .iter()
        .find(|e| e.operation_id.as_deref() == Some(identifier))
        .or_else(|| spec.endpoints.iter().find(|e| e.key() == identifier))
}
