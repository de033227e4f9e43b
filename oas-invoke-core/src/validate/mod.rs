use crate::types::{HttpMethod, Specification};

/// A path placeholder that no `in: path` parameter declares.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTemplateIssue {
    pub method: HttpMethod,
    pub path: String,
    pub placeholder: String,
}

impl std::fmt::Display for PathTemplateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: placeholder '{{{}}}' has no matching path parameter",
            self.method, self.path, self.placeholder
        )
    }
}

/// Diagnostics only; parsing never fails on these.
pub fn lint_specification(spec: &Specification) -> Vec<PathTemplateIssue> {
    spec.endpoints
        .iter()
        .flat_map(|e| {
            e.unbound_placeholders()
                .into_iter()
                .map(move |placeholder| PathTemplateIssue {
                    method: e.method,
                    path: e.path.clone(),
                    placeholder,
                })
        })
        .collect()
}

impl Specification {
    pub fn lint(&self) -> Vec<PathTemplateIssue> {
        lint_specification(self)
    }
}
