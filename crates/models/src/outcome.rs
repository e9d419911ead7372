use serde::{Deserialize, Serialize};

/// Severity of the issue
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Fatal,
    #[default]
    Error,
    Warning,
    Information,
}

/// Type of issue
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Invalid,
    Structure,
    Required,
    Value,
    Invariant,
    Security,
    Login,
    Unknown,
    Expired,
    Forbidden,
    Suppressed,
    #[default]
    Processing,
    NotSupported,
    Duplicate,
    MultipleMatches,
    NotFound,
    Deleted,
    TooLong,
    CodeInvalid,
    Extension,
    TooCostly,
    BusinessRule,
    Conflict,
    Incomplete,
    Transient,
    LockError,
    NoStore,
    Exception,
    Timeout,
    Throttled,
    Informational,
}

/// Implements `from_error`, `invalid` and `success` for a release's
/// OperationOutcome, whose issue struct is `OperationOutcomeIssue`.
macro_rules! operation_outcome_constructors {
    () => {
        impl OperationOutcome {
            /// Outcome with a single issue describing `err`
            pub fn from_error(err: &$crate::FhirError) -> Self {
                Self::single(err.severity(), err.issue_type(), err.to_string())
            }

            pub fn invalid(message: &str) -> Self {
                Self::single(
                    $crate::outcome::IssueSeverity::Error,
                    $crate::outcome::IssueType::Invalid,
                    message.to_string(),
                )
            }

            pub fn success(message: &str) -> Self {
                Self::single(
                    $crate::outcome::IssueSeverity::Information,
                    $crate::outcome::IssueType::Informational,
                    message.to_string(),
                )
            }

            fn single(
                severity: $crate::outcome::IssueSeverity,
                code: $crate::outcome::IssueType,
                diagnostics: String,
            ) -> Self {
                Self {
                    issue: vec![OperationOutcomeIssue {
                        severity,
                        code,
                        diagnostics: Some(diagnostics),
                        ..Default::default()
                    }],
                    ..Default::default()
                }
            }

            pub fn has_errors(&self) -> bool {
                self.issue.iter().any(|issue| {
                    matches!(
                        issue.severity,
                        $crate::outcome::IssueSeverity::Fatal | $crate::outcome::IssueSeverity::Error
                    )
                })
            }
        }
    };
}

pub(crate) use operation_outcome_constructors;
