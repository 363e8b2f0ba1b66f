/// Pagination parameters for listing operations.
///
/// Both fields are optional query-string inputs. The clamping semantics live
/// in [`super::OperationLog::list`]: a negative `offset` clamps to 0, a
/// negative `limit` selects nothing, and an absent `limit` selects through
/// the end.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PageQuery {
    /// Maximum number of operations to return
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub limit: Option<i64>,
    /// Number of operations to skip from the start of the log
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub offset: Option<i64>,
}

/// One page of records together with the total log size.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PageResponse<T> {
    /// Total number of recorded operations, not the size of this page
    pub count: usize,
    /// The requested slice, oldest first
    pub items: Vec<T>,
}
