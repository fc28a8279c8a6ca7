#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPrRequest {
    pub head_branch: String,
    pub base_branch: String,
}

/// Title and body are filled from the branch's commits by the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrRequest {
    pub head_branch: String,
    pub base_branch: String,
}
