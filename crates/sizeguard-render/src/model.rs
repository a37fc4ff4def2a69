#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub path: String,
    pub size: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub threshold: u64,
    pub violations: Vec<RenderableViolation>,
}
