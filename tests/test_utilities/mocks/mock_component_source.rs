use oss_attribution::prelude::*;
use std::path::Path;

/// Mock ComponentSource for testing
pub struct MockComponentSource {
    pub records: Vec<ComponentRecord>,
    pub should_fail: bool,
}

impl MockComponentSource {
    pub fn new(records: Vec<ComponentRecord>) -> Self {
        Self {
            records,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            records: Vec::new(),
            should_fail: true,
        }
    }
}

impl ComponentSource for MockComponentSource {
    fn load_components(&self, _path: &Path) -> Result<Vec<ComponentRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock component load failure");
        }
        Ok(self.records.clone())
    }
}
