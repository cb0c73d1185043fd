use std::sync::Arc;

use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) page_size: u32,
    pub(super) related_limit: usize,
    pub(super) public_base_url: String,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        page_size: u32,
        related_limit: usize,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            read_repo,
            page_size,
            related_limit,
            public_base_url: public_base_url.into(),
        }
    }
}
