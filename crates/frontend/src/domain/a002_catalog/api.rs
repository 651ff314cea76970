use contracts::domain::a002_catalog::{CatalogEntry, CatalogKind};
use contracts::shared::pagination::{ListQuery, Page};

use crate::shared::api_utils::{get_json, with_query};

/// One page of `kind`, e.g. `GET /api/marcas?page=0&page_size=25`
pub async fn fetch_page(kind: CatalogKind, query: &ListQuery) -> Result<Page<CatalogEntry>, String> {
    get_json(&with_query(&kind.api_path(), query)).await
}
