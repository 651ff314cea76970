use contracts::domain::a001_material::{Material, MaterialId, MaterialPayload, MaterialStats};
use contracts::domain::common::AggregateId;
use contracts::shared::pagination::{ListQuery, Page};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, with_query};

const BASE_PATH: &str = "/api/materiales";

fn item_path(id: &MaterialId) -> String {
    format!("{}/{}", BASE_PATH, id.as_string())
}

pub async fn fetch_page(query: &ListQuery) -> Result<Page<Material>, String> {
    get_json(&with_query(BASE_PATH, query)).await
}

pub async fn fetch_by_id(id: MaterialId) -> Result<Material, String> {
    get_json(&item_path(&id)).await
}

pub async fn fetch_stats() -> Result<MaterialStats, String> {
    get_json(&format!("{}/stats", BASE_PATH)).await
}

pub async fn create(payload: &MaterialPayload) -> Result<Material, String> {
    post_json(BASE_PATH, payload).await
}

pub async fn update(id: MaterialId, payload: &MaterialPayload) -> Result<Material, String> {
    put_json(&item_path(&id), payload).await
}

pub async fn remove(id: MaterialId) -> Result<(), String> {
    delete(&item_path(&id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_item_path() {
        let id = MaterialId(Uuid::nil());
        assert_eq!(
            item_path(&id),
            "/api/materiales/00000000-0000-0000-0000-000000000000"
        );
    }
}
