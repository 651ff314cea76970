//! Reference catalogs served by the same list endpoint shape:
//! brands, models, providers, warehouses, batches and ONU devices.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Marcas,
    Modelos,
    Proveedores,
    Almacenes,
    Lotes,
    Onus,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Marcas,
        CatalogKind::Modelos,
        CatalogKind::Proveedores,
        CatalogKind::Almacenes,
        CatalogKind::Lotes,
        CatalogKind::Onus,
    ];

    /// Permission resource name and URL segment
    pub fn resource(&self) -> &'static str {
        match self {
            CatalogKind::Marcas => "marcas",
            CatalogKind::Modelos => "modelos",
            CatalogKind::Proveedores => "proveedores",
            CatalogKind::Almacenes => "almacenes",
            CatalogKind::Lotes => "lotes",
            CatalogKind::Onus => "onus",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Marcas => "Marcas",
            CatalogKind::Modelos => "Modelos",
            CatalogKind::Proveedores => "Proveedores",
            CatalogKind::Almacenes => "Almacenes",
            CatalogKind::Lotes => "Lotes",
            CatalogKind::Onus => "Equipos ONU",
        }
    }

    /// Header of the code column; ONU devices are identified by serial number
    pub fn code_label(&self) -> &'static str {
        match self {
            CatalogKind::Onus => "Número de serie",
            CatalogKind::Lotes => "Lote",
            _ => "Código",
        }
    }

    pub fn api_path(&self) -> String {
        format!("/api/{}", self.resource())
    }

    pub fn from_resource(resource: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.resource() == resource)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: Uuid,
    #[serde(default)]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_resource() {
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::from_resource(kind.resource()), Some(kind));
        }
        assert_eq!(CatalogKind::from_resource("usuarios"), None);
        assert_eq!(CatalogKind::Onus.api_path(), "/api/onus");
    }

    #[test]
    fn test_entry_defaults() {
        let json = format!(r#"{{"id":"{}","nombre":"TP-Link"}}"#, Uuid::nil());
        let entry: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert!(entry.activo);
        assert_eq!(entry.codigo, None);
        assert_eq!(entry.descripcion, None);
    }
}
