use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for MaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::from_string(s).map(MaterialId)
    }
}

// ============================================================================
// Unit of measure
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pieza,
    Metro,
    Caja,
    Rollo,
    Kilogramo,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Pieza, Unit::Metro, Unit::Caja, Unit::Rollo, Unit::Kilogramo];

    pub fn code(&self) -> &'static str {
        match self {
            Unit::Pieza => "pieza",
            Unit::Metro => "metro",
            Unit::Caja => "caja",
            Unit::Rollo => "rollo",
            Unit::Kilogramo => "kilogramo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Pieza => "Pieza",
            Unit::Metro => "Metro",
            Unit::Caja => "Caja",
            Unit::Rollo => "Rollo",
            Unit::Kilogramo => "Kilogramo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.code().eq_ignore_ascii_case(code))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Stock item tracked by the warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub unidad: Unit,
    pub stock: f64,
    pub stock_minimo: f64,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Material {
    /// At or below the minimum stock level
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.stock_minimo
    }

    pub fn stock_label(&self) -> String {
        format_quantity(self.stock, self.unidad)
    }
}

/// Quantities are shown without decimals when they are whole numbers
pub fn format_quantity(value: f64, unit: Unit) -> String {
    let number = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value).replace('.', ",")
    };
    format!("{} {}", number, unit.label().to_lowercase())
}

/// Aggregated figures for the statistic cards (`/api/materiales/stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialStats {
    pub total: usize,
    pub low_stock: usize,
    pub total_units: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(codigo: &str, stock: f64, stock_minimo: f64) -> Material {
        Material {
            id: MaterialId::new_v4(),
            codigo: codigo.into(),
            nombre: format!("Material {}", codigo),
            descripcion: None,
            unidad: Unit::Pieza,
            stock,
            stock_minimo,
            marca: None,
            modelo: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_low_stock_includes_equality() {
        assert!(material("A", 5.0, 5.0).is_low_stock());
        assert!(!material("B", 6.0, 5.0).is_low_stock());
    }

    #[test]
    fn test_unit_from_code() {
        assert_eq!(Unit::from_code(" Metro "), Some(Unit::Metro));
        assert_eq!(Unit::from_code("litro"), None);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(12.0, Unit::Pieza), "12 pieza");
        assert_eq!(format_quantity(1.5, Unit::Metro), "1,50 metro");
    }

    #[test]
    fn test_material_json_shape() {
        let m = material("CAB-01", 3.0, 1.0);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["unidad"], "pieza");
        assert!(json.get("created_at").is_some());
        assert_eq!(json["id"], serde_json::Value::String(m.id.as_string()));
    }
}
