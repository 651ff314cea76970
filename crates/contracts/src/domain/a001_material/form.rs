//! Create/edit form for materials: raw input, normalization and validation.

use serde::{Deserialize, Serialize};

use super::aggregate::{Material, Unit};
use crate::shared::validation::{
    check_non_negative, check_required, normalize_optional, normalize_text, FieldError,
};

pub const CODIGO_MAX: usize = 20;
pub const NOMBRE_MAX: usize = 120;
pub const DESCRIPCION_MAX: usize = 500;

/// Form state as typed by the user; every field is the raw input text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialForm {
    pub id: Option<String>,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: String,
    pub unidad: String,
    pub stock: String,
    pub stock_minimo: String,
    pub marca: String,
    pub modelo: String,
}

/// Request body for `POST /api/materiales` and `PUT /api/materiales/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPayload {
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub unidad: Unit,
    pub stock: f64,
    pub stock_minimo: f64,
    pub marca: Option<String>,
    pub modelo: Option<String>,
}

impl MaterialForm {
    pub fn new() -> Self {
        Self {
            unidad: Unit::Pieza.code().to_string(),
            stock: "0".to_string(),
            stock_minimo: "0".to_string(),
            ..Default::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Canonical form: collapsed whitespace, upper-case code, lower-case unit,
    /// numbers with `.` as decimal separator
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            codigo: normalize_text(&self.codigo).to_uppercase().replace(' ', "-"),
            nombre: normalize_text(&self.nombre),
            descripcion: self.descripcion.trim().to_string(),
            unidad: self.unidad.trim().to_lowercase(),
            stock: self.stock.trim().replace(',', "."),
            stock_minimo: self.stock_minimo.trim().replace(',', "."),
            marca: normalize_text(&self.marca),
            modelo: normalize_text(&self.modelo),
        }
    }

    /// Normalize and validate; on success returns the body to submit
    pub fn validate(&self) -> Result<MaterialPayload, Vec<FieldError>> {
        let form = self.normalized();
        let mut errors = Vec::new();

        check_required(&mut errors, "codigo", "El código", &form.codigo, CODIGO_MAX);
        if !form.codigo.is_empty()
            && !form
                .codigo
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
        {
            errors.push(FieldError::new(
                "codigo",
                "El código solo admite letras, números y guiones",
            ));
        }
        check_required(&mut errors, "nombre", "El nombre", &form.nombre, NOMBRE_MAX);
        if form.descripcion.chars().count() > DESCRIPCION_MAX {
            errors.push(FieldError::new(
                "descripcion",
                format!("La descripción no puede superar {} caracteres", DESCRIPCION_MAX),
            ));
        }

        let unidad = Unit::from_code(&form.unidad);
        if unidad.is_none() {
            errors.push(FieldError::new("unidad", "Seleccione una unidad válida"));
        }

        let stock = check_non_negative(&mut errors, "stock", "El stock", &form.stock);
        let stock_minimo =
            check_non_negative(&mut errors, "stock_minimo", "El stock mínimo", &form.stock_minimo);

        match (unidad, stock, stock_minimo) {
            (Some(unidad), Some(stock), Some(stock_minimo)) if errors.is_empty() => {
                Ok(MaterialPayload {
                    codigo: form.codigo,
                    nombre: form.nombre,
                    descripcion: normalize_optional(&form.descripcion),
                    unidad,
                    stock,
                    stock_minimo,
                    marca: normalize_optional(&form.marca),
                    modelo: normalize_optional(&form.modelo),
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Material> for MaterialForm {
    fn from(m: &Material) -> Self {
        use crate::domain::common::AggregateId;

        Self {
            id: Some(m.id.as_string()),
            codigo: m.codigo.clone(),
            nombre: m.nombre.clone(),
            descripcion: m.descripcion.clone().unwrap_or_default(),
            unidad: m.unidad.code().to_string(),
            stock: m.stock.to_string(),
            stock_minimo: m.stock_minimo.to_string(),
            marca: m.marca.clone().unwrap_or_default(),
            modelo: m.modelo.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::message_for;

    fn filled() -> MaterialForm {
        MaterialForm {
            codigo: "  cab utp ".into(),
            nombre: " Cable   UTP cat6 ".into(),
            descripcion: "   ".into(),
            unidad: " Metro".into(),
            stock: "305,5".into(),
            stock_minimo: "50".into(),
            marca: "  ".into(),
            modelo: " Dixon  X ".into(),
            ..MaterialForm::new()
        }
    }

    #[test]
    fn test_normalized_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.codigo, "CAB-UTP");
        assert_eq!(payload.nombre, "Cable UTP cat6");
        assert_eq!(payload.descripcion, None);
        assert_eq!(payload.unidad, Unit::Metro);
        assert_eq!(payload.stock, 305.5);
        assert_eq!(payload.stock_minimo, 50.0);
        assert_eq!(payload.marca, None);
        assert_eq!(payload.modelo.as_deref(), Some("Dixon X"));
    }

    #[test]
    fn test_new_form_defaults() {
        let form = MaterialForm::new();
        assert!(!form.is_edit());
        assert_eq!(form.unidad, "pieza");
        let errors = form.validate().unwrap_err();
        assert!(message_for(&errors, "codigo").is_some());
        assert!(message_for(&errors, "nombre").is_some());
        assert!(message_for(&errors, "stock").is_none());
    }

    #[test]
    fn test_rejects_bad_code_unit_and_numbers() {
        let form = MaterialForm {
            codigo: "CAB_01".into(),
            unidad: "litro".into(),
            stock: "-3".into(),
            stock_minimo: "muchos".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            message_for(&errors, "codigo"),
            Some("El código solo admite letras, números y guiones")
        );
        assert_eq!(message_for(&errors, "unidad"), Some("Seleccione una unidad válida"));
        assert_eq!(message_for(&errors, "stock"), Some("El stock no puede ser negativo"));
        assert_eq!(
            message_for(&errors, "stock_minimo"),
            Some("El stock mínimo debe ser un número")
        );
    }

    #[test]
    fn test_length_limits() {
        let form = MaterialForm {
            codigo: "A".repeat(CODIGO_MAX + 1),
            nombre: "n".repeat(NOMBRE_MAX + 1),
            descripcion: "d".repeat(DESCRIPCION_MAX + 1),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert!(message_for(&errors, "codigo").is_some());
        assert!(message_for(&errors, "nombre").is_some());
        assert!(message_for(&errors, "descripcion").is_some());
    }

    #[test]
    fn test_edit_form_from_material() {
        use crate::domain::a001_material::aggregate::MaterialId;
        use crate::domain::common::EntityMetadata;

        let material = Material {
            id: MaterialId::new_v4(),
            codigo: "ONU-01".into(),
            nombre: "ONU Huawei".into(),
            descripcion: Some("GPON".into()),
            unidad: Unit::Caja,
            stock: 4.0,
            stock_minimo: 1.0,
            marca: Some("Huawei".into()),
            modelo: None,
            metadata: EntityMetadata::new(),
        };
        let form = MaterialForm::from(&material);
        assert!(form.is_edit());
        let payload = form.validate().unwrap();
        assert_eq!(payload.unidad, Unit::Caja);
        assert_eq!(payload.descripcion.as_deref(), Some("GPON"));
        assert_eq!(payload.stock, 4.0);
    }
}
