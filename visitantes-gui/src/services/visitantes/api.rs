use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::serde::ok_or_none;

/// Value of the `status` field of a response accepted by the API.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorType {
    #[serde(rename = "Empresarial")]
    Business,
    #[serde(rename = "Personal")]
    Personal,
}

impl VisitorType {
    pub const ALL: [VisitorType; 2] = [VisitorType::Business, VisitorType::Personal];

    /// Business visitors must name the company they represent.
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business)
    }
}

impl std::fmt::Display for VisitorType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Business => write!(f, "Empresarial"),
            Self::Personal => write!(f, "Personal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitorRegistrationRequest {
    pub numero_identificacion: String,
    pub tipo_identificacion: String,
    pub nombres: String,
    pub apellidos: String,
    pub tipo_visitante: VisitorType,
    /// Serialized as `null` when absent.
    pub empresa_representa: Option<String>,
}

/// A visitor as stored by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Visitor {
    pub id_visitante: u64,
    pub numero_identificacion: String,
    pub tipo_identificacion: String,
    pub nombres: String,
    pub apellidos: String,
    pub tipo_visitante: VisitorType,
    pub empresa_representa: Option<String>,
    #[serde(default)]
    pub fecha_registro: Option<NaiveDateTime>,
}

/// Body of every answer of `POST /api/visitantes`, successful or not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default, deserialize_with = "ok_or_none")]
    pub data: Option<Visitor>,
}

impl RegistrationResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_field_names_and_null_company() {
        let request = VisitorRegistrationRequest {
            numero_identificacion: "1020304050".to_string(),
            tipo_identificacion: "CC".to_string(),
            nombres: "Ana".to_string(),
            apellidos: "Pérez".to_string(),
            tipo_visitante: VisitorType::Personal,
            empresa_representa: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "numero_identificacion": "1020304050",
                "tipo_identificacion": "CC",
                "nombres": "Ana",
                "apellidos": "Pérez",
                "tipo_visitante": "Personal",
                "empresa_representa": null,
            })
        );
    }

    #[test]
    fn visitor_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&VisitorType::Business).unwrap(),
            "\"Empresarial\""
        );
        assert_eq!(
            serde_json::from_str::<VisitorType>("\"Personal\"").unwrap(),
            VisitorType::Personal
        );
        assert_eq!(VisitorType::Business.to_string(), "Empresarial");
    }

    #[test]
    fn parse_success_response_with_record() {
        let response: RegistrationResponse = serde_json::from_value(json!({
            "message": "Visitante registrado exitosamente",
            "status": "success",
            "status_code": 201,
            "data": {
                "id_visitante": 7,
                "numero_identificacion": "900123",
                "tipo_identificacion": "NIT",
                "nombres": "Luis",
                "apellidos": "Gómez",
                "tipo_visitante": "Empresarial",
                "empresa_representa": "ACME S.A.S.",
                "fecha_registro": "2025-03-14T09:26:53.589793"
            }
        }))
        .unwrap();

        assert!(response.is_success());
        assert_eq!(response.status_code, Some(201));
        let visitor = response.data.unwrap();
        assert_eq!(visitor.id_visitante, 7);
        assert_eq!(visitor.tipo_visitante, VisitorType::Business);
        assert_eq!(visitor.empresa_representa.as_deref(), Some("ACME S.A.S."));
        assert!(visitor.fecha_registro.is_some());
    }

    #[test]
    fn malformed_record_is_ignored() {
        let response: RegistrationResponse = serde_json::from_value(json!({
            "status": "success",
            "message": "ok",
            "data": { "id_visitante": "not a number" }
        }))
        .unwrap();
        assert!(response.is_success());
        assert!(response.data.is_none());
    }

    #[test]
    fn parse_error_response() {
        let response: RegistrationResponse = serde_json::from_value(json!({
            "error": "El campo nombres es requerido",
            "status": "error",
            "status_code": 400
        }))
        .unwrap();
        assert!(!response.is_success());
        assert_eq!(
            response.error.as_deref(),
            Some("El campo nombres es requerido")
        );
        assert!(response.message.is_none());
    }
}
