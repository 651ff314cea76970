//! API utilities for frontend-backend communication
//!
//! URL construction plus JSON helpers that attach the session token and turn
//! transport, status and decoding failures into user-facing messages.

use crate::shared::config::config;
use crate::system::auth::storage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config().api_base_for(&protocol, &hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Message shown for a non-success HTTP status
pub fn describe_status(status: u16) -> String {
    match status {
        400 => "Solicitud inválida".to_string(),
        401 => "La sesión expiró, vuelva a iniciar sesión".to_string(),
        403 => "No tiene permiso para esta operación".to_string(),
        404 => "Registro no encontrado".to_string(),
        409 => "El registro ya existe o fue modificado por otro usuario".to_string(),
        s if s >= 500 => format!("Error del servidor ({})", s),
        s => format!("Error HTTP {}", s),
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(describe_status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;
    if !response.ok() {
        return Err(describe_status(response.status()));
    }
    Ok(())
}

/// `path?query` for list endpoints
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}
