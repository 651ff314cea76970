use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, describe_status};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if response.status() == 401 {
        return Err("Usuario o contraseña incorrectos".to_string());
    }
    if !response.ok() {
        return Err(describe_status(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/auth/refresh"))
        .json(&request)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        return Err(describe_status(response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// Revoke the refresh token
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/auth/logout"))
        .json(&request)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        return Err(describe_status(response.status()));
    }

    Ok(())
}

/// Current user with the session permission list
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("No se pudo conectar con el servidor: {}", e))?;

    if !response.ok() {
        return Err(describe_status(response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}
