use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn register(
    service: web::Data<AuthService<Arc<Client>>>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AuthError> {
    let user = service.register(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully",
        user,
    }))
}

pub async fn login(
    service: web::Data<AuthService<Arc<Client>>>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    let (token, user) = service.login(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful",
        token,
        user,
    }))
}

pub async fn me(auth: Auth) -> HttpResponse {
    HttpResponse::Ok().json(auth.claims())
}
