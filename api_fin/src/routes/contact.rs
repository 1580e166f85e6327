use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::contact::ContactKind;
use db::dtos::contact::ContactCreateRequest;
use db::models::contact::Contact;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::contact::ContactRequest;

// Clients and suppliers share shape and behavior; the handlers below only
// differ in the table they point at.

async fn list(pool: &PgPool, kind: ContactKind, user_id: Uuid) -> Res<Vec<Contact>> {
    db::contact::list_by_user(pool, kind, user_id).await
}

async fn create(
    pool: &PgPool,
    kind: ContactKind,
    user_id: Uuid,
    req: ContactRequest,
) -> Res<Contact> {
    if req.nome.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    db::contact::insert(
        pool,
        kind,
        ContactCreateRequest {
            user_id,
            nome: req.nome,
            contato: req.contato,
            observacoes: req.observacoes,
        },
    )
    .await
}

async fn update(
    pool: &PgPool,
    kind: ContactKind,
    user_id: Uuid,
    id: Uuid,
    req: ContactRequest,
) -> Res<Contact> {
    if req.nome.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    db::contact::update(
        pool,
        kind,
        id,
        user_id,
        ContactCreateRequest {
            user_id,
            nome: req.nome,
            contato: req.contato,
            observacoes: req.observacoes,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
}

async fn remove(pool: &PgPool, kind: ContactKind, user_id: Uuid, id: Uuid) -> Res<()> {
    let deleted = db::contact::delete(pool, kind, id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Contact not found".to_string()));
    }
    Ok(())
}

#[get("/clients")]
async fn get_clients(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(list(&pool, ContactKind::Cliente, claims.user_id).await?)
}

#[post("/clients")]
async fn post_client(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ContactRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> impl Responder {
    let contact = create(&pool, ContactKind::Cliente, claims.user_id, req.into_inner()).await?;
    Ok::<_, AppError>(Success::created(contact))
}

#[put("/clients/{id}")]
async fn put_client(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<ContactRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let contact = update(
        &pool,
        ContactKind::Cliente,
        claims.user_id,
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Success::ok(contact)
}

#[delete("/clients/{id}")]
async fn delete_client(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    remove(&pool, ContactKind::Cliente, claims.user_id, path.into_inner()).await?;
    Success::ok(serde_json::json!({ "message": "Contact deleted" }))
}

#[get("/suppliers")]
async fn get_suppliers(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    Success::ok(list(&pool, ContactKind::Fornecedor, claims.user_id).await?)
}

#[post("/suppliers")]
async fn post_supplier(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ContactRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> impl Responder {
    let contact = create(
        &pool,
        ContactKind::Fornecedor,
        claims.user_id,
        req.into_inner(),
    )
    .await?;
    Ok::<_, AppError>(Success::created(contact))
}

#[put("/suppliers/{id}")]
async fn put_supplier(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<ContactRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let contact = update(
        &pool,
        ContactKind::Fornecedor,
        claims.user_id,
        path.into_inner(),
        req.into_inner(),
    )
    .await?;
    Success::ok(contact)
}

#[delete("/suppliers/{id}")]
async fn delete_supplier(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    remove(
        &pool,
        ContactKind::Fornecedor,
        claims.user_id,
        path.into_inner(),
    )
    .await?;
    Success::ok(serde_json::json!({ "message": "Contact deleted" }))
}
