use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use sf_auth::Admin;
use sf_auth::Auth;
use sf_core::ID;
use sf_core::Unique;
use sf_pg::StoreError;
use std::sync::Arc;
use tokio_postgres::Client;

fn category_id(raw: &str) -> Result<ID<Category>, CatalogError> {
    ID::parse(raw).ok_or(CatalogError::Validation("Invalid category id"))
}

fn product_id(raw: &str) -> Result<ID<Product>, CatalogError> {
    ID::parse(raw).ok_or(CatalogError::Validation("Invalid product id"))
}

pub async fn categories(db: web::Data<Arc<Client>>) -> Result<HttpResponse, CatalogError> {
    let categories = db.categories().await.map_err(internal)?;
    Ok(HttpResponse::Ok().json(categories.iter().map(CategoryView::from).collect::<Vec<_>>()))
}

pub async fn category(
    db: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = category_id(&path)?;
    match db.category(id).await.map_err(internal)? {
        Some(category) => Ok(HttpResponse::Ok().json(CategoryView::from(&category))),
        None => Err(CatalogError::NotFound("Category not found")),
    }
}

pub async fn create_category(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    req: web::Json<CategoryRequest>,
) -> Result<HttpResponse, CatalogError> {
    let req = req.into_inner();
    if req.name.is_empty() {
        return Err(CatalogError::Validation("Category name is required"));
    }
    let category = Category::new(ID::default(), req.name, req.description);
    db.create_category(&category).await.map_err(|e| match e {
        StoreError::UniqueViolation => CatalogError::Conflict("Category name already exists"),
        e => internal(e),
    })?;
    Ok(HttpResponse::Created().json(CategoryView::from(&category)))
}

pub async fn update_category(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    path: web::Path<String>,
    req: web::Json<CategoryRequest>,
) -> Result<HttpResponse, CatalogError> {
    let id = category_id(&path)?;
    let req = req.into_inner();
    if req.name.is_empty() {
        return Err(CatalogError::Validation("Category name is required for update"));
    }
    let category = Category::new(id, req.name, req.description);
    db.update_category(&category).await.map_err(|e| match e {
        StoreError::NotFound => CatalogError::NotFound("Category not found"),
        StoreError::UniqueViolation => {
            CatalogError::Conflict("Another category with this name already exists")
        }
        e => internal(e),
    })?;
    Ok(HttpResponse::Ok().json(CategoryView::from(&category)))
}

pub async fn delete_category(
    db: web::Data<Arc<Client>>,
    _admin: Admin,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = category_id(&path)?;
    db.delete_category(id).await.map_err(|e| match e {
        StoreError::NotFound => CatalogError::NotFound("Category not found"),
        StoreError::ForeignKeyViolation => {
            CatalogError::Conflict("Cannot delete category because products are associated with it.")
        }
        e => internal(e),
    })?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn products(db: web::Data<Arc<Client>>) -> Result<HttpResponse, CatalogError> {
    let products = db.products().await.map_err(internal)?;
    Ok(HttpResponse::Ok().json(
        products
            .iter()
            .map(|(p, c)| ProductView::from((p, c)))
            .collect::<Vec<_>>(),
    ))
}

pub async fn product(
    db: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = product_id(&path)?;
    match db.product(id).await.map_err(internal)? {
        Some((product, category)) => {
            Ok(HttpResponse::Ok().json(ProductView::from((&product, &category))))
        }
        None => Err(CatalogError::NotFound("Product not found")),
    }
}

pub async fn create_product(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    req: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, CatalogError> {
    let product = req.into_inner().build()?;
    db.create_product(&product).await.map_err(|e| match e {
        StoreError::ForeignKeyViolation => CatalogError::Validation(
            "Invalid categoryId: The specified category does not exist.",
        ),
        e => internal(e),
    })?;
    match db.product(product.id()).await.map_err(internal)? {
        Some((product, category)) => {
            Ok(HttpResponse::Created().json(ProductView::from((&product, &category))))
        }
        None => Err(CatalogError::Internal),
    }
}

pub async fn update_product(
    db: web::Data<Arc<Client>>,
    _auth: Auth,
    path: web::Path<String>,
    req: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, CatalogError> {
    let id = product_id(&path)?;
    let Some((existing, _)) = db.product(id).await.map_err(internal)? else {
        return Err(CatalogError::NotFound("Product not found"));
    };
    let product = req.into_inner().apply(existing)?;
    db.update_product(&product).await.map_err(|e| match e {
        StoreError::NotFound => CatalogError::NotFound("Product not found"),
        StoreError::ForeignKeyViolation => CatalogError::Validation(
            "Invalid categoryId: The specified category does not exist.",
        ),
        e => internal(e),
    })?;
    match db.product(product.id()).await.map_err(internal)? {
        Some((product, category)) => {
            Ok(HttpResponse::Ok().json(ProductView::from((&product, &category))))
        }
        None => Err(CatalogError::Internal),
    }
}

pub async fn delete_product(
    db: web::Data<Arc<Client>>,
    _admin: Admin,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = product_id(&path)?;
    db.delete_product(id).await.map_err(|e| match e {
        StoreError::NotFound => CatalogError::NotFound("Product not found"),
        e => internal(e),
    })?;
    Ok(HttpResponse::NoContent().finish())
}
