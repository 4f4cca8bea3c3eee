use super::*;
use sf_core::ID;
use sf_core::Unique;
use sf_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Catalog store contract. Products always hydrate together with their
/// category, matching what the read endpoints return.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;
    async fn category(&self, id: ID<Category>) -> Result<Option<Category>, StoreError>;
    async fn create_category(&self, category: &Category) -> Result<(), StoreError>;
    async fn update_category(&self, category: &Category) -> Result<(), StoreError>;
    async fn delete_category(&self, id: ID<Category>) -> Result<(), StoreError>;
    async fn products(&self) -> Result<Vec<(Product, Category)>, StoreError>;
    async fn product(&self, id: ID<Product>) -> Result<Option<(Product, Category)>, StoreError>;
    async fn create_product(&self, product: &Product) -> Result<(), StoreError>;
    async fn update_product(&self, product: &Product) -> Result<(), StoreError>;
    async fn delete_product(&self, id: ID<Product>) -> Result<(), StoreError>;
}

fn category_from(row: &Row) -> Category {
    Category::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, Option<String>>(2),
    )
}

fn joined_from(row: &Row) -> (Product, Category) {
    (
        Product::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            row.get::<_, String>(1),
            row.get::<_, String>(2),
            row.get::<_, f64>(3),
            row.get::<_, i32>(4),
            row.get::<_, Vec<String>>(5),
            ID::from(row.get::<_, uuid::Uuid>(6)),
        ),
        Category::new(
            ID::from(row.get::<_, uuid::Uuid>(6)),
            row.get::<_, String>(7),
            row.get::<_, Option<String>>(8),
        ),
    )
}

const JOINED: &str = const_format::concatcp!(
    "SELECT p.id, p.name, p.description, p.price, p.stock_quantity, p.image_urls,
            c.id, c.name, c.description
     FROM ",
    PRODUCTS,
    " p JOIN ",
    CATEGORIES,
    " c ON c.id = p.category_id"
);

impl CatalogStore for Arc<Client> {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.query(
            const_format::concatcp!("SELECT id, name, description FROM ", CATEGORIES),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(category_from).collect())
        .map_err(StoreError::from)
    }

    async fn category(&self, id: ID<Category>) -> Result<Option<Category>, StoreError> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, name, description FROM ",
                CATEGORIES,
                " WHERE id = $1"
            ),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.as_ref().map(category_from))
        .map_err(StoreError::from)
    }

    async fn create_category(&self, category: &Category) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                CATEGORIES,
                " (id, name, description) VALUES ($1, $2, $3)"
            ),
            &[
                &category.id().inner(),
                &category.name(),
                &category.description(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }

    async fn update_category(&self, category: &Category) -> Result<(), StoreError> {
        let n = self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    CATEGORIES,
                    " SET name = $2, description = $3 WHERE id = $1"
                ),
                &[
                    &category.id().inner(),
                    &category.name(),
                    &category.description(),
                ],
            )
            .await?;
        match n {
            0 => Err(StoreError::NotFound),
            _ => Ok(()),
        }
    }

    async fn delete_category(&self, id: ID<Category>) -> Result<(), StoreError> {
        let n = self
            .execute(
                const_format::concatcp!("DELETE FROM ", CATEGORIES, " WHERE id = $1"),
                &[&id.inner()],
            )
            .await?;
        match n {
            0 => Err(StoreError::NotFound),
            _ => Ok(()),
        }
    }

    async fn products(&self) -> Result<Vec<(Product, Category)>, StoreError> {
        self.query(JOINED, &[])
            .await
            .map(|rows| rows.iter().map(joined_from).collect())
            .map_err(StoreError::from)
    }

    async fn product(&self, id: ID<Product>) -> Result<Option<(Product, Category)>, StoreError> {
        self.query_opt(
            const_format::concatcp!(JOINED, " WHERE p.id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.as_ref().map(joined_from))
        .map_err(StoreError::from)
    }

    async fn create_product(&self, product: &Product) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                PRODUCTS,
                " (id, name, description, price, stock_quantity, image_urls, category_id)
                  VALUES ($1, $2, $3, $4, $5, $6, $7)"
            ),
            &[
                &product.id().inner(),
                &product.name(),
                &product.description(),
                &product.price(),
                &product.stock_quantity(),
                &product.image_urls(),
                &product.category().inner(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }

    async fn update_product(&self, product: &Product) -> Result<(), StoreError> {
        let n = self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    PRODUCTS,
                    " SET name = $2, description = $3, price = $4,
                          stock_quantity = $5, image_urls = $6, category_id = $7
                      WHERE id = $1"
                ),
                &[
                    &product.id().inner(),
                    &product.name(),
                    &product.description(),
                    &product.price(),
                    &product.stock_quantity(),
                    &product.image_urls(),
                    &product.category().inner(),
                ],
            )
            .await?;
        match n {
            0 => Err(StoreError::NotFound),
            _ => Ok(()),
        }
    }

    async fn delete_product(&self, id: ID<Product>) -> Result<(), StoreError> {
        let n = self
            .execute(
                const_format::concatcp!("DELETE FROM ", PRODUCTS, " WHERE id = $1"),
                &[&id.inner()],
            )
            .await?;
        match n {
            0 => Err(StoreError::NotFound),
            _ => Ok(()),
        }
    }
}
