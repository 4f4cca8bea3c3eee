use sf_core::ID;
use sf_core::Unique;

/// Product grouping with a unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: ID<Self>,
    name: String,
    description: Option<String>,
}

impl Category {
    pub fn new(id: ID<Self>, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Unique for Category {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// A sellable item. Always belongs to exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ID<Self>,
    name: String,
    description: String,
    price: f64,
    stock_quantity: i32,
    image_urls: Vec<String>,
    category: ID<Category>,
}

impl Product {
    pub fn new(
        id: ID<Self>,
        name: String,
        description: String,
        price: f64,
        stock_quantity: i32,
        image_urls: Vec<String>,
        category: ID<Category>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock_quantity,
            image_urls,
            category,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn price(&self) -> f64 {
        self.price
    }
    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }
    pub fn category(&self) -> ID<Category> {
        self.category
    }
}

impl Unique for Product {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use sf_pg::*;

    impl Schema for Category {
        fn name() -> &'static str {
            CATEGORIES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                CATEGORIES,
                " (
                    id          UUID PRIMARY KEY,
                    name        VARCHAR(255) UNIQUE NOT NULL,
                    description TEXT
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_categories_name ON ",
                CATEGORIES,
                " (name);"
            )
        }
    }

    /// The category reference is a plain FK; deleting a category with
    /// products attached fails with `ForeignKeyViolation`.
    impl Schema for Product {
        fn name() -> &'static str {
            PRODUCTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                PRODUCTS,
                " (
                    id             UUID PRIMARY KEY,
                    name           VARCHAR(255) NOT NULL,
                    description    TEXT NOT NULL,
                    price          DOUBLE PRECISION NOT NULL,
                    stock_quantity INT NOT NULL,
                    image_urls     TEXT[] NOT NULL,
                    category_id    UUID NOT NULL REFERENCES ",
                CATEGORIES,
                "(id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_products_category ON ",
                PRODUCTS,
                " (category_id);"
            )
        }
    }
}
